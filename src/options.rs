//! Configuration for [`Fontpie`](crate::Fontpie).

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// The generic family a fallback font is picked from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FontType {
    SansSerif,
    Serif,
    Mono,
}

impl FontType {
    pub fn as_str(self) -> &'static str {
        match self {
            FontType::SansSerif => "sans-serif",
            FontType::Serif => "serif",
            FontType::Mono => "mono",
        }
    }
}

impl fmt::Display for FontType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from `font-family` name to its [`FontType`].
///
/// Keys are matched exactly, including case.
pub type FontTypes = HashMap<String, FontType>;

/// What a filename resolver gets to see about a `@font-face` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFace<'a> {
    /// The URL from the rule's `src` descriptor.
    pub src: &'a str,
    /// The normalized family name.
    pub family: &'a str,
    pub font_type: FontType,
    /// Raw `font-style` value, if present.
    pub style: Option<&'a str>,
    /// Raw `font-weight` value, if present.
    pub weight: Option<&'a str>,
}

/// Maps a `@font-face` rule to the path of its font file.
pub type ResolveFilename = dyn Fn(&FontFace<'_>) -> PathBuf + Send + Sync;

/// Maps a `src` URL to the path of its font file.
pub type SrcUrlToFilename = dyn Fn(&str) -> PathBuf + Send + Sync;

/// Options for [`Fontpie::new`](crate::Fontpie::new).
///
/// `font_types` is required. At most one of `resolve_filename` and
/// `src_url_to_filename` may be set; with neither, the `src` URL is used as
/// the font path unchanged (relative paths resolve against the current
/// directory).
///
/// ```
/// use fontpie::{FontType, Options};
///
/// let options = Options::new()
///     .with_font_types([("Noto Serif", FontType::Serif), ("Roboto", FontType::SansSerif)])
///     .with_src_url_to_filename(|url| format!("./fonts{url}").into());
/// ```
#[derive(Default)]
pub struct Options {
    pub font_types: Option<FontTypes>,
    pub resolve_filename: Option<Box<ResolveFilename>>,
    /// Deprecated in favor of `resolve_filename`, which sees the whole rule.
    pub src_url_to_filename: Option<Box<SrcUrlToFilename>>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_types<I, K>(mut self, font_types: I) -> Self
    where
        I: IntoIterator<Item = (K, FontType)>,
        K: Into<String>,
    {
        self.font_types = Some(
            font_types
                .into_iter()
                .map(|(family, font_type)| (family.into(), font_type))
                .collect(),
        );
        self
    }

    pub fn with_resolve_filename(
        mut self,
        resolve: impl Fn(&FontFace<'_>) -> PathBuf + Send + Sync + 'static,
    ) -> Self {
        self.resolve_filename = Some(Box::new(resolve));
        self
    }

    pub fn with_src_url_to_filename(
        mut self,
        resolve: impl Fn(&str) -> PathBuf + Send + Sync + 'static,
    ) -> Self {
        self.src_url_to_filename = Some(Box::new(resolve));
        self
    }

    /// Check the options and collapse the filename options into one resolver.
    pub(crate) fn validate(self) -> Result<Config> {
        let font_types = self.font_types.ok_or(Error::MissingFontTypes)?;

        let resolve_filename: Box<ResolveFilename> =
            match (self.resolve_filename, self.src_url_to_filename) {
                (Some(_), Some(_)) => return Err(Error::ConflictingFilenameResolvers),
                (Some(resolve), None) => resolve,
                (None, Some(src_url_to_filename)) => {
                    Box::new(move |face: &FontFace<'_>| src_url_to_filename(face.src))
                }
                (None, None) => Box::new(|face: &FontFace<'_>| PathBuf::from(face.src)),
            };

        Ok(Config {
            font_types,
            resolve_filename,
        })
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("font_types", &self.font_types)
            .field("resolve_filename", &self.resolve_filename.is_some())
            .field("src_url_to_filename", &self.src_url_to_filename.is_some())
            .finish()
    }
}

/// Validated options.
pub(crate) struct Config {
    pub font_types: FontTypes,
    pub resolve_filename: Box<ResolveFilename>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("font_types", &self.font_types)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(src: &str) -> FontFace<'_> {
        FontFace {
            src,
            family: "Noto Serif",
            font_type: FontType::Serif,
            style: Some("italic"),
            weight: Some("400"),
        }
    }

    #[test]
    fn test_missing_font_types() {
        assert!(matches!(
            Options::new().validate(),
            Err(Error::MissingFontTypes)
        ));
    }

    #[test]
    fn test_conflicting_resolvers() {
        let options = Options::new()
            .with_font_types([("Roboto", FontType::SansSerif)])
            .with_src_url_to_filename(|_| "hello".into())
            .with_resolve_filename(|_| "world".into());
        assert!(matches!(
            options.validate(),
            Err(Error::ConflictingFilenameResolvers)
        ));
    }

    #[test]
    fn test_default_resolver_is_identity() {
        let config = Options::new()
            .with_font_types(Vec::<(String, FontType)>::new())
            .validate()
            .unwrap();
        assert_eq!(
            (config.resolve_filename)(&face("./a.ttf")),
            PathBuf::from("./a.ttf")
        );
    }

    #[test]
    fn test_src_url_to_filename_sees_only_url() {
        let config = Options::new()
            .with_font_types([("Noto Serif", FontType::Serif)])
            .with_src_url_to_filename(|url| PathBuf::from("fonts").join(url))
            .validate()
            .unwrap();
        assert_eq!(
            (config.resolve_filename)(&face("a.ttf")),
            PathBuf::from("fonts/a.ttf")
        );
    }

    #[test]
    fn test_resolve_filename_sees_whole_face() {
        let config = Options::new()
            .with_font_types([("Noto Serif", FontType::Serif)])
            .with_resolve_filename(|face| {
                format!("{}-{}-{}", face.family, face.font_type, face.style.unwrap_or("")).into()
            })
            .validate()
            .unwrap();
        assert_eq!(
            (config.resolve_filename)(&face("a.ttf")),
            PathBuf::from("Noto Serif-serif-italic")
        );
    }

    #[test]
    fn test_font_type_names() {
        assert_eq!(FontType::SansSerif.to_string(), "sans-serif");
        assert_eq!(FontType::Serif.to_string(), "serif");
        assert_eq!(FontType::Mono.to_string(), "mono");
    }
}
