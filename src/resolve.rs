//! Turning extracted declarations into a resolved font face.

use std::path::PathBuf;

use crate::css::Stylesheet;
use crate::font_face::FontFaceDecls;
use crate::options::{Config, FontFace, FontType};
use crate::parse::{parse_font_family, parse_src_url};
use crate::warning::{Warning, WarningKind};

/// Suffix appended to the family name of generated fallback rules.
pub const FALLBACK_SUFFIX: &str = " Fallback";

/// Everything needed to compute fallback metrics for one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFontFace {
    pub filename: PathBuf,
    /// Normalized family name (unquoted, comments removed, single spaces).
    pub family: String,
    pub font_type: FontType,
    pub style: Option<String>,
    pub weight: Option<String>,
}

/// Reasons resolution stops early.
#[derive(Debug)]
pub(crate) enum Skip {
    /// The rule is itself a generated fallback rule.
    Fallback,
    Warn(Warning),
}

impl From<Warning> for Skip {
    fn from(warning: Warning) -> Self {
        Skip::Warn(warning)
    }
}

/// Whether `family` names a generated fallback font.
pub fn is_fallback_family(family: &str) -> bool {
    family.ends_with(FALLBACK_SUFFIX)
}

pub(crate) fn resolve_font_face(
    sheet: &Stylesheet,
    decls: &FontFaceDecls,
    config: &Config,
) -> Result<ResolvedFontFace, Skip> {
    let family_decl = sheet.declaration(decls.family);
    let family_location = family_decl.location.unwrap_or_default();
    let family = parse_font_family(&family_decl.value)
        .ok_or_else(|| Warning::new(WarningKind::BadFontFamily, family_location))?;

    if is_fallback_family(&family) {
        return Err(Skip::Fallback);
    }

    let Some(&font_type) = config.font_types.get(&family) else {
        return Err(Warning::new(WarningKind::MissingFontTypeMapping(family), family_location).into());
    };

    let style = decls.style.map(|id| sheet.declaration(id).value.clone());
    let weight = decls.weight.map(|id| sheet.declaration(id).value.clone());

    let src_decl = sheet.declaration(decls.src);
    let src = parse_src_url(&src_decl.value).ok_or_else(|| {
        Warning::new(WarningKind::NoUrl, src_decl.location.unwrap_or_default())
    })?;

    let filename = (config.resolve_filename)(&FontFace {
        src: &src,
        family: &family,
        font_type,
        style: style.as_deref(),
        weight: weight.as_deref(),
    });

    Ok(ResolvedFontFace {
        filename,
        family,
        font_type,
        style,
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::Location;
    use crate::font_face::extract_font_face_decls;
    use crate::options::Options;

    fn config(options: Options) -> Config {
        options
            .with_font_types([
                ("Noto Serif", FontType::Serif),
                ("Roboto", FontType::SansSerif),
                ("Ubuntu Mono", FontType::Mono),
                ("Ubuntu Mono Bold", FontType::Mono),
            ])
            .validate()
            .unwrap()
    }

    fn resolve_with(css: &str, config: &Config) -> Result<ResolvedFontFace, Skip> {
        let sheet = Stylesheet::parse(css);
        let decls = extract_font_face_decls(&sheet, &sheet.font_faces()[0]).unwrap();
        resolve_font_face(&sheet, &decls, config)
    }

    fn resolve(css: &str) -> Result<ResolvedFontFace, Skip> {
        resolve_with(css, &config(Options::new()))
    }

    fn warning(result: Result<ResolvedFontFace, Skip>) -> Warning {
        match result {
            Err(Skip::Warn(warning)) => warning,
            other => panic!("expected a warning, got {:?}", other),
        }
    }

    #[test]
    fn test_resolves_all_fields() {
        let resolved = resolve(
            "@font-face { font-family: 'Noto Serif'; font-style: italic; font-weight: 400; src: url(./a.ttf) format('ttf') }",
        )
        .unwrap();
        assert_eq!(
            resolved,
            ResolvedFontFace {
                filename: PathBuf::from("./a.ttf"),
                family: "Noto Serif".to_string(),
                font_type: FontType::Serif,
                style: Some("italic".to_string()),
                weight: Some("400".to_string()),
            }
        );
    }

    #[test]
    fn test_unquoted_family_names() {
        let resolved =
            resolve("@font-face { font-family: Ubuntu/* a comment */Mono  Bold; src: url(a.ttf) }")
                .unwrap();
        assert_eq!(resolved.family, "Ubuntu Mono Bold");
        assert_eq!(resolved.font_type, FontType::Mono);
        assert_eq!(resolved.style, None);
    }

    #[test]
    fn test_bad_family_at_declaration() {
        let result = resolve("@font-face {\n  font-family: #serif;\n  src: url(a.ttf);\n}");
        assert_eq!(
            warning(result),
            Warning::new(WarningKind::BadFontFamily, Location::new(2, 3))
        );
    }

    #[test]
    fn test_fallback_family_skipped_silently() {
        let result =
            resolve("@font-face { font-family: 'Noto Serif Fallback'; src: local(Times New Roman) }");
        assert!(matches!(result, Err(Skip::Fallback)));
    }

    #[test]
    fn test_missing_type_mapping() {
        let result = resolve("@font-face { font-family: 'Kantumruy Pro'; src: url(a.ttf) }");
        assert_eq!(
            warning(result).kind,
            WarningKind::MissingFontTypeMapping("Kantumruy Pro".to_string())
        );
    }

    #[test]
    fn test_type_mapping_is_case_sensitive() {
        let result = resolve("@font-face { font-family: roboto; src: url(a.ttf) }");
        assert_eq!(
            warning(result).kind,
            WarningKind::MissingFontTypeMapping("roboto".to_string())
        );
    }

    #[test]
    fn test_no_url_at_src() {
        let result = resolve("@font-face {\n  font-family: Roboto;\n  src: format('ttf');\n}");
        assert_eq!(
            warning(result),
            Warning::new(WarningKind::NoUrl, Location::new(3, 3))
        );
    }

    #[test]
    fn test_family_checked_before_src() {
        let result = resolve("@font-face { font-family: ; src: something }");
        assert_eq!(warning(result).kind, WarningKind::BadFontFamily);
    }

    #[test]
    fn test_resolver_receives_font_face() {
        let config = config(Options::new().with_resolve_filename(|face| {
            assert_eq!(
                *face,
                FontFace {
                    src: "/noto-serif/NotoSerif-Italic.ttf",
                    family: "Noto Serif",
                    font_type: FontType::Serif,
                    style: Some("italic"),
                    weight: Some("400"),
                }
            );
            PathBuf::from("./src/fonts").join(face.src.trim_start_matches('/'))
        }));
        let resolved = resolve_with(
            "@font-face { font-family: 'Noto Serif'; font-weight: 400; font-style: italic; src: url(/noto-serif/NotoSerif-Italic.ttf) format('ttf') }",
            &config,
        )
        .unwrap();
        assert_eq!(
            resolved.filename,
            PathBuf::from("./src/fonts/noto-serif/NotoSerif-Italic.ttf")
        );
    }
}
