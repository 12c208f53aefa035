//! Running fallback generation over a stylesheet.

use std::fs;
use std::path::Path;

use crate::css::{FontFaceRule, Stylesheet, ToCss};
use crate::error::Result;
use crate::fallback::synthesize_fallback_rule;
use crate::font_face::{FontFaceDecls, extract_font_face_decls};
use crate::metrics::MetricsCalculator;
use crate::options::{Config, Options};
use crate::resolve::{ResolvedFontFace, Skip, resolve_font_face};
use crate::warning::Warning;

/// Inserts a metric-matched fallback rule before every usable `@font-face`.
///
/// Configuration is validated once, in [`Fontpie::new`], and only read
/// afterwards.
#[derive(Debug)]
pub struct Fontpie<C> {
    config: Config,
    calculator: C,
}

/// A transformed stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub css: String,
    /// One warning per skipped rule, in document order.
    pub warnings: Vec<Warning>,
}

impl<C: MetricsCalculator> Fontpie<C> {
    /// Validate `options` and bind the metrics calculator.
    ///
    /// Fails if no font types are given, or if both filename resolvers are.
    pub fn new(options: Options, calculator: C) -> Result<Self> {
        Ok(Self {
            config: options.validate()?,
            calculator,
        })
    }

    /// Process every `@font-face` rule of `sheet` once, in document order.
    ///
    /// Rules that cannot be handled are left alone and reported in the
    /// returned warnings. A metrics failure aborts the pass; fallback rules
    /// inserted before it stay in place.
    pub fn process(&self, sheet: &mut Stylesheet) -> Result<Vec<Warning>> {
        let mut warnings = Vec::new();
        let mut index = 0;

        while let Some(rule) = sheet.font_faces().get(index) {
            index += 1;
            if rule.is_synthesized() {
                continue;
            }

            let location = rule.location;
            let (decls, resolved) = match self.prepare(sheet, rule) {
                Ok(prepared) => prepared,
                Err(Skip::Fallback) => {
                    log::trace!("{location}: already a fallback rule");
                    continue;
                }
                Err(Skip::Warn(warning)) => {
                    log::debug!("{location}: skipping @font-face: {}", warning.kind);
                    warnings.push(warning);
                    continue;
                }
            };

            let fallback = synthesize_fallback_rule(
                sheet,
                location,
                &decls,
                &resolved,
                &self.calculator,
            )?;
            sheet.insert_before(index - 1, fallback);
            index += 1;
            log::debug!(
                "{location}: inserted fallback for {:?} ({})",
                resolved.family,
                resolved.filename.display()
            );
        }

        Ok(warnings)
    }

    /// Parse, process and serialize a stylesheet.
    pub fn process_css(&self, css: &str) -> Result<Output> {
        let mut sheet = Stylesheet::parse(css);
        let warnings = self.process(&mut sheet)?;
        Ok(Output {
            css: sheet.to_css_string(),
            warnings,
        })
    }

    /// Read and process a stylesheet file.
    pub fn process_file(&self, path: impl AsRef<Path>) -> Result<Output> {
        let css = fs::read_to_string(path)?;
        self.process_css(&css)
    }

    fn prepare(
        &self,
        sheet: &Stylesheet,
        rule: &FontFaceRule,
    ) -> std::result::Result<(FontFaceDecls, ResolvedFontFace), Skip> {
        let decls = extract_font_face_decls(sheet, rule)?;
        let resolved = resolve_font_face(sheet, &decls, &self.config)?;
        Ok((decls, resolved))
    }
}
