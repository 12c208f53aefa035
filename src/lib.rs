//! # fontpie
//!
//! Inserts a fallback `@font-face` rule in front of every `@font-face` rule
//! of a stylesheet. The fallback points at a locally installed font with
//! `ascent-override`, `descent-override`, `line-gap-override` and
//! `size-adjust` set so that it takes up the same space as the web font,
//! reducing layout shift while the web font loads.
//!
//! ## Quick Start
//!
//! ```
//! use fontpie::{FontType, Fontpie, Metrics, MetricsTable, Options};
//!
//! let metrics = MetricsTable::new().with(
//!     "fonts/NotoSerif-Italic.ttf",
//!     Metrics {
//!         fallback_font: "Times New Roman".to_string(),
//!         ascent_override: "103.02%".to_string(),
//!         descent_override: "28.23%".to_string(),
//!         line_gap_override: "0%".to_string(),
//!         size_adjust: "103.99%".to_string(),
//!     },
//! );
//! let fontpie = Fontpie::new(
//!     Options::new().with_font_types([("Noto Serif", FontType::Serif)]),
//!     metrics,
//! )
//! .unwrap();
//!
//! let output = fontpie
//!     .process_css("@font-face { font-family: 'Noto Serif'; src: url(fonts/NotoSerif-Italic.ttf) }")
//!     .unwrap();
//! assert!(output.warnings.is_empty());
//! assert!(output.css.starts_with("@font-face {\n  font-family: 'Noto Serif Fallback';"));
//! ```
//!
//! ## Pipeline
//!
//! Each rule goes through three stages, and stops at the first problem:
//!
//! 1. [`extract_font_face_decls`] picks out `src`, `font-family`,
//!    `font-style` and `font-weight`.
//! 2. The family and URL are parsed ([`parse`]), the family is looked up in
//!    the [`FontTypes`] table and the URL mapped to a font file.
//! 3. A [`MetricsCalculator`] measures the font and the fallback rule is
//!    built from the original declarations.
//!
//! Problems with a single rule become [`Warning`]s and the rule is skipped.
//! A calculator failure is an [`Error`] and stops the whole run.

pub mod css;
mod error;
mod fallback;
mod font_face;
mod metrics;
mod options;
pub mod parse;
mod plugin;
mod resolve;
mod warning;

pub use css::{Location, Stylesheet};
pub use error::{Error, Result};
pub use font_face::{FontFaceDecls, extract_font_face_decls};
pub use metrics::{Metrics, MetricsCalculator, MetricsRequest, MetricsTable};
pub use options::{FontFace, FontType, FontTypes, Options, ResolveFilename, SrcUrlToFilename};
pub use plugin::{Fontpie, Output};
pub use resolve::{FALLBACK_SUFFIX, ResolvedFontFace, is_fallback_family};
pub use warning::{PLUGIN_NAME, Warning, WarningKind};
