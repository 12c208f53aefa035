//! Stylesheet model: `@font-face` rules, their declarations, and string literals.

mod declaration;
mod string;
mod stylesheet;

use std::fmt;

pub use declaration::{DeclId, Declaration};
pub use string::{quote_css_string, unquote_css_string};
pub use stylesheet::{FontFaceRule, Stylesheet};

/// Serialization back to CSS text.
pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

/// A position in the stylesheet source (1-based line and column).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl From<cssparser::SourceLocation> for Location {
    fn from(location: cssparser::SourceLocation) -> Self {
        // cssparser lines are 0-based, columns are already 1-based
        Self {
            line: location.line + 1,
            column: location.column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
