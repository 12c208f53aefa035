//! Declarations inside `@font-face` rules.

use super::{Location, ToCss};

/// Index of a [`Declaration`] in its stylesheet's declaration arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(pub(crate) usize);

/// A single `property: value` pair.
///
/// The value is kept as raw source text; it is only interpreted by the
/// value parsers in [`crate::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Property name as written in the source.
    pub prop: String,
    /// Raw value text, trimmed, without any `!important` suffix.
    pub value: String,
    pub important: bool,
    /// Where the declaration starts. `None` for synthesized declarations.
    pub location: Option<Location>,
}

impl Declaration {
    /// Create a new declaration with no source location.
    pub fn new(prop: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            prop: prop.into(),
            value: value.into(),
            important: false,
            location: None,
        }
    }

    /// Copy this declaration, replacing its value.
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..self.clone()
        }
    }

    /// Check the property name, ignoring ASCII case.
    pub fn is(&self, prop: &str) -> bool {
        self.prop.eq_ignore_ascii_case(prop)
    }
}

impl ToCss for Declaration {
    /// Write this declaration as CSS, including the trailing semicolon.
    fn to_css(&self, buf: &mut String) {
        buf.push_str(&self.prop);
        buf.push_str(": ");
        buf.push_str(&self.value);
        if self.important {
            buf.push_str(" !important");
        }
        buf.push(';');
    }
}
