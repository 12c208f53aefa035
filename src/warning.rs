//! Per-rule diagnostics.

use std::fmt;

use crate::css::Location;

/// Name warnings are tagged with.
pub const PLUGIN_NAME: &str = "fontpie";

/// Why a `@font-face` rule was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// A recognized descriptor appears twice in one rule.
    DuplicateDeclaration,
    MissingSrc,
    MissingFontFamily,
    /// The `font-family` value is not one string or a run of identifiers.
    BadFontFamily,
    /// The family has no entry in the font type table.
    MissingFontTypeMapping(String),
    /// The `src` value references no URL.
    NoUrl,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::DuplicateDeclaration => write!(f, "Duplicate declaration"),
            WarningKind::MissingSrc => write!(f, "Missing src"),
            WarningKind::MissingFontFamily => write!(f, "Missing font-family"),
            WarningKind::BadFontFamily => write!(f, "Bad font-family"),
            WarningKind::MissingFontTypeMapping(family) => {
                write!(f, "Missing font type mapping: {}", family)
            }
            WarningKind::NoUrl => write!(f, "No url"),
        }
    }
}

/// A recoverable problem with one rule. The rule is left as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    /// Location of the offending declaration, or of the rule itself.
    pub location: Location,
}

impl Warning {
    pub fn new(kind: WarningKind, location: Location) -> Self {
        Self { kind, location }
    }

    /// The message without plugin name or location.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", PLUGIN_NAME, self.location, self.kind)
    }
}
