//! Fallback font metrics.
//!
//! Computing override metrics requires reading the font file, which this
//! crate does not do. Callers plug in a [`MetricsCalculator`]: any closure
//! with the right signature, or a [`MetricsTable`] of precomputed values.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::options::FontType;

/// Override metrics for a fallback `@font-face` rule.
///
/// Values are CSS text (for example `"89.12%"`) and are copied into the
/// generated rule verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Metrics {
    /// Locally installed font to size (used as `local(<fallback_font>)`).
    pub fallback_font: String,
    pub ascent_override: String,
    pub descent_override: String,
    pub line_gap_override: String,
    pub size_adjust: String,
}

/// The font a calculator is asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsRequest<'a> {
    /// Normalized family name.
    pub name: &'a str,
    /// Generic family to pick the fallback font from.
    pub fallback: FontType,
    /// Raw `font-style` value, passed through unvalidated.
    pub style: Option<&'a str>,
    /// Raw `font-weight` value, passed through unvalidated.
    pub weight: Option<&'a str>,
}

/// Computes fallback metrics for a font file.
///
/// Returning `None` means the font could not be read or measured. This
/// aborts the whole transformation.
pub trait MetricsCalculator {
    fn calculate(&self, filename: &Path, request: &MetricsRequest<'_>) -> Option<Metrics>;
}

impl<F> MetricsCalculator for F
where
    F: Fn(&Path, &MetricsRequest<'_>) -> Option<Metrics>,
{
    fn calculate(&self, filename: &Path, request: &MetricsRequest<'_>) -> Option<Metrics> {
        self(filename, request)
    }
}

/// Precomputed metrics keyed by font path.
///
/// Paths are compared as given, so they must be spelled the way the
/// filename resolver produces them.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(transparent))]
pub struct MetricsTable {
    metrics: HashMap<PathBuf, Metrics>,
}

impl MetricsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, filename: impl Into<PathBuf>, metrics: Metrics) {
        self.metrics.insert(filename.into(), metrics);
    }

    pub fn with(mut self, filename: impl Into<PathBuf>, metrics: Metrics) -> Self {
        self.insert(filename, metrics);
        self
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl MetricsCalculator for MetricsTable {
    fn calculate(&self, filename: &Path, request: &MetricsRequest<'_>) -> Option<Metrics> {
        let metrics = self.metrics.get(filename).cloned();
        if metrics.is_none() {
            log::debug!(
                "no metrics for {} ({})",
                filename.display(),
                request.name
            );
        }
        metrics
    }
}
