//! Benchmarks for fallback rule generation.
//!
//! Run with: cargo bench

use std::path::PathBuf;

use criterion::{Criterion, criterion_group, criterion_main};

use fontpie::css::ToCss;
use fontpie::{FontType, Fontpie, Metrics, MetricsTable, Options, Stylesheet};

const FAMILIES: &[(&str, FontType)] = &[
    ("Noto Serif", FontType::Serif),
    ("Roboto", FontType::SansSerif),
    ("Ubuntu Mono", FontType::Mono),
];

/// A stylesheet with a few hundred style rules and one `@font-face` per
/// family, weight and style.
fn sample_css() -> String {
    let mut css = String::new();
    for (family, _) in FAMILIES {
        for weight in [300, 400, 700] {
            for style in ["normal", "italic"] {
                css.push_str(&format!(
                    "@font-face {{\n  font-family: '{family}';\n  font-style: {style};\n  font-weight: {weight};\n  font-display: swap;\n  src: url(\"/fonts/{family}-{weight}-{style}.woff2\") format('woff2'),\n    url(\"/fonts/{family}-{weight}-{style}.ttf\") format('ttf');\n}}\n\n"
                ));
            }
        }
    }
    for i in 0..300 {
        css.push_str(&format!(
            ".c{i} {{ font-family: 'Roboto Fallback', Roboto, sans-serif; margin: {i}px; }}\n"
        ));
    }
    css
}

fn sample_fontpie() -> Fontpie<MetricsTable> {
    let mut table = MetricsTable::new();
    for (family, _) in FAMILIES {
        for weight in [300, 400, 700] {
            for style in ["normal", "italic"] {
                table.insert(
                    PathBuf::from(format!("/fonts/{family}-{weight}-{style}.woff2")),
                    Metrics {
                        fallback_font: "Arial".to_string(),
                        ascent_override: "92.77%".to_string(),
                        descent_override: "24.41%".to_string(),
                        line_gap_override: "0%".to_string(),
                        size_adjust: "100.3%".to_string(),
                    },
                );
            }
        }
    }
    Fontpie::new(Options::new().with_font_types(FAMILIES.iter().copied()), table).unwrap()
}

// ============================================================================
// Stylesheet Benchmarks
// ============================================================================

fn bench_parse(c: &mut Criterion) {
    let css = sample_css();

    c.bench_function("parse", |b| {
        b.iter(|| Stylesheet::parse(&css));
    });
}

fn bench_serialize(c: &mut Criterion) {
    let sheet = Stylesheet::parse(&sample_css());

    c.bench_function("serialize", |b| {
        b.iter(|| sheet.to_css_string());
    });
}

// ============================================================================
// Transform Benchmarks
// ============================================================================

fn bench_process_css(c: &mut Criterion) {
    let css = sample_css();
    let fontpie = sample_fontpie();

    c.bench_function("process_css", |b| {
        b.iter(|| fontpie.process_css(&css).unwrap());
    });
}

criterion_group!(
    benches,
    // Stylesheet
    bench_parse,
    bench_serialize,
    // Transform
    bench_process_css,
);
criterion_main!(benches);
