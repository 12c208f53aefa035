//! Building the fallback `@font-face` rule.

use crate::css::{Declaration, FontFaceRule, Location, Stylesheet, quote_css_string};
use crate::error::{Error, Result};
use crate::font_face::FontFaceDecls;
use crate::metrics::{MetricsCalculator, MetricsRequest};
use crate::resolve::{FALLBACK_SUFFIX, ResolvedFontFace};

/// Compute metrics for `resolved` and build its fallback rule.
///
/// The rule gets, in order: the original `font-family` with the fallback
/// name, the original `font-style` and `font-weight` (shared, not copied),
/// the original `src` pointing at the local fallback font, and the four
/// override descriptors. New declarations are added to `sheet`'s arena; the
/// rule itself is returned for the caller to insert.
pub(crate) fn synthesize_fallback_rule<C>(
    sheet: &mut Stylesheet,
    location: Location,
    decls: &FontFaceDecls,
    resolved: &ResolvedFontFace,
    calculator: &C,
) -> Result<FontFaceRule>
where
    C: MetricsCalculator + ?Sized,
{
    let request = MetricsRequest {
        name: &resolved.family,
        fallback: resolved.font_type,
        style: resolved.style.as_deref(),
        weight: resolved.weight.as_deref(),
    };
    let metrics = calculator
        .calculate(&resolved.filename, &request)
        .ok_or_else(|| Error::Metrics {
            filename: resolved.filename.clone(),
            location,
        })?;

    let family = sheet
        .declaration(decls.family)
        .with_value(quote_css_string(&format!(
            "{}{}",
            resolved.family, FALLBACK_SUFFIX
        )));
    let src = sheet
        .declaration(decls.src)
        .with_value(format!("local({})", metrics.fallback_font));

    let mut declarations = vec![sheet.push_declaration(family)];
    declarations.extend(decls.style);
    declarations.extend(decls.weight);
    declarations.push(sheet.push_declaration(src));
    for (prop, value) in [
        ("ascent-override", metrics.ascent_override),
        ("descent-override", metrics.descent_override),
        ("line-gap-override", metrics.line_gap_override),
        ("size-adjust", metrics.size_adjust),
    ] {
        declarations.push(sheet.push_declaration(Declaration::new(prop, value)));
    }

    Ok(FontFaceRule::synthesized(location, declarations))
}
