//! Picking the relevant declarations out of an `@font-face` rule.
//!
//! Descriptor names are matched ignoring ASCII case, as CSS requires, so
//! `SRC` and `src` are the same descriptor.

use crate::css::{DeclId, FontFaceRule, Stylesheet};
use crate::warning::{Warning, WarningKind};

/// The declarations of one `@font-face` rule that fallback generation uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFaceDecls {
    pub src: DeclId,
    pub family: DeclId,
    pub style: Option<DeclId>,
    pub weight: Option<DeclId>,
}

/// Collect `src`, `font-family`, `font-style` and `font-weight` from a rule.
///
/// Other descriptors are ignored. A recognized descriptor appearing twice
/// fails at its second occurrence; a missing `src` or `font-family` fails
/// at the rule.
pub fn extract_font_face_decls(
    sheet: &Stylesheet,
    rule: &FontFaceRule,
) -> Result<FontFaceDecls, Warning> {
    let mut src = None;
    let mut family = None;
    let mut style = None;
    let mut weight = None;

    for (id, decl) in sheet.declarations(rule) {
        let slot = if decl.is("src") {
            &mut src
        } else if decl.is("font-family") {
            &mut family
        } else if decl.is("font-style") {
            &mut style
        } else if decl.is("font-weight") {
            &mut weight
        } else {
            continue;
        };

        if slot.is_some() {
            return Err(Warning::new(
                WarningKind::DuplicateDeclaration,
                decl.location.unwrap_or(rule.location),
            ));
        }
        *slot = Some(id);
    }

    let src = src.ok_or_else(|| Warning::new(WarningKind::MissingSrc, rule.location))?;
    let family =
        family.ok_or_else(|| Warning::new(WarningKind::MissingFontFamily, rule.location))?;

    Ok(FontFaceDecls {
        src,
        family,
        style,
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::Location;

    fn extract(css: &str) -> (Stylesheet, Result<FontFaceDecls, Warning>) {
        let sheet = Stylesheet::parse(css);
        let result = extract_font_face_decls(&sheet, &sheet.font_faces()[0]);
        (sheet, result)
    }

    #[test]
    fn test_all_descriptors() {
        let (sheet, result) = extract(
            "@font-face { font-family: A; font-style: italic; font-weight: 400; font-display: swap; src: url(a.ttf) }",
        );
        let decls = result.unwrap();
        assert_eq!(sheet.declaration(decls.family).value, "A");
        assert_eq!(sheet.declaration(decls.src).value, "url(a.ttf)");
        assert_eq!(sheet.declaration(decls.style.unwrap()).value, "italic");
        assert_eq!(sheet.declaration(decls.weight.unwrap()).value, "400");
    }

    #[test]
    fn test_optional_descriptors() {
        let (_, result) = extract("@font-face { src: url(a.ttf); font-family: A }");
        let decls = result.unwrap();
        assert_eq!(decls.style, None);
        assert_eq!(decls.weight, None);
    }

    #[test]
    fn test_duplicate_reported_at_second_occurrence() {
        let (_, result) = extract(
            "@font-face {\n  font-family: Roboto;\n  font-family: Roboto;\n  src: url(a.ttf);\n}",
        );
        assert_eq!(
            result.unwrap_err(),
            Warning::new(WarningKind::DuplicateDeclaration, Location::new(3, 3))
        );
    }

    #[test]
    fn test_duplicate_optional_descriptor() {
        let (_, result) = extract(
            "@font-face { font-family: A; font-weight: 400; font-weight: 700; src: url(a.ttf) }",
        );
        assert_eq!(result.unwrap_err().kind, WarningKind::DuplicateDeclaration);
    }

    #[test]
    fn test_duplicate_wins_over_missing() {
        let (_, result) = extract("@font-face { font-style: normal; font-style: italic }");
        assert_eq!(result.unwrap_err().kind, WarningKind::DuplicateDeclaration);
    }

    #[test]
    fn test_unrecognized_duplicates_ignored() {
        let (_, result) = extract(
            "@font-face { font-display: swap; font-display: block; font-family: A; src: url(a.ttf) }",
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_src() {
        let (_, result) = extract("\n  @font-face { font-family: Roboto; font-weight: 400 }");
        assert_eq!(
            result.unwrap_err(),
            Warning::new(WarningKind::MissingSrc, Location::new(2, 3))
        );
    }

    #[test]
    fn test_property_names_ignore_case() {
        let (_, result) = extract("@font-face { SRC: url(a.ttf); Font-Family: A; font-family: B }");
        assert_eq!(result.unwrap_err().kind, WarningKind::DuplicateDeclaration);
    }

    #[test]
    fn test_missing_family() {
        let (_, result) = extract("@font-face { src: url(a.ttf) }");
        assert_eq!(result.unwrap_err().kind, WarningKind::MissingFontFamily);
    }

    #[test]
    fn test_missing_src_checked_first() {
        let (_, result) = extract("@font-face { font-weight: 400 }");
        assert_eq!(result.unwrap_err().kind, WarningKind::MissingSrc);
    }
}
