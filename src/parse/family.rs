//! `font-family` values in `@font-face` rules.

use cssparser::{Parser, ParserInput, Token};

/// Parse a `font-family` descriptor into a single family name.
///
/// Accepts either one quoted string or a run of identifiers, which are
/// joined with single spaces. Comments and whitespace between tokens are
/// dropped. Returns `None` for anything else, including an empty value or
/// an empty string.
///
/// ```
/// use fontpie::parse::parse_font_family;
///
/// assert_eq!(parse_font_family("'Noto Serif'").as_deref(), Some("Noto Serif"));
/// assert_eq!(parse_font_family("Ubuntu/* c */Mono  Bold").as_deref(), Some("Ubuntu Mono Bold"));
/// assert_eq!(parse_font_family("'Roboto' \"Roboto\""), None);
/// ```
pub fn parse_font_family(value: &str) -> Option<String> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);

    // Parser::next skips whitespace and comments
    let first = parser.next().ok()?.clone();
    if let Token::QuotedString(family) = &first
        && parser.is_exhausted()
    {
        return (!family.is_empty()).then(|| family.to_string());
    }

    let mut family = match first {
        Token::Ident(ident) => ident.to_string(),
        _ => return None,
    };
    while let Ok(token) = parser.next() {
        match token {
            Token::Ident(ident) => {
                family.push(' ');
                family.push_str(ident);
            }
            _ => return None,
        }
    }

    Some(family)
}
