//! `src` values in `@font-face` rules.

use cssparser::{ParseError, Parser, ParserInput, Token};

/// Extract the first URL referenced by a `src` descriptor.
///
/// Both `url(path)` (an unquoted URL token) and `url("path" modifiers...)`
/// (a `url` function with a string argument) are recognized. Format hints,
/// `local()` sources and any sources after the first URL are ignored.
///
/// ```
/// use fontpie::parse::parse_src_url;
///
/// assert_eq!(parse_src_url("url(./a.ttf) format('ttf')").as_deref(), Some("./a.ttf"));
/// assert_eq!(parse_src_url("url(\"./a.ttf\" url-modifier)").as_deref(), Some("./a.ttf"));
/// assert_eq!(parse_src_url("format('ttf')"), None);
/// ```
pub fn parse_src_url(value: &str) -> Option<String> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);

    loop {
        let token = parser.next().ok()?.clone();
        match token {
            Token::UnquotedUrl(url) => return Some(url.to_string()),
            Token::Function(name) if name.eq_ignore_ascii_case("url") => {
                if let Some(url) = nested_string(&mut parser) {
                    return Some(url);
                }
            }
            // Other functions and blocks are skipped by the next call to next()
            _ => {}
        }
    }
}

/// Find the first quoted string inside the block the parser is at the start of.
fn nested_string(input: &mut Parser<'_, '_>) -> Option<String> {
    input
        .parse_nested_block(|block| {
            let found = first_string(block);
            // Nested blocks must be consumed entirely
            while block.next().is_ok() {}
            Ok::<_, ParseError<'_, ()>>(found)
        })
        .ok()
        .flatten()
}

fn first_string(input: &mut Parser<'_, '_>) -> Option<String> {
    while let Ok(token) = input.next() {
        match token.clone() {
            Token::QuotedString(string) => return Some(string.to_string()),
            Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock => {
                if let Some(string) = nested_string(input) {
                    return Some(string);
                }
            }
            _ => {}
        }
    }
    None
}
