//! Single-quoted CSS string literals.

/// Quote `s` as a single-quoted CSS string.
///
/// Backslashes, both quote characters and the usual control characters are
/// escaped; everything else is copied as is.
///
/// ```
/// use fontpie::css::quote_css_string;
///
/// assert_eq!(quote_css_string("Noto Serif Fallback"), "'Noto Serif Fallback'");
/// assert_eq!(quote_css_string("it's"), r"'it\'s'");
/// ```
pub fn quote_css_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('\'');
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\'' => result.push_str("\\'"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\u{8}' => result.push_str("\\b"),
            '\u{c}' => result.push_str("\\f"),
            '\u{b}' => result.push_str("\\v"),
            '\0' => result.push_str("\\0"),
            _ => result.push(c),
        }
    }
    result.push('\'');
    result
}

/// Strip the quotes from a quoted CSS string and resolve its escapes.
///
/// Accepts the short control escapes produced by [`quote_css_string`] as well
/// as CSS hex escapes. The short escapes take precedence, so `\0`, `\b` and
/// `\f` are never read as the start of a hex escape. The caller must pass a
/// string that starts and ends with the same quote character; anything else
/// is returned unchanged.
pub fn unquote_css_string(quoted: &str) -> String {
    let inner = match quoted.as_bytes() {
        [first @ (b'\'' | b'"'), .., last] if first == last => &quoted[1..quoted.len() - 1],
        _ => return quoted.to_string(),
    };

    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        let Some(escaped) = chars.next() else {
            break;
        };
        match escaped {
            'n' => result.push('\n'),
            'r' => result.push('\r'),
            't' => result.push('\t'),
            'b' => result.push('\u{8}'),
            'f' => result.push('\u{c}'),
            'v' => result.push('\u{b}'),
            '0' => result.push('\0'),
            // Line continuation
            '\n' => {}
            _ if escaped.is_ascii_hexdigit() => {
                let mut code = escaped.to_digit(16).unwrap_or_default();
                let mut digits = 1;
                while digits < 6 {
                    match chars.peek().and_then(|c| c.to_digit(16)) {
                        Some(digit) => {
                            code = code * 16 + digit;
                            digits += 1;
                            chars.next();
                        }
                        None => break,
                    }
                }
                if chars.peek().is_some_and(|c| matches!(c, ' ' | '\t' | '\n')) {
                    chars.next();
                }
                let decoded = match code {
                    0 => None,
                    _ => char::from_u32(code),
                };
                result.push(decoded.unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            _ => result.push(escaped),
        }
    }

    result
}
