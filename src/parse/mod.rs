//! Value parsers for `@font-face` declarations.

mod family;
mod url;

pub use family::parse_font_family;
pub use url::parse_src_url;
