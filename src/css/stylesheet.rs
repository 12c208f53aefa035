//! Stylesheet parsing and serialization.
//!
//! Only `@font-face` rules are modelled. Everything else in the source is
//! kept as text and reproduced unchanged by [`ToCss`], so the only edits a
//! stylesheet ever sees are the fallback rules [`Fontpie`](crate::Fontpie) inserts.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, StyleSheetParser,
};

use super::{DeclId, Declaration, Location, ToCss};

/// An `@font-face` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFaceRule {
    /// Location of the `@` that starts the rule.
    pub location: Location,
    /// Byte offset of the rule in the source. `None` for synthesized rules.
    offset: Option<usize>,
    /// Declarations in document order.
    pub declarations: Vec<DeclId>,
}

impl FontFaceRule {
    /// Create a rule that does not come from the parsed source.
    pub fn synthesized(location: Location, declarations: Vec<DeclId>) -> Self {
        Self {
            location,
            offset: None,
            declarations,
        }
    }

    /// Whether this rule was inserted rather than parsed.
    pub fn is_synthesized(&self) -> bool {
        self.offset.is_none()
    }
}

/// A parsed CSS stylesheet.
///
/// Declarations of all rules live in one arena and are addressed by
/// [`DeclId`]; rules may share declaration ids.
#[derive(Debug, Default, Clone)]
pub struct Stylesheet {
    source: String,
    /// `@font-face` rules in document order, including synthesized ones.
    font_faces: Vec<FontFaceRule>,
    declarations: Vec<Declaration>,
}

impl Stylesheet {
    /// Parse a CSS stylesheet from a string.
    ///
    /// Parsing is lenient: anything that is not a well-formed `@font-face`
    /// rule is skipped and left untouched in the output. Rules nested in
    /// conditional group rules (`@media`, `@supports`, ...) are found too.
    ///
    /// A leading byte-order mark is ignored when tokenizing but kept in the
    /// source.
    pub fn parse(css: &str) -> Self {
        let body = css.strip_prefix('\u{feff}').unwrap_or(css);
        let mut input = ParserInput::new(body);
        let mut parser = Parser::new(&mut input);
        let mut font_faces = Vec::new();
        let mut declarations = Vec::new();

        let mut rule_parser = TopLevelRuleParser {
            font_faces: &mut font_faces,
            declarations: &mut declarations,
            offset_base: css.len() - body.len(),
        };
        parse_rule_list(&mut parser, &mut rule_parser);

        Self {
            source: css.to_string(),
            font_faces,
            declarations,
        }
    }

    /// The original source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// All `@font-face` rules in document order.
    pub fn font_faces(&self) -> &[FontFaceRule] {
        &self.font_faces
    }

    /// Look up a declaration by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was handed out by a different stylesheet.
    pub fn declaration(&self, id: DeclId) -> &Declaration {
        &self.declarations[id.0]
    }

    /// Iterate over a rule's declarations with their ids.
    pub fn declarations<'a>(
        &'a self,
        rule: &'a FontFaceRule,
    ) -> impl Iterator<Item = (DeclId, &'a Declaration)> + 'a {
        rule.declarations
            .iter()
            .map(|&id| (id, self.declaration(id)))
    }

    /// Add a declaration to the arena.
    pub fn push_declaration(&mut self, declaration: Declaration) -> DeclId {
        self.declarations.push(declaration);
        DeclId(self.declarations.len() - 1)
    }

    /// Insert `rule` immediately before the rule at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.font_faces().len()`.
    pub(crate) fn insert_before(&mut self, index: usize, rule: FontFaceRule) {
        self.font_faces.insert(index, rule);
    }

    fn write_rule(&self, buf: &mut String, rule: &FontFaceRule, indent: &str) {
        buf.push_str("@font-face {");
        for (_, declaration) in self.declarations(rule) {
            buf.push('\n');
            buf.push_str(indent);
            buf.push_str("  ");
            declaration.to_css(buf);
        }
        buf.push('\n');
        buf.push_str(indent);
        buf.push('}');
    }
}

impl ToCss for Stylesheet {
    /// Write the original source with synthesized rules spliced in before
    /// the rule each one was inserted in front of.
    fn to_css(&self, buf: &mut String) {
        buf.reserve(self.source.len());
        let mut cursor = 0;
        let mut pending: Vec<&FontFaceRule> = Vec::new();

        for rule in &self.font_faces {
            let Some(offset) = rule.offset else {
                pending.push(rule);
                continue;
            };
            if pending.is_empty() {
                continue;
            }

            buf.push_str(&self.source[cursor..offset]);
            let indent = line_indent(&self.source, offset);
            for synthesized in pending.drain(..) {
                self.write_rule(buf, synthesized, indent);
                buf.push_str("\n\n");
                buf.push_str(indent);
            }
            cursor = offset;
        }

        buf.push_str(&self.source[cursor..]);

        // Rules with nothing parsed after them go at the end
        for synthesized in pending {
            if !buf.is_empty() && !buf.ends_with('\n') {
                buf.push('\n');
            }
            self.write_rule(buf, synthesized, "");
            buf.push('\n');
        }
    }
}

/// Whitespace between the start of the line and `offset`, if that is all
/// there is.
fn line_indent(source: &str, offset: usize) -> &str {
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let prefix = &source[line_start..offset];
    if prefix.chars().all(|c| c == ' ' || c == '\t') {
        prefix
    } else {
        ""
    }
}

// =============================================================================
// CSS Parser Implementation
// =============================================================================

fn parse_rule_list(input: &mut Parser<'_, '_>, rule_parser: &mut TopLevelRuleParser<'_>) {
    for result in StyleSheetParser::new(input, rule_parser) {
        // Ignore errors - lenient parsing
        let _ = result;
    }
}

/// Parser for rule lists: the stylesheet itself and group rule bodies.
struct TopLevelRuleParser<'a> {
    font_faces: &'a mut Vec<FontFaceRule>,
    declarations: &'a mut Vec<Declaration>,
    /// Bytes of `source` in front of the tokenized input.
    offset_base: usize,
}

enum AtRulePrelude {
    FontFace,
    /// A conditional group rule whose body is another rule list.
    Group,
}

/// At-rules whose blocks may contain `@font-face` rules.
const GROUP_RULES: &[&str] = &[
    "media",
    "supports",
    "layer",
    "container",
    "document",
    "scope",
];

impl<'i> AtRuleParser<'i> for TopLevelRuleParser<'_> {
    type Prelude = AtRulePrelude;
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        if name.eq_ignore_ascii_case("font-face") {
            // @font-face has no prelude, just a block
            Ok(AtRulePrelude::FontFace)
        } else if GROUP_RULES.iter().any(|rule| name.eq_ignore_ascii_case(rule)) {
            while input.next().is_ok() {}
            Ok(AtRulePrelude::Group)
        } else {
            // Skip other at-rules
            Err(input.new_custom_error(()))
        }
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        match prelude {
            AtRulePrelude::FontFace => {
                let mut body_parser = FontFaceBodyParser {
                    declarations: &mut *self.declarations,
                };
                let declarations = RuleBodyParser::new(input, &mut body_parser)
                    // Ignore errors - lenient parsing
                    .filter_map(Result::ok)
                    .collect();

                self.font_faces.push(FontFaceRule {
                    location: start.source_location().into(),
                    offset: Some(self.offset_base + start.position().byte_index()),
                    declarations,
                });
            }
            AtRulePrelude::Group => parse_rule_list(input, self),
        }
        Ok(())
    }
}

impl<'i> QualifiedRuleParser<'i> for TopLevelRuleParser<'_> {
    type Prelude = ();
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        // Style rules are never touched
        Err(input.new_custom_error(()))
    }
}

/// Parser for the declarations inside an `@font-face` block.
struct FontFaceBodyParser<'a> {
    declarations: &'a mut Vec<Declaration>,
}

impl<'i> AtRuleParser<'i> for FontFaceBodyParser<'_> {
    type Prelude = ();
    type AtRule = DeclId;
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for FontFaceBodyParser<'_> {
    type Prelude = ();
    type QualifiedRule = DeclId;
    type Error = ();
}

impl<'i> DeclarationParser<'i> for FontFaceBodyParser<'_> {
    type Declaration = DeclId;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        declaration_start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let (value, important) = parse_raw_value(input);
        self.declarations.push(Declaration {
            prop: name.to_string(),
            value,
            important,
            location: Some(declaration_start.source_location().into()),
        });
        Ok(DeclId(self.declarations.len() - 1))
    }
}

impl<'i> RuleBodyItemParser<'i, DeclId, ()> for FontFaceBodyParser<'_> {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

/// Consume a declaration value, returning its trimmed source text and
/// whether it ended in `!important`.
fn parse_raw_value(input: &mut Parser<'_, '_>) -> (String, bool) {
    input.skip_whitespace();
    let start = input.position();
    let (end, important) = loop {
        let state = input.state();
        if input.try_parse(cssparser::parse_important).is_ok() && input.is_exhausted() {
            break (state.position(), true);
        }
        input.reset(&state);
        if input.next_including_whitespace_and_comments().is_err() {
            break (input.position(), false);
        }
    };

    (input.slice(start..end).trim().to_string(), important)
}
