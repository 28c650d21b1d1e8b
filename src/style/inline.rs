//! Inline `style` attribute parsing.
//!
//! Colors can be overridden with CSS custom properties set inline on the
//! element, e.g. `style="--bezel-color: #333; margin: 4px"`. The declaration
//! list is tokenized with `cssparser`, so comments, strings and nested
//! functions such as `rgba(...)` are handled correctly.

use std::collections::BTreeMap;

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
};

/// Declarations parsed from an inline `style` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: BTreeMap<String, String>,
}

impl InlineStyle {
    /// Parses a declaration list. Invalid declarations are skipped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use device_mockup::InlineStyle;
    ///
    /// let style = InlineStyle::parse("--bezel-color: rgba(0, 0, 0, 0.5); color: red");
    /// assert_eq!(style.get("--bezel-color"), Some("rgba(0, 0, 0, 0.5)"));
    /// assert_eq!(style.get("color"), Some("red"));
    /// ```
    pub fn parse(source: &str) -> Self {
        let mut input = ParserInput::new(source);
        let mut parser = Parser::new(&mut input);
        let mut decl_parser = InlineDeclarationParser;

        let mut declarations = BTreeMap::new();
        for (name, value) in RuleBodyParser::new(&mut parser, &mut decl_parser).flatten() {
            if value.is_empty() {
                continue;
            }
            // Later declarations win, as in the cascade
            declarations.insert(name, value);
        }
        Self { declarations }
    }

    /// Returns the value of a declared property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

struct InlineDeclarationParser;

impl<'i> DeclarationParser<'i> for InlineDeclarationParser {
    type Declaration = (String, String);
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let start = input.position();
        while input.next_including_whitespace_and_comments().is_ok() {}
        let value = input.slice_from(start).trim();
        Ok((name.as_ref().to_string(), value.to_string()))
    }
}

impl<'i> AtRuleParser<'i> for InlineDeclarationParser {
    type Prelude = ();
    type AtRule = (String, String);
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for InlineDeclarationParser {
    type Prelude = ();
    type QualifiedRule = (String, String);
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, (String, String), ()> for InlineDeclarationParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}
