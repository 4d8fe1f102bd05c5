//! CSS-like selector parsing for element queries.
//!
//! Supports:
//! - `"div"` - by tag
//! - `"#main"` - by `id` attribute
//! - `".pb5"` - by class
//! - `"[data-testid='login']"` - by test ID
//! - `"[style]"`, `"[role='list']"` - by attribute presence or value
//! - `"div.flex.w-100"` - compound
//! - `"a b"`, `"a > b"` - descendant and child combinators

use flexlayout_core::Element;
use thiserror::Error;

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by tag name
    Tag(String),
    /// Match by ID (e.g., `#my-id`)
    Id(String),
    /// Match by test ID (e.g., `[data-testid='foo']`)
    TestId(String),
    /// Match by class (e.g., `.my-class`)
    Class(String),
    /// Match by attribute value (e.g., `[role='list']`)
    Attribute {
        /// Attribute name
        name: String,
        /// Expected value
        value: String,
    },
    /// Match by attribute presence (e.g., `[style]`)
    HasAttribute(String),
    /// All parts match the same element (e.g., `div.flex`)
    Compound(Vec<Selector>),
    /// Descendant combinator (e.g., `.row .col`)
    Descendant(Box<Selector>, Box<Selector>),
    /// Child combinator (e.g., `.row > .col`)
    Child(Box<Selector>, Box<Selector>),
}

impl Selector {
    /// Parse a selector string.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is invalid.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        SelectorParser::new(input).parse()
    }

    /// Check if this selector matches a single element, ignoring ancestors.
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        self.matches_path(&[element])
    }

    /// Check if this selector matches the last element of an ancestor path.
    ///
    /// `path` runs from the outermost ancestor to the candidate element.
    #[must_use]
    pub fn matches_path(&self, path: &[&Element]) -> bool {
        let Some((element, ancestors)) = path.split_last() else {
            return false;
        };
        match self {
            Self::Tag(tag) => element.tag() == tag,
            Self::Id(id) => element.attr("id") == Some(id.as_str()),
            Self::TestId(id) => element.attr("data-testid") == Some(id.as_str()),
            Self::Class(class) => element.has_class(class),
            Self::Attribute { name, value } => element.attr(name) == Some(value.as_str()),
            Self::HasAttribute(name) => {
                if name == "style" {
                    !element.style_attr().is_empty()
                } else if name == "class" {
                    !element.classes().is_empty()
                } else {
                    element.attr(name).is_some()
                }
            }
            Self::Compound(parts) => parts.iter().all(|part| part.matches_path(path)),
            Self::Descendant(ancestor, selector) => {
                selector.matches_path(path)
                    && (1..=ancestors.len()).any(|end| ancestor.matches_path(&path[..end]))
            }
            Self::Child(parent, selector) => {
                selector.matches_path(path) && !ancestors.is_empty() && parent.matches_path(ancestors)
            }
        }
    }
}

/// Selector parser.
pub struct SelectorParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SelectorParser<'a> {
    /// Create a new parser.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Parse the selector.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is invalid.
    pub fn parse(&mut self) -> Result<Selector, SelectorError> {
        self.skip_whitespace();
        if self.peek_char().is_none() {
            return Err(SelectorError::Empty);
        }

        let mut selector = self.parse_compound()?;
        loop {
            let had_whitespace = self.skip_whitespace();
            match self.peek_char() {
                None => break,
                Some('>') => {
                    self.advance();
                    self.skip_whitespace();
                    let rhs = self.parse_compound()?;
                    selector = Selector::Child(Box::new(selector), Box::new(rhs));
                }
                Some(_) if had_whitespace => {
                    let rhs = self.parse_compound()?;
                    selector = Selector::Descendant(Box::new(selector), Box::new(rhs));
                }
                Some(c) => return Err(SelectorError::UnexpectedChar(c)),
            }
        }
        Ok(selector)
    }

    fn parse_compound(&mut self) -> Result<Selector, SelectorError> {
        let mut parts = Vec::new();
        while let Some(c) = self.peek_char() {
            let part = match c {
                '#' => self.parse_id()?,
                '.' => self.parse_class()?,
                '[' => self.parse_attribute()?,
                _ if c.is_alphabetic() && parts.is_empty() => self.parse_tag()?,
                _ => break,
            };
            parts.push(part);
        }

        match parts.len() {
            0 => Err(self
                .peek_char()
                .map_or(SelectorError::ExpectedIdentifier, SelectorError::UnexpectedChar)),
            1 => Ok(parts.remove(0)),
            _ => Ok(Selector::Compound(parts)),
        }
    }

    fn parse_id(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // '#'
        Ok(Selector::Id(self.read_identifier()?))
    }

    fn parse_class(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // '.'
        Ok(Selector::Class(self.read_identifier()?))
    }

    fn parse_tag(&mut self) -> Result<Selector, SelectorError> {
        Ok(Selector::Tag(self.read_identifier()?))
    }

    fn parse_attribute(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // '['

        let name = self.read_until_any(&['=', ']']).trim().to_string();
        if name.is_empty() {
            return Err(SelectorError::InvalidAttribute);
        }

        match self.peek_char() {
            Some(']') => {
                self.advance();
                return Ok(Selector::HasAttribute(name));
            }
            Some('=') => self.advance(),
            _ => return Err(SelectorError::UnclosedAttribute),
        }

        let quote = self.peek_char().filter(|c| *c == '\'' || *c == '"');
        if quote.is_some() {
            self.advance();
        }
        let value = self.read_until_any(&['\'', '"', ']']);
        if quote.is_some() && self.peek_char() == quote {
            self.advance();
        }

        if self.peek_char() != Some(']') {
            return Err(SelectorError::UnclosedAttribute);
        }
        self.advance();

        if name == "data-testid" {
            Ok(Selector::TestId(value))
        } else {
            Ok(Selector::Attribute { name, value })
        }
    }

    fn read_identifier(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        if self.pos == start {
            return Err(SelectorError::ExpectedIdentifier);
        }

        Ok(self.input[start..self.pos].to_string())
    }

    fn read_until_any(&mut self, stops: &[char]) -> String {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if stops.contains(&c) {
                break;
            }
            self.advance();
        }
        self.input[start..self.pos].to_string()
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
        self.pos > start
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }
}

/// Selector parsing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Empty selector
    #[error("empty selector")]
    Empty,
    /// Unexpected character
    #[error("unexpected character: '{0}'")]
    UnexpectedChar(char),
    /// Expected identifier
    #[error("expected identifier")]
    ExpectedIdentifier,
    /// Invalid attribute syntax
    #[error("invalid attribute syntax")]
    InvalidAttribute,
    /// Unclosed attribute bracket
    #[error("unclosed attribute bracket")]
    UnclosedAttribute,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str) -> Selector {
        Selector::Class(name.to_string())
    }

    #[test]
    fn test_parse_tag() {
        assert_eq!(Selector::parse("div").unwrap(), Selector::Tag("div".to_string()));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(Selector::parse("#main").unwrap(), Selector::Id("main".to_string()));
    }

    #[test]
    fn test_parse_class_with_suffix() {
        assert_eq!(Selector::parse(".pr2-ns").unwrap(), class("pr2-ns"));
    }

    #[test]
    fn test_parse_test_id_quotes() {
        let expected = Selector::TestId("login".to_string());
        assert_eq!(Selector::parse("[data-testid='login']").unwrap(), expected);
        assert_eq!(Selector::parse("[data-testid=\"login\"]").unwrap(), expected);
        assert_eq!(Selector::parse("[data-testid=login]").unwrap(), expected);
    }

    #[test]
    fn test_parse_attribute_presence() {
        assert_eq!(
            Selector::parse("[style]").unwrap(),
            Selector::HasAttribute("style".to_string())
        );
    }

    #[test]
    fn test_parse_compound() {
        assert_eq!(
            Selector::parse("div.flex.w-100").unwrap(),
            Selector::Compound(vec![
                Selector::Tag("div".to_string()),
                class("flex"),
                class("w-100"),
            ])
        );
    }

    #[test]
    fn test_parse_combinators() {
        assert_eq!(
            Selector::parse(".a .b > .c").unwrap(),
            Selector::Child(
                Box::new(Selector::Descendant(Box::new(class("a")), Box::new(class("b")))),
                Box::new(class("c")),
            )
        );
    }

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(Selector::parse("  div  ").unwrap(), Selector::Tag("div".to_string()));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Selector::parse(""), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("@x"), Err(SelectorError::UnexpectedChar('@')));
        assert_eq!(Selector::parse("."), Err(SelectorError::ExpectedIdentifier));
        assert_eq!(Selector::parse("[=x]"), Err(SelectorError::InvalidAttribute));
        assert_eq!(Selector::parse("[role='x'"), Err(SelectorError::UnclosedAttribute));
        assert_eq!(Selector::parse(".a >"), Err(SelectorError::ExpectedIdentifier));
    }

    #[test]
    fn test_selector_error_display() {
        assert_eq!(SelectorError::Empty.to_string(), "empty selector");
        assert_eq!(
            SelectorError::UnexpectedChar('@').to_string(),
            "unexpected character: '@'"
        );
        assert_eq!(
            SelectorError::UnclosedAttribute.to_string(),
            "unclosed attribute bracket"
        );
    }

    #[test]
    fn test_matches_element() {
        let el = Element::div()
            .with_class("flex pb5")
            .with_attr("data-testid", "col")
            .with_style("height", "auto");
        assert!(Selector::parse("div").unwrap().matches(&el));
        assert!(Selector::parse(".pb5").unwrap().matches(&el));
        assert!(Selector::parse("div.flex.pb5").unwrap().matches(&el));
        assert!(Selector::parse("[data-testid='col']").unwrap().matches(&el));
        assert!(Selector::parse("[style]").unwrap().matches(&el));
        assert!(!Selector::parse("span").unwrap().matches(&el));
        assert!(!Selector::parse("div.pb0").unwrap().matches(&el));
        assert!(!Selector::parse("[role]").unwrap().matches(&el));
    }

    #[test]
    fn test_matches_path_combinators() {
        let outer = Element::div().with_class("row");
        let middle = Element::div().with_class("col");
        let inner = Element::div().with_class("item");

        let descendant = Selector::parse(".row .item").unwrap();
        assert!(descendant.matches_path(&[&outer, &middle, &inner]));
        assert!(!descendant.matches_path(&[&middle, &inner]));

        let child = Selector::parse(".row > .item").unwrap();
        assert!(!child.matches_path(&[&outer, &middle, &inner]));
        assert!(child.matches_path(&[&outer, &inner]));

        let chain = Selector::parse(".row > .col > .item").unwrap();
        assert!(chain.matches_path(&[&outer, &middle, &inner]));
        assert!(!chain.matches_path(&[]));
    }
}
