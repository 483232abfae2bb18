use std::fmt;

use smallvec::SmallVec;

use super::NodeId;
use crate::error::{MotionError, MotionResult};

/// Read access a tree needs to offer for selector matching.
pub trait SelectorTree {
    fn tag_name(&self, node: NodeId) -> Option<&str>;
    fn parent(&self, node: NodeId) -> Option<NodeId>;
    fn attribute_value(&self, node: NodeId, name: &str) -> Option<&str>;
    fn has_class_name(&self, node: NodeId, class: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeMatch {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSelector {
    pub name: String,
    pub matcher: AttributeMatch,
}

/// Simple selectors that all apply to one element (`a.nav[href^="#"]`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompoundSelector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: SmallVec<[String; 2]>,
    pub attributes: SmallVec<[AttributeSelector; 1]>,
}

/// Compounds joined by descendant combinators, outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexSelector {
    pub compounds: SmallVec<[CompoundSelector; 2]>,
}

/// Comma-separated selector list.
///
/// Supports type and universal selectors, `#id`, `.class`, `[attr]`,
/// `[attr=value]`, `[attr^=value]` and the descendant combinator. Other
/// combinators and pseudo-classes are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    alternatives: SmallVec<[ComplexSelector; 2]>,
}

impl Selector {
    pub fn parse(source: &str) -> MotionResult<Self> {
        let alternatives = Parser::new(source).parse_list()?;
        Ok(Self {
            source: source.to_owned(),
            alternatives,
        })
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn alternatives(&self) -> &[ComplexSelector] {
        &self.alternatives
    }

    #[must_use]
    pub fn matches<T: SelectorTree + ?Sized>(&self, tree: &T, node: NodeId) -> bool {
        self.alternatives
            .iter()
            .any(|complex| complex.matches(tree, node))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl ComplexSelector {
    #[must_use]
    pub fn matches<T: SelectorTree + ?Sized>(&self, tree: &T, node: NodeId) -> bool {
        let Some((subject, ancestors)) = self.compounds.split_last() else {
            return false;
        };
        subject.matches(tree, node) && match_ancestors(ancestors, tree, tree.parent(node))
    }
}

fn match_ancestors<T: SelectorTree + ?Sized>(
    compounds: &[CompoundSelector],
    tree: &T,
    mut candidate: Option<NodeId>,
) -> bool {
    let Some((nearest, rest)) = compounds.split_last() else {
        return true;
    };
    while let Some(node) = candidate {
        let parent = tree.parent(node);
        if nearest.matches(tree, node) && match_ancestors(rest, tree, parent) {
            return true;
        }
        candidate = parent;
    }
    false
}

impl CompoundSelector {
    #[must_use]
    pub fn matches<T: SelectorTree + ?Sized>(&self, tree: &T, node: NodeId) -> bool {
        let Some(tag) = tree.tag_name(node) else {
            return false;
        };
        if let Some(expected) = &self.tag {
            if !expected.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if tree.attribute_value(node, "id") != Some(id.as_str()) {
                return false;
            }
        }
        if !self
            .classes
            .iter()
            .all(|class| tree.has_class_name(node, class))
        {
            return false;
        }
        self.attributes.iter().all(|attribute| {
            let value = tree.attribute_value(node, &attribute.name);
            match (&attribute.matcher, value) {
                (_, None) => false,
                (AttributeMatch::Exists, Some(_)) => true,
                (AttributeMatch::Equals(expected), Some(value)) => value == expected,
                (AttributeMatch::Prefix(prefix), Some(value)) => {
                    !prefix.is_empty() && value.starts_with(prefix.as_str())
                }
            }
        })
    }

    fn is_empty(&self) -> bool {
        self.tag.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attributes.is_empty()
    }
}

struct Parser<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn error(&self, reason: impl Into<String>) -> MotionError {
        MotionError::InvalidSelector {
            selector: self.source.to_owned(),
            reason: reason.into(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn expect(&mut self, expected: char) -> MotionResult<()> {
        match self.bump() {
            Some(ch) if ch == expected => Ok(()),
            Some(ch) => Err(self.error(format!("expected `{expected}`, found `{ch}`"))),
            None => Err(self.error(format!("expected `{expected}`, found end of input"))),
        }
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn parse_list(&mut self) -> MotionResult<SmallVec<[ComplexSelector; 2]>> {
        let mut alternatives = SmallVec::new();
        loop {
            self.skip_whitespace();
            alternatives.push(self.parse_complex()?);
            self.skip_whitespace();
            match self.bump() {
                None => return Ok(alternatives),
                Some(',') => continue,
                Some(ch) => return Err(self.error(format!("unexpected `{ch}`"))),
            }
        }
    }

    fn parse_complex(&mut self) -> MotionResult<ComplexSelector> {
        let mut compounds = SmallVec::new();
        compounds.push(self.parse_compound()?);
        loop {
            let separated = self.skip_whitespace();
            match self.peek() {
                None | Some(',') => break,
                Some(ch @ ('>' | '+' | '~')) => {
                    return Err(self.error(format!("combinator `{ch}` is not supported")));
                }
                Some(_) if separated => compounds.push(self.parse_compound()?),
                Some(ch) => return Err(self.error(format!("unexpected `{ch}`"))),
            }
        }
        Ok(ComplexSelector { compounds })
    }

    fn parse_compound(&mut self) -> MotionResult<CompoundSelector> {
        let mut compound = CompoundSelector::default();
        match self.peek() {
            Some('*') => {
                self.pos += 1;
                compound.tag = Some("*".to_owned());
            }
            Some(ch) if is_ident_start(ch) => {
                compound.tag = Some(self.parse_ident()?.to_ascii_lowercase());
            }
            _ => {}
        }

        loop {
            match self.peek() {
                Some('#') => {
                    self.pos += 1;
                    if compound.id.is_some() {
                        return Err(self.error("multiple ids in one compound"));
                    }
                    compound.id = Some(self.parse_ident()?);
                }
                Some('.') => {
                    self.pos += 1;
                    let class = self.parse_ident()?;
                    compound.classes.push(class);
                }
                Some('[') => {
                    self.pos += 1;
                    let attribute = self.parse_attribute()?;
                    compound.attributes.push(attribute);
                }
                Some(':') => return Err(self.error("pseudo-classes are not supported")),
                _ => break,
            }
        }

        if compound.is_empty() {
            return Err(match self.peek() {
                Some(ch) => self.error(format!("expected a selector, found `{ch}`")),
                None => self.error("expected a selector, found end of input"),
            });
        }
        if compound.tag.as_deref() == Some("*") {
            compound.tag = None;
        }
        Ok(compound)
    }

    fn parse_ident(&mut self) -> MotionResult<String> {
        let start = self.pos;
        match self.peek() {
            Some(ch) if is_ident_start(ch) => self.pos += 1,
            Some('-') => {
                self.pos += 1;
                if !self.peek().is_some_and(is_ident_start) {
                    return Err(self.error("invalid identifier after `-`"));
                }
            }
            Some(ch) => return Err(self.error(format!("invalid identifier start `{ch}`"))),
            None => return Err(self.error("expected an identifier")),
        }
        while self.peek().is_some_and(is_ident_char) {
            self.pos += 1;
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    fn parse_attribute(&mut self) -> MotionResult<AttributeSelector> {
        self.skip_whitespace();
        let name = self.parse_ident()?;
        self.skip_whitespace();
        let matcher = match self.bump() {
            Some(']') => return Ok(AttributeSelector {
                name,
                matcher: AttributeMatch::Exists,
            }),
            Some('=') => AttributeMatch::Equals(self.parse_attribute_value()?),
            Some('^') => {
                self.expect('=')?;
                AttributeMatch::Prefix(self.parse_attribute_value()?)
            }
            Some(ch) => return Err(self.error(format!("unsupported attribute operator `{ch}`"))),
            None => return Err(self.error("unterminated attribute selector")),
        };
        self.skip_whitespace();
        self.expect(']')?;
        Ok(AttributeSelector { name, matcher })
    }

    fn parse_attribute_value(&mut self) -> MotionResult<String> {
        self.skip_whitespace();
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.pos += 1;
                let mut value = String::new();
                loop {
                    match self.bump() {
                        Some(ch) if ch == quote => return Ok(value),
                        Some(ch) => value.push(ch),
                        None => return Err(self.error("unterminated string")),
                    }
                }
            }
            _ => self.parse_ident(),
        }
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || !ch.is_ascii()
}

fn is_ident_char(ch: char) -> bool {
    is_ident_start(ch) || ch.is_ascii_digit() || ch == '-'
}

#[cfg(test)]
mod tests {
    use super::{AttributeMatch, Selector};

    #[test]
    fn parses_selector_lists() {
        let selector =
            Selector::parse(".reveal-up, .reveal-left,.reveal-right , .fade-in-up").expect("parse");
        assert_eq!(selector.alternatives().len(), 4);
    }

    #[test]
    fn parses_descendant_compound_with_attributes() {
        let selector =
            Selector::parse(".tabs-container .tab-btn.active[data-tab]").expect("parse");
        let complex = &selector.alternatives()[0];
        assert_eq!(complex.compounds.len(), 2);
        assert_eq!(complex.compounds[1].classes.len(), 2);
        assert_eq!(
            complex.compounds[1].attributes[0].matcher,
            AttributeMatch::Exists
        );
    }

    #[test]
    fn parses_quoted_prefix_match() {
        let selector = Selector::parse(r##"a[href^="#"]"##).expect("parse");
        let compound = &selector.alternatives()[0].compounds[0];
        assert_eq!(compound.tag.as_deref(), Some("a"));
        assert_eq!(
            compound.attributes[0].matcher,
            AttributeMatch::Prefix("#".to_owned())
        );
    }

    #[test]
    fn rejects_bare_hash_and_unsupported_syntax() {
        assert!(Selector::parse("#").is_err());
        assert!(Selector::parse("#1abc").is_err());
        assert!(Selector::parse("ul > li").is_err());
        assert!(Selector::parse("a:hover").is_err());
        assert!(Selector::parse("").is_err());
        assert!(Selector::parse(".a,").is_err());
    }
}
