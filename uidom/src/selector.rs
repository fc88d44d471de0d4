//! A small CSS selector engine.
//!
//! Supported syntax: type selectors (`input`, `*`), `#id`, `.class`,
//! `[attr]`, `[attr=value]`, `[attr="value"]`, the pseudo-classes
//! `:checked`, `:disabled`, `:enabled` and `:selected`, the descendant
//! (whitespace) and child (`>`) combinators, and comma-separated lists.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::document::{Document, NodeId};

/// Error produced when a selector string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unexpected {found:?} at position {position} in selector {input:?}")]
    Unexpected {
        input: String,
        position: usize,
        found: char,
    },
    #[error("unexpected end of selector {input:?}")]
    UnexpectedEnd { input: String },
    #[error("unsupported pseudo-class :{name} in selector {input:?}")]
    UnknownPseudo { input: String, name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pseudo {
    Checked,
    Disabled,
    Enabled,
    Selected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Simple {
    Id(String),
    Class(String),
    Attr { name: String, value: Option<String> },
    Pseudo(Pseudo),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    simple: Vec<Simple>,
}

/// One complex selector: compounds joined by combinators, left to right.
/// The combinator stored with the first compound is unused.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    parts: Vec<(Combinator, Compound)>,
}

/// A parsed, comma-separated selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    source: String,
    selectors: Vec<Complex>,
}

impl SelectorList {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        if input.trim().is_empty() {
            return Err(SelectorError::Empty);
        }
        let selectors = Parser::new(input).parse_list()?;
        Ok(Self {
            source: input.trim().to_string(),
            selectors,
        })
    }

    /// The selector text as written.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether `node` matches any selector in the list.
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        if !doc.is_element(node) {
            return false;
        }
        self.selectors
            .iter()
            .any(|complex| match_at(doc, node, &complex.parts, complex.parts.len() - 1))
    }
}

impl FromStr for SelectorList {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

// -------------------------------------------------------------------------
// Matching (right to left)
// -------------------------------------------------------------------------

fn match_at(doc: &Document, node: NodeId, parts: &[(Combinator, Compound)], idx: usize) -> bool {
    let (_, compound) = &parts[idx];
    if !match_compound(doc, node, compound) {
        return false;
    }
    if idx == 0 {
        return true;
    }

    match parts[idx].0 {
        Combinator::Child => doc
            .parent(node)
            .filter(|p| doc.is_element(*p))
            .is_some_and(|p| match_at(doc, p, parts, idx - 1)),
        Combinator::Descendant => {
            let mut current = doc.parent(node);
            while let Some(ancestor) = current {
                if !doc.is_element(ancestor) {
                    return false;
                }
                if match_at(doc, ancestor, parts, idx - 1) {
                    return true;
                }
                current = doc.parent(ancestor);
            }
            false
        }
    }
}

fn match_compound(doc: &Document, node: NodeId, compound: &Compound) -> bool {
    if let Some(tag) = &compound.tag {
        if doc.tag(node) != tag {
            return false;
        }
    }
    compound.simple.iter().all(|simple| match simple {
        Simple::Id(id) => doc.id(node) == Some(id.as_str()),
        Simple::Class(class) => doc.has_class(node, class),
        Simple::Attr { name, value: None } => doc.has_attr(node, name),
        Simple::Attr {
            name,
            value: Some(expected),
        } => doc.attr(node, name) == Some(expected.as_str()),
        Simple::Pseudo(Pseudo::Checked) => doc.is_checked(node) || doc.is_selected(node),
        Simple::Pseudo(Pseudo::Selected) => doc.is_selected(node),
        Simple::Pseudo(Pseudo::Disabled) => doc.is_form_control(node) && doc.is_disabled(node),
        Simple::Pseudo(Pseudo::Enabled) => doc.is_form_control(node) && !doc.is_disabled(node),
    })
}

// -------------------------------------------------------------------------
// Parsing
// -------------------------------------------------------------------------

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

struct Parser<'a> {
    input: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Skip whitespace. Returns true if any was skipped.
    fn skip_ws(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn error_here(&self) -> SelectorError {
        match self.peek() {
            Some(found) => SelectorError::Unexpected {
                input: self.input.to_string(),
                position: self.pos,
                found,
            },
            None => SelectorError::UnexpectedEnd {
                input: self.input.to_string(),
            },
        }
    }

    fn expect(&mut self, c: char) -> Result<(), SelectorError> {
        if self.peek() == Some(c) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error_here())
        }
    }

    fn parse_list(&mut self) -> Result<Vec<Complex>, SelectorError> {
        let mut list = Vec::new();
        loop {
            self.skip_ws();
            list.push(self.parse_complex()?);
            self.skip_ws();
            match self.peek() {
                None => break,
                Some(',') => self.pos += 1,
                Some(_) => return Err(self.error_here()),
            }
        }
        Ok(list)
    }

    fn parse_complex(&mut self) -> Result<Complex, SelectorError> {
        let mut parts = vec![(Combinator::Descendant, self.parse_compound()?)];
        loop {
            let had_ws = self.skip_ws();
            match self.peek() {
                None | Some(',') => break,
                Some('>') => {
                    self.pos += 1;
                    self.skip_ws();
                    parts.push((Combinator::Child, self.parse_compound()?));
                }
                Some(_) if had_ws => parts.push((Combinator::Descendant, self.parse_compound()?)),
                Some(_) => return Err(self.error_here()),
            }
        }
        Ok(Complex { parts })
    }

    fn parse_compound(&mut self) -> Result<Compound, SelectorError> {
        let mut compound = Compound::default();
        let mut universal = false;

        match self.peek() {
            Some('*') => {
                self.pos += 1;
                universal = true;
            }
            Some(c) if is_ident_char(c) => {
                compound.tag = Some(self.ident()?.to_ascii_lowercase());
            }
            _ => {}
        }

        loop {
            match self.peek() {
                Some('#') => {
                    self.pos += 1;
                    compound.simple.push(Simple::Id(self.ident()?));
                }
                Some('.') => {
                    self.pos += 1;
                    compound.simple.push(Simple::Class(self.ident()?));
                }
                Some('[') => {
                    self.pos += 1;
                    compound.simple.push(self.attribute()?);
                }
                Some(':') => {
                    self.pos += 1;
                    compound.simple.push(self.pseudo()?);
                }
                _ => break,
            }
        }

        if compound.tag.is_none() && compound.simple.is_empty() && !universal {
            return Err(self.error_here());
        }
        Ok(compound)
    }

    fn ident(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.error_here());
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    fn attribute(&mut self) -> Result<Simple, SelectorError> {
        self.skip_ws();
        let name = self.ident()?.to_ascii_lowercase();
        self.skip_ws();
        let value = match self.peek() {
            Some('=') => {
                self.pos += 1;
                self.skip_ws();
                let value = match self.peek() {
                    Some(quote @ ('"' | '\'')) => {
                        self.pos += 1;
                        let start = self.pos;
                        while self.peek().is_some_and(|c| c != quote) {
                            self.pos += 1;
                        }
                        let value: String = self.chars[start..self.pos].iter().collect();
                        self.expect(quote)?;
                        value
                    }
                    _ => self.ident()?,
                };
                self.skip_ws();
                Some(value)
            }
            _ => None,
        };
        self.expect(']')?;
        Ok(Simple::Attr { name, value })
    }

    fn pseudo(&mut self) -> Result<Simple, SelectorError> {
        let name = self.ident()?;
        let pseudo = match name.to_ascii_lowercase().as_str() {
            "checked" => Pseudo::Checked,
            "disabled" => Pseudo::Disabled,
            "enabled" => Pseudo::Enabled,
            "selected" => Pseudo::Selected,
            _ => {
                return Err(SelectorError::UnknownPseudo {
                    input: self.input.to_string(),
                    name,
                })
            }
        };
        Ok(Simple::Pseudo(pseudo))
    }
}
