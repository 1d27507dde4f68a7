//! Deserialization layer for ASTs produced by an external parser.
//!
//! Mirrors the parser's JSON output one-to-one. Nothing here is validated
//! until [`RawNode::lower`] converts it into a typed [`Ast`].

use std::fmt;

use serde::Deserialize;

use crate::{Ast, AstKind, ConstructionError, DEFAULT_RECURSION_LIMIT};

/// Raw AST node as emitted by the parser.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct RawNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RawNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<RawSymbol>,
}

/// Literal payload as written by the parser: a number or a string.
///
/// Decoding accepts any integer or string so that a symbol which does not
/// name a single byte is reported by [`RawNode::lower`], not by the JSON
/// decoder.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum RawSymbol {
    Number(i64),
    Text(String),
}

impl RawSymbol {
    fn to_byte(&self) -> Result<u8, ConstructionError> {
        let byte = match self {
            RawSymbol::Number(n) => u8::try_from(*n).ok(),
            RawSymbol::Text(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => u8::try_from(c).ok(),
                    _ => None,
                }
            }
        };
        byte.ok_or_else(|| ConstructionError::SymbolOutOfRange {
            symbol: self.clone(),
        })
    }
}

impl From<u8> for RawSymbol {
    fn from(b: u8) -> Self {
        RawSymbol::Number(i64::from(b))
    }
}

impl From<char> for RawSymbol {
    fn from(c: char) -> Self {
        RawSymbol::Text(c.to_string())
    }
}

impl fmt::Display for RawSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawSymbol::Number(n) => write!(f, "{n}"),
            RawSymbol::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// Parse parser output JSON into raw nodes.
///
/// serde_json's nesting cap is lifted and the stack grows on demand, so
/// depth is bounded only by the recursion limit applied when lowering.
pub fn parse_ast(json: &str) -> Result<RawNode, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(json);
    de.disable_recursion_limit();
    let node = RawNode::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(node)
}

impl RawNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            children: Vec::new(),
            symbol: None,
        }
    }

    pub fn with_child(mut self, child: RawNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<RawSymbol>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Validate and convert into a typed AST using the default nesting limit.
    pub fn lower(&self) -> Result<Ast, ConstructionError> {
        self.lower_with_limit(DEFAULT_RECURSION_LIMIT)
    }

    /// Validate and convert into a typed AST.
    ///
    /// Nodes nested `limit` levels deep or more are rejected.
    pub fn lower_with_limit(&self, limit: u32) -> Result<Ast, ConstructionError> {
        self.lower_at(0, limit)
    }

    fn lower_at(&self, depth: u32, limit: u32) -> Result<Ast, ConstructionError> {
        if depth >= limit {
            return Err(ConstructionError::RecursionLimitExceeded { limit });
        }

        let kind = AstKind::from_name(&self.kind).ok_or_else(|| ConstructionError::UnknownKind {
            kind: self.kind.clone(),
        })?;

        if self.children.len() != kind.arity() {
            return Err(ConstructionError::ChildCount {
                kind,
                expected: kind.arity(),
                found: self.children.len(),
            });
        }

        if kind != AstKind::Literal && self.symbol.is_some() {
            return Err(ConstructionError::UnexpectedSymbol { kind });
        }

        let child = |i: usize| self.children[i].lower_at(depth + 1, limit);

        Ok(match kind {
            AstKind::Literal => {
                let symbol = self.symbol.as_ref().ok_or(ConstructionError::MissingSymbol)?;
                Ast::literal(symbol.to_byte()?)
            }
            AstKind::Concatenation => Ast::concat(child(0)?, child(1)?),
            AstKind::Alternation => Ast::alt(child(0)?, child(1)?),
            AstKind::KleeneStar => Ast::star(child(0)?),
        })
    }
}

impl From<&Ast> for RawNode {
    fn from(ast: &Ast) -> Self {
        let node = RawNode::new(ast.kind().name());
        match ast {
            Ast::Literal(b) => node.with_symbol(*b),
            _ => ast
                .children()
                .fold(node, |node, child| node.with_child(RawNode::from(child))),
        }
    }
}

impl Drop for RawNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}
