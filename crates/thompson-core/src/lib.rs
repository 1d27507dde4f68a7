#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for regular expression ASTs.
//!
//! Two layers:
//! - **Input layer** (`RawNode`): 1:1 mapping to the JSON an external parser emits
//! - **Typed layer** (`Ast`): validated tree consumed by the compiler
//!
//! Lowering from the input layer to the typed layer is the only place where
//! an unknown node kind or a wrong child count can surface; it reports them
//! as [`ConstructionError`].

mod ast;
mod raw;

#[cfg(test)]
mod raw_tests;

pub use ast::{Ast, AstKind};
pub use raw::{RawNode, RawSymbol, parse_ast};

/// Default maximum AST nesting accepted by lowering and compilation.
pub const DEFAULT_RECURSION_LIMIT: u32 = 1024;

/// Errors raised while turning parser output into a typed AST.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    /// The node's `type` tag names no known AST kind.
    #[error("unknown AST node kind `{kind}`")]
    UnknownKind { kind: String },

    /// The node has the wrong number of children for its kind.
    #[error("{kind} node expects {expected} children, found {found}")]
    ChildCount {
        kind: AstKind,
        expected: usize,
        found: usize,
    },

    /// A literal node without a symbol.
    #[error("literal node has no symbol")]
    MissingSymbol,

    /// A non-literal node carrying a symbol.
    #[error("{kind} node must not carry a symbol")]
    UnexpectedSymbol { kind: AstKind },

    /// A symbol that does not name exactly one byte.
    #[error("symbol {symbol} does not fit in a single byte")]
    SymbolOutOfRange { symbol: RawSymbol },

    /// Input nested deeper than the configured limit.
    #[error("AST nesting exceeds recursion limit of {limit}")]
    RecursionLimitExceeded { limit: u32 },
}
