//! Regular expression compiler: AST to NFA to DFA.
//!
//! This crate provides the compilation pipeline:
//! - `thompson` - Thompson construction of an NFA from an `Ast`
//! - `closure` - epsilon closures over the NFA graph
//! - `subset` - subset construction of a DFA from the NFA
//! - `compiler` - the `Compiler` facade tying the stages together

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod closure;
pub mod compiler;
pub mod limits;
pub mod subset;
pub mod thompson;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod closure_tests;

pub use closure::{Closure, epsilon_closure};
pub use compiler::{Compiled, Compiler, CompilerBuilder};
pub use limits::Limits;
pub use subset::{SubsetStats, subset_construction};

use thompson_core::ConstructionError;

/// Errors that can occur during compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The AST handed in by the parser is malformed.
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// Parser output could not be decoded.
    #[error("invalid AST input: {0}")]
    InvalidInput(String),

    /// AST nested deeper than `Limits::recursion_limit`.
    #[error("recursion limit of {0} exceeded")]
    RecursionLimitExceeded(u32),

    /// Determinization needed more DFA states than `Limits::state_limit`.
    #[error("DFA state limit of {0} exceeded")]
    StateLimitExceeded(u32),
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;
