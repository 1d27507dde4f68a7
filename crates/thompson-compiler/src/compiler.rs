//! Compiler facade and entry points.

use thompson_automata::{Dfa, Nfa};
use thompson_core::{Ast, RawNode, parse_ast};

use crate::subset::{SubsetStats, subset_construction};
use crate::{Error, Limits, Result, thompson};

/// Output of a full compilation.
#[derive(Debug, Clone)]
pub struct Compiled {
    pub nfa: Nfa,
    pub dfa: Dfa,
    pub stats: SubsetStats,
}

/// Runs the AST → NFA → DFA pipeline under a set of limits.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    limits: Limits,
}

/// Builder for `Compiler`.
#[derive(Debug, Clone, Default)]
pub struct CompilerBuilder {
    limits: Limits,
}

impl CompilerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the recursion limit.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.limits = self.limits.recursion_limit(limit);
        self
    }

    /// Set the DFA state limit.
    pub fn state_limit(mut self, limit: u32) -> Self {
        self.limits = self.limits.state_limit(limit);
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            limits: self.limits,
        }
    }
}

impl Compiler {
    /// Compiler with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Thompson construction only.
    pub fn thompson(&self, ast: &Ast) -> Result<Nfa> {
        thompson::build(ast, &self.limits)
    }

    /// Subset construction only.
    pub fn determinize(&self, nfa: &Nfa) -> Result<(Dfa, SubsetStats)> {
        subset_construction(nfa, &self.limits)
    }

    /// Compile a typed AST.
    pub fn compile(&self, ast: &Ast) -> Result<Compiled> {
        let nfa = self.thompson(ast)?;
        let (dfa, stats) = self.determinize(&nfa)?;
        Ok(Compiled { nfa, dfa, stats })
    }

    /// Validate raw parser output, then compile it.
    pub fn compile_raw(&self, raw: &RawNode) -> Result<Compiled> {
        let ast = raw.lower_with_limit(self.limits.recursion_limit)?;
        self.compile(&ast)
    }

    /// Decode parser JSON, then compile it.
    pub fn compile_json(&self, json: &str) -> Result<Compiled> {
        let raw = parse_ast(json).map_err(|e| Error::InvalidInput(e.to_string()))?;
        self.compile_raw(&raw)
    }
}
