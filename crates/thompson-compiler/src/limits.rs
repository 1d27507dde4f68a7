//! Resource limits for compilation.

use thompson_core::DEFAULT_RECURSION_LIMIT;

/// Bounds on AST depth and DFA size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum AST nesting (default: 1,024).
    pub(crate) recursion_limit: u32,
    /// Maximum DFA states (default: 65,536).
    pub(crate) state_limit: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            state_limit: 65_536,
        }
    }
}

impl Limits {
    /// Create new limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recursion limit.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Set the DFA state limit.
    pub fn state_limit(mut self, limit: u32) -> Self {
        self.state_limit = limit;
        self
    }

    pub fn get_recursion_limit(&self) -> u32 {
        self.recursion_limit
    }

    pub fn get_state_limit(&self) -> u32 {
        self.state_limit
    }
}
