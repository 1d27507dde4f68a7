#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Automata models shared by the compiler and the matcher.
//!
//! This crate contains:
//! - NFA states in an id-indexed arena, plus the `NfaBuilder` fragment combinators
//! - DFA states keyed by their canonical NFA-state core
//! - `StateSet`, the bitset used for closures and signatures
//! - Text dumps for snapshot tests

mod dfa;
mod dump;
mod label;
mod nfa;
mod state_set;

#[cfg(test)]
mod dfa_tests;

pub use dfa::{Dfa, DfaState};
pub use dump::{DfaPrinter, NfaPrinter};
pub use label::Label;
pub use nfa::{Fragment, Nfa, NfaBuilder, NfaState};
pub use state_set::StateSet;

/// Index of a state within its automaton.
///
/// NFA ids are handed out by `NfaBuilder` in allocation order; DFA ids in
/// discovery order. Ids are never reused within one automaton.
pub type StateId = u32;
