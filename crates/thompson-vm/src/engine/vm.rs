//! DFA matching loop.

use std::fmt;

use thompson_automata::{Dfa, Label, StateId};

use super::trace::{NoopTracer, Tracer};

/// Why an input was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// `state` has no edge for the byte at `offset`.
    NoTransition {
        offset: usize,
        byte: u8,
        state: StateId,
    },
    /// Input was consumed but ended in a non-accepting state.
    NotFinal { state: StateId },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NoTransition {
                offset,
                byte,
                state,
            } => write!(
                f,
                "no transition from D{state} on {} at offset {offset}",
                Label::Byte(*byte)
            ),
            Rejection::NotFinal { state } => write!(f, "input ended in non-accepting D{state}"),
        }
    }
}

/// Result of running the matcher over a whole input.
///
/// Rejection is an ordinary outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted { state: StateId },
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted { .. })
    }

    /// State the matcher stopped in.
    pub fn state(&self) -> StateId {
        match *self {
            Outcome::Accepted { state }
            | Outcome::Rejected(Rejection::NoTransition { state, .. })
            | Outcome::Rejected(Rejection::NotFinal { state }) => state,
        }
    }
}

/// Runs a DFA over byte strings.
///
/// The DFA is borrowed, so one compiled automaton can back any number of
/// matchers.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'d> {
    dfa: &'d Dfa,
}

impl<'d> Matcher<'d> {
    pub fn new(dfa: &'d Dfa) -> Self {
        Self { dfa }
    }

    pub fn dfa(&self) -> &'d Dfa {
        self.dfa
    }

    /// Match the whole input.
    ///
    /// This is a convenience method that uses `NoopTracer`, which gets
    /// completely optimized away at compile time.
    pub fn run(&self, input: &[u8]) -> Outcome {
        self.run_with(input, &mut NoopTracer)
    }

    /// Match the whole input, reporting every step to `tracer`.
    pub fn run_with<T: Tracer>(&self, input: &[u8], tracer: &mut T) -> Outcome {
        let mut state = self.dfa.start();
        tracer.trace_start(state);

        for (offset, &byte) in input.iter().enumerate() {
            let Some(next) = self.dfa.transition(state, byte) else {
                tracer.trace_stuck(offset, byte, state);
                return Outcome::Rejected(Rejection::NoTransition {
                    offset,
                    byte,
                    state,
                });
            };
            tracer.trace_step(offset, byte, state, next);
            state = next;
        }

        let accepted = self.dfa.is_final(state);
        tracer.trace_finish(state, accepted);
        if accepted {
            Outcome::Accepted { state }
        } else {
            Outcome::Rejected(Rejection::NotFinal { state })
        }
    }

    pub fn matches(&self, input: &[u8]) -> bool {
        self.run(input).is_accepted()
    }

    /// Length of the longest accepted prefix of `input`.
    ///
    /// `Some(0)` means only the empty prefix is accepted; `None` means no
    /// prefix is.
    pub fn longest_prefix(&self, input: &[u8]) -> Option<usize> {
        let mut state = self.dfa.start();
        let mut longest = self.dfa.is_final(state).then_some(0);

        for (offset, &byte) in input.iter().enumerate() {
            let Some(next) = self.dfa.transition(state, byte) else {
                break;
            };
            state = next;
            if self.dfa.is_final(state) {
                longest = Some(offset + 1);
            }
        }

        longest
    }
}
