//! Subset construction.
//!
//! Converts an NFA into a DFA whose states are epsilon-closed sets of NFA
//! states.
//!
//! # Algorithm
//!
//! 1. Close `{start}`; that set becomes DFA state 0 and is queued
//! 2. Pop the oldest pending state
//! 3. For every byte labelling an edge out of its members, step and close
//! 4. Look the resulting set up by signature; create and queue it if new
//! 5. Record the edge, whether the target was new or not
//!
//! Each signature is expanded once, and there are at most `2^n` of them for
//! an NFA with `n` states, so the worklist drains.

use std::collections::VecDeque;

use indexmap::IndexSet;
use thompson_automata::{Dfa, Nfa, StateId};

use crate::closure::{Closure, epsilon_closure, step};
use crate::{Error, Limits, Result};

/// Statistics from subset construction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubsetStats {
    /// DFA states created, including the start state.
    pub states_created: usize,
    /// DFA edges recorded.
    pub transitions: usize,
    /// Edges whose target had already been discovered.
    pub reused_targets: usize,
    /// Epsilon closures computed.
    pub closures_computed: usize,
}

/// Determinize `nfa`.
///
/// NFA states the start cannot reach never appear in any DFA core.
pub fn subset_construction(nfa: &Nfa, limits: &Limits) -> Result<(Dfa, SubsetStats)> {
    let mut stats = SubsetStats::default();

    // Signatures in discovery order; the index of a signature is its DFA id.
    let mut visited: IndexSet<Vec<StateId>> = IndexSet::new();
    let mut worklist: VecDeque<(StateId, Closure)> = VecDeque::new();

    ensure_room(0, limits)?;
    let initial = epsilon_closure(nfa, [nfa.start()]);
    stats.closures_computed += 1;

    let mut dfa = Dfa::new(initial.signature(), initial.contains(nfa.accept()));
    visited.insert(initial.signature());
    worklist.push_back((dfa.start(), initial));
    stats.states_created += 1;

    while let Some((current, closure)) = worklist.pop_front() {
        for byte in closure.symbols(nfa) {
            let reached = step(nfa, &closure, byte);
            if reached.is_empty() {
                continue;
            }

            let target_closure = epsilon_closure(nfa, reached);
            stats.closures_computed += 1;
            let signature = target_closure.signature();

            let target = match visited.get_index_of(&signature) {
                Some(index) => {
                    stats.reused_targets += 1;
                    index as StateId
                }
                None => {
                    ensure_room(dfa.len(), limits)?;
                    let is_final = target_closure.contains(nfa.accept());
                    let id = dfa.add_state(signature.clone(), is_final);
                    let (index, _) = visited.insert_full(signature);
                    debug_assert_eq!(index, id as usize);

                    worklist.push_back((id, target_closure));
                    stats.states_created += 1;
                    id
                }
            };

            let replaced = dfa.add_transition(current, byte, target);
            debug_assert!(replaced.is_none(), "D{current} expanded twice on {byte}");
            stats.transitions += 1;
        }
    }

    Ok((dfa, stats))
}

fn ensure_room(states: usize, limits: &Limits) -> Result<()> {
    if states >= limits.state_limit as usize {
        return Err(Error::StateLimitExceeded(limits.state_limit));
    }
    Ok(())
}
