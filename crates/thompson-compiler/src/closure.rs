//! Epsilon closures over an NFA.
//!
//! The NFA graph has cycles (repetition back-edges), so every traversal
//! carries an explicit visited set and an explicit work stack.

use std::collections::BTreeSet;

use thompson_automata::{Label, Nfa, StateId, StateSet};

/// States reachable from a seed set through epsilon edges only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Closure {
    /// Discovery order (depth-first, seeds first).
    order: Vec<StateId>,
    set: StateSet,
}

impl Closure {
    /// States in discovery order.
    pub fn states(&self) -> &[StateId] {
        &self.order
    }

    pub fn set(&self) -> &StateSet {
        &self.set
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.set.contains(id)
    }

    /// Sorted state ids; equal for equal sets regardless of discovery order.
    pub fn signature(&self) -> Vec<StateId> {
        self.set.to_vec()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Bytes labelling an edge out of any member state.
    pub fn symbols(&self, nfa: &Nfa) -> BTreeSet<u8> {
        self.order
            .iter()
            .flat_map(|&id| nfa.state(id).symbols())
            .collect()
    }
}

/// Compute the epsilon closure of `seeds`.
///
/// Each state is visited at most once, so this terminates on cyclic graphs.
/// Closing an already closed set returns the same set.
pub fn epsilon_closure(nfa: &Nfa, seeds: impl IntoIterator<Item = StateId>) -> Closure {
    let mut set = StateSet::with_capacity(nfa.len());
    let mut order = Vec::new();
    let mut stack = Vec::new();

    for seed in seeds {
        stack.push(seed);
        while let Some(id) = stack.pop() {
            if !set.insert(id) {
                continue;
            }
            order.push(id);

            // Reversed so the first listed target is explored first.
            let targets = nfa.state(id).epsilon_targets();
            stack.extend(targets.iter().rev().filter(|&&t| !set.contains(t)));
        }
    }

    Closure { order, set }
}

/// States reached from `from` by consuming `byte`, before closing.
///
/// Targets appear once each, in the order they are first reached.
pub fn step(nfa: &Nfa, from: &Closure, byte: u8) -> Vec<StateId> {
    let mut seen = StateSet::with_capacity(nfa.len());
    let mut reached = Vec::new();

    for &id in from.states() {
        for &target in nfa.state(id).targets(Label::Byte(byte)) {
            if seen.insert(target) {
                reached.push(target);
            }
        }
    }

    reached
}
