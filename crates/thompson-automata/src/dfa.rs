//! Deterministic automata produced by subset construction.

use std::collections::{BTreeMap, BTreeSet};

use crate::StateId;

/// A DFA state: a canonical set of NFA states plus its outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfaState {
    /// Sorted NFA state ids this state stands for.
    core: Vec<StateId>,
    transitions: BTreeMap<u8, StateId>,
    is_final: bool,
}

impl DfaState {
    pub fn core(&self) -> &[StateId] {
        &self.core
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn transition(&self, byte: u8) -> Option<StateId> {
        self.transitions.get(&byte).copied()
    }

    /// Outgoing edges in byte order.
    pub fn transitions(&self) -> impl Iterator<Item = (u8, StateId)> + '_ {
        self.transitions.iter().map(|(&b, &to)| (b, to))
    }
}

/// A deterministic finite automaton.
///
/// State `start()` always exists. Each state has at most one edge per byte;
/// a missing edge means the input is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    states: Vec<DfaState>,
    start: StateId,
}

impl Dfa {
    /// Create a DFA holding only its start state.
    ///
    /// `core` is sorted and de-duplicated before it is stored.
    pub fn new(core: Vec<StateId>, is_final: bool) -> Self {
        let mut dfa = Self {
            states: Vec::new(),
            start: 0,
        };
        dfa.start = dfa.add_state(core, is_final);
        dfa
    }

    /// Add a state, returning its id.
    ///
    /// Callers keep cores unique; `find_core` is a linear scan.
    pub fn add_state(&mut self, mut core: Vec<StateId>, is_final: bool) -> StateId {
        core.sort_unstable();
        core.dedup();

        let id = self.states.len() as StateId;
        self.states.push(DfaState {
            core,
            transitions: BTreeMap::new(),
            is_final,
        });
        id
    }

    /// Set the edge `from ─byte→ to`, returning the target it replaced.
    pub fn add_transition(&mut self, from: StateId, byte: u8, to: StateId) -> Option<StateId> {
        self.states[from as usize].transitions.insert(byte, to)
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    /// Get state by id.
    ///
    /// # Panics
    /// Panics if `id` is not a state of this DFA.
    pub fn state(&self, id: StateId) -> &DfaState {
        &self.states[id as usize]
    }

    pub fn transition(&self, from: StateId, byte: u8) -> Option<StateId> {
        self.state(from).transition(byte)
    }

    pub fn is_final(&self, id: StateId) -> bool {
        self.state(id).is_final
    }

    pub fn core(&self, id: StateId) -> &[StateId] {
        &self.state(id).core
    }

    /// Id of the state whose core equals `core` (sorted).
    pub fn find_core(&self, core: &[StateId]) -> Option<StateId> {
        self.states
            .iter()
            .position(|s| s.core == core)
            .map(|i| i as StateId)
    }

    /// All states with their ids, in discovery order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &DfaState)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (i as StateId, s))
    }

    pub fn final_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states()
            .filter(|(_, s)| s.is_final)
            .map(|(id, _)| id)
    }

    /// Every byte with at least one edge.
    pub fn alphabet(&self) -> BTreeSet<u8> {
        self.states
            .iter()
            .flat_map(|s| s.transitions.keys().copied())
            .collect()
    }

    pub fn transition_count(&self) -> usize {
        self.states.iter().map(|s| s.transitions.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: the start state exists from construction.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
