//! Nondeterministic automata and the fragment arena that builds them.
//!
//! States live in a flat vector indexed by `StateId`. Edges refer to targets
//! by id, so several predecessors can share a target and back-edges from
//! repetition are ordinary entries rather than owning references.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::{Label, StateId, StateSet};

/// A node of the NFA graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NfaState {
    id: StateId,
    /// Targets per label, in insertion order without duplicates.
    transitions: BTreeMap<Label, Vec<StateId>>,
    is_final: bool,
}

impl NfaState {
    fn new(id: StateId) -> Self {
        Self {
            id,
            transitions: BTreeMap::new(),
            is_final: false,
        }
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Targets reached on `label`; empty if there is no such edge.
    pub fn targets(&self, label: Label) -> &[StateId] {
        self.transitions
            .get(&label)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn epsilon_targets(&self) -> &[StateId] {
        self.targets(Label::Epsilon)
    }

    /// Outgoing edges grouped by label, epsilon first.
    pub fn transitions(&self) -> impl Iterator<Item = (Label, &[StateId])> {
        self.transitions
            .iter()
            .map(|(label, targets)| (*label, targets.as_slice()))
    }

    /// Bytes this state has an outgoing edge for.
    pub fn symbols(&self) -> impl Iterator<Item = u8> + '_ {
        self.transitions.keys().filter_map(|label| label.byte())
    }

    pub fn has_edges(&self) -> bool {
        !self.transitions.is_empty()
    }
}

/// A complete NFA with a single entry and a single accept state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<NfaState>,
    start: StateId,
    accept: StateId,
}

impl Nfa {
    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    /// Get state by id.
    ///
    /// # Panics
    /// Panics if `id` was not allocated for this automaton.
    pub fn state(&self, id: StateId) -> &NfaState {
        &self.states[id as usize]
    }

    /// All allocated states in id order.
    pub fn states(&self) -> impl Iterator<Item = &NfaState> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: a finished NFA has at least its start state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Every byte used as a transition label.
    pub fn alphabet(&self) -> BTreeSet<u8> {
        self.states.iter().flat_map(NfaState::symbols).collect()
    }

    /// All `(source, label, target)` edges in id order.
    pub fn edges(&self) -> impl Iterator<Item = (StateId, Label, StateId)> + '_ {
        self.states.iter().flat_map(|state| {
            state.transitions().flat_map(move |(label, targets)| {
                targets.iter().map(move |&target| (state.id, label, target))
            })
        })
    }

    /// States reachable from the start over any edge, in BFS order.
    pub fn reachable(&self) -> Vec<StateId> {
        let mut seen = StateSet::with_capacity(self.states.len());
        let mut order = Vec::new();
        let mut queue = VecDeque::from([self.start]);

        while let Some(id) = queue.pop_front() {
            if !seen.insert(id) {
                continue;
            }
            order.push(id);
            for (_, targets) in self.state(id).transitions() {
                queue.extend(targets.iter().filter(|&&t| !seen.contains(t)));
            }
        }

        order
    }
}

/// Sub-automaton with a single entry and a single exit.
///
/// The exit has no outgoing edges until a combinator wires it to a sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub entry: StateId,
    pub exit: StateId,
}

impl Fragment {
    pub fn new(entry: StateId, exit: StateId) -> Self {
        Self { entry, exit }
    }
}

/// Arena and id allocator for NFA construction.
///
/// Every state of the finished NFA is allocated here, and ids are handed out
/// in strictly increasing order.
#[derive(Debug, Default)]
pub struct NfaBuilder {
    states: Vec<NfaState>,
}

impl NfaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh state, returning its id.
    pub fn add_state(&mut self) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(NfaState::new(id));
        id
    }

    /// Add an edge; repeated edges are ignored.
    pub fn connect(&mut self, from: StateId, label: Label, to: StateId) {
        let targets = self.states[from as usize]
            .transitions
            .entry(label)
            .or_default();
        if !targets.contains(&to) {
            targets.push(to);
        }
    }

    pub fn connect_epsilon(&mut self, from: StateId, to: StateId) {
        self.connect(from, Label::Epsilon, to);
    }

    pub fn state(&self, id: StateId) -> &NfaState {
        &self.states[id as usize]
    }

    /// Number of states allocated so far.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Fragment Combinators
    // ─────────────────────────────────────────────────────────────────────

    /// Single byte: `entry ─b→ exit`
    pub fn literal(&mut self, byte: u8) -> Fragment {
        let entry = self.add_state();
        let exit = self.add_state();
        self.connect(entry, Label::Byte(byte), exit);
        Fragment::new(entry, exit)
    }

    /// Sequence: `left ─ε→ right`
    pub fn concatenation(&mut self, left: Fragment, right: Fragment) -> Fragment {
        self.connect_epsilon(left.exit, right.entry);
        Fragment::new(left.entry, right.exit)
    }

    /// Choice between two fragments.
    ///
    /// ```text
    ///        ┌─→ left ──┐
    /// entry ─┤          ├─→ exit
    ///        └─→ right ─┘
    /// ```
    pub fn alternation(&mut self, left: Fragment, right: Fragment) -> Fragment {
        let entry = self.add_state();
        let exit = self.add_state();

        self.connect_epsilon(entry, left.entry);
        self.connect_epsilon(entry, right.entry);
        self.connect_epsilon(left.exit, exit);
        self.connect_epsilon(right.exit, exit);

        Fragment::new(entry, exit)
    }

    /// Zero or more: inner*
    ///
    /// ```text
    ///          ┌──────────────┐
    ///          ↓              │
    /// entry ─→ inner ─────────┴─→ exit
    ///   │                          ↑
    ///   └──────────────────────────┘
    /// ```
    ///
    /// The loop returns from the inner exit to the entry, so the returned
    /// exit stays free of outgoing edges.
    pub fn kleene_star(&mut self, inner: Fragment) -> Fragment {
        let entry = self.add_state();
        let exit = self.add_state();

        self.connect_epsilon(entry, inner.entry);
        self.connect_epsilon(entry, exit);
        self.connect_epsilon(inner.exit, exit);
        self.connect_epsilon(inner.exit, entry);

        Fragment::new(entry, exit)
    }

    /// Seal the arena into an NFA whose accept state is `root.exit`.
    pub fn finish(mut self, root: Fragment) -> Nfa {
        self.states[root.exit as usize].is_final = true;
        Nfa {
            states: self.states,
            start: root.entry,
            accept: root.exit,
        }
    }
}
