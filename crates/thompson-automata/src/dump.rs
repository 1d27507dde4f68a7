//! Dump helpers for automaton inspection and testing.
//!
//! Output is line-oriented and stable (states in id order, edges in label
//! order), which makes it suitable for snapshot tests.

use std::fmt::Write;

use crate::{Dfa, Nfa, StateId};

/// Printer for `Nfa`.
pub struct NfaPrinter<'a> {
    nfa: &'a Nfa,
    reachable_only: bool,
}

impl<'a> NfaPrinter<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            reachable_only: false,
        }
    }

    /// Skip states the start state cannot reach.
    pub fn reachable_only(mut self, yes: bool) -> Self {
        self.reachable_only = yes;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        writeln!(w, "start: S{}", self.nfa.start())?;
        writeln!(w, "accept: S{}", self.nfa.accept())?;
        writeln!(w)?;

        let mut ids: Vec<StateId> = if self.reachable_only {
            self.nfa.reachable()
        } else {
            self.nfa.states().map(|s| s.id()).collect()
        };
        ids.sort_unstable();

        for id in ids {
            let state = self.nfa.state(id);
            write!(w, "S{id}")?;
            if state.is_final() {
                write!(w, " (accept)")?;
            }
            write!(w, ":")?;

            if !state.has_edges() {
                writeln!(w, " ∅")?;
                continue;
            }

            let groups: Vec<String> = state
                .transitions()
                .map(|(label, targets)| format!("{label} → {}", join_ids("S", targets)))
                .collect();
            writeln!(w, " {}", groups.join("; "))?;
        }

        Ok(())
    }
}

/// Printer for `Dfa`.
pub struct DfaPrinter<'a> {
    dfa: &'a Dfa,
    show_core: bool,
}

impl<'a> DfaPrinter<'a> {
    pub fn new(dfa: &'a Dfa) -> Self {
        Self {
            dfa,
            show_core: true,
        }
    }

    /// Show the NFA state set behind each DFA state.
    pub fn show_core(mut self, yes: bool) -> Self {
        self.show_core = yes;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        writeln!(w, "start: D{}", self.dfa.start())?;
        writeln!(w)?;

        for (id, state) in self.dfa.states() {
            write!(w, "D{id}")?;
            if self.show_core {
                let core: Vec<String> = state.core().iter().map(|s| s.to_string()).collect();
                write!(w, " {{{}}}", core.join(", "))?;
            }
            if state.is_final() {
                write!(w, " (accept)")?;
            }
            write!(w, ":")?;

            let edges: Vec<String> = state
                .transitions()
                .map(|(b, to)| format!("{} → D{to}", crate::Label::Byte(b)))
                .collect();
            if edges.is_empty() {
                writeln!(w, " ∅")?;
            } else {
                writeln!(w, " {}", edges.join(", "))?;
            }
        }

        Ok(())
    }
}

fn join_ids(prefix: &str, ids: &[StateId]) -> String {
    ids.iter()
        .map(|id| format!("{prefix}{id}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Nfa {
    /// Create a printer for this NFA.
    pub fn printer(&self) -> NfaPrinter<'_> {
        NfaPrinter::new(self)
    }

    /// Dump every allocated state.
    pub fn dump(&self) -> String {
        self.printer().dump()
    }
}

impl Dfa {
    /// Create a printer for this DFA.
    pub fn printer(&self) -> DfaPrinter<'_> {
        DfaPrinter::new(self)
    }

    /// Dump with NFA cores shown.
    pub fn dump(&self) -> String {
        self.printer().dump()
    }
}
