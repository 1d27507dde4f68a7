//! Tracing infrastructure for debugging DFA runs.
//!
//! # Design: Zero-Cost Abstraction
//!
//! When `NoopTracer` is used every trait method is an `#[inline(always)]`
//! empty function, so the compiler removes the calls and their arguments.
//! `PrintTracer` formats each event into a line for inspection and tests.

use thompson_automata::{Dfa, Label, StateId};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Start, one line per consumed byte, and the verdict.
    #[default]
    Default,
    /// Also show the NFA core and finality of every state entered.
    Verbose,
}

/// Tracer trait for matcher instrumentation.
///
/// Methods receive raw ids and bytes; formatting happens in the tracer.
pub trait Tracer {
    /// Called once before the first byte, with the start state.
    fn trace_start(&mut self, state: StateId);

    /// Called after `byte` at `offset` moved the matcher from `from` to `to`.
    fn trace_step(&mut self, offset: usize, byte: u8, from: StateId, to: StateId);

    /// Called when `state` has no edge for `byte`; the run ends here.
    fn trace_stuck(&mut self, offset: usize, byte: u8, state: StateId);

    /// Called after the whole input was consumed.
    fn trace_finish(&mut self, state: StateId, accepted: bool);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_start(&mut self, _state: StateId) {}

    #[inline(always)]
    fn trace_step(&mut self, _offset: usize, _byte: u8, _from: StateId, _to: StateId) {}

    #[inline(always)]
    fn trace_stuck(&mut self, _offset: usize, _byte: u8, _state: StateId) {}

    #[inline(always)]
    fn trace_finish(&mut self, _state: StateId, _accepted: bool) {}
}

/// Tracer that collects one line per event.
pub struct PrintTracer<'d> {
    dfa: &'d Dfa,
    verbosity: Verbosity,
    lines: Vec<String>,
}

impl<'d> PrintTracer<'d> {
    pub fn new(dfa: &'d Dfa, verbosity: Verbosity) -> Self {
        Self {
            dfa,
            verbosity,
            lines: Vec::new(),
        }
    }

    /// Collected lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines, newline-terminated.
    pub fn dump(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    fn describe(&self, state: StateId) -> String {
        if self.verbosity == Verbosity::Default {
            return format!("D{state}");
        }

        let core: Vec<String> = self
            .dfa
            .core(state)
            .iter()
            .map(|id| id.to_string())
            .collect();
        let mut out = format!("D{state} {{{}}}", core.join(", "));
        if self.dfa.is_final(state) {
            out.push_str(" (accept)");
        }
        out
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_start(&mut self, state: StateId) {
        let line = format!("start {}", self.describe(state));
        self.lines.push(line);
    }

    fn trace_step(&mut self, offset: usize, byte: u8, from: StateId, to: StateId) {
        let line = format!(
            "  {offset} {} D{from} → {}",
            Label::Byte(byte),
            self.describe(to)
        );
        self.lines.push(line);
    }

    fn trace_stuck(&mut self, offset: usize, byte: u8, state: StateId) {
        self.lines
            .push(format!("  {offset} {} D{state} ✗", Label::Byte(byte)));
        self.lines.push("reject".to_owned());
    }

    fn trace_finish(&mut self, state: StateId, accepted: bool) {
        let verdict = if accepted { "accept" } else { "reject" };
        self.lines.push(format!("{verdict} D{state}"));
    }
}
