//! Runtime engine for matching input against a compiled DFA.

mod trace;
mod vm;


pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use vm::{Matcher, Outcome, Rejection};
