//! Matching loop over determinized automata.
//!
//! This crate walks a `Dfa` produced by `thompson-compiler` over a byte
//! string, one transition per byte, and reports whether the string is in the
//! language.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

pub use engine::{Matcher, NoopTracer, Outcome, PrintTracer, Rejection, Tracer, Verbosity};
