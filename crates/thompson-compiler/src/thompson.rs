//! Thompson construction.
//!
//! Each AST node lowers to a `Fragment` with one entry and one exit; parents
//! wire their children's fragments together with epsilon edges. All states
//! come from one `NfaBuilder`, so ids are unique across the whole NFA.

use thompson_automata::{Fragment, Nfa, NfaBuilder};
use thompson_core::Ast;

use crate::{Error, Limits, Result};

/// Build an NFA accepting exactly the language of `ast`.
///
/// The exit of the root fragment becomes the single accept state.
pub fn build(ast: &Ast, limits: &Limits) -> Result<Nfa> {
    let mut builder = NfaBuilder::new();
    let root = lower(&mut builder, ast, 0, limits.recursion_limit)?;
    Ok(builder.finish(root))
}

fn lower(builder: &mut NfaBuilder, ast: &Ast, depth: u32, limit: u32) -> Result<Fragment> {
    if depth >= limit {
        return Err(Error::RecursionLimitExceeded(limit));
    }

    let depth = depth + 1;
    Ok(match ast {
        Ast::Literal(b) => builder.literal(*b),
        Ast::Concatenation(left, right) => {
            let left = lower(builder, left, depth, limit)?;
            let right = lower(builder, right, depth, limit)?;
            builder.concatenation(left, right)
        }
        Ast::Alternation(left, right) => {
            let left = lower(builder, left, depth, limit)?;
            let right = lower(builder, right, depth, limit)?;
            builder.alternation(left, right)
        }
        Ast::KleeneStar(inner) => {
            let inner = lower(builder, inner, depth, limit)?;
            builder.kleene_star(inner)
        }
    })
}
