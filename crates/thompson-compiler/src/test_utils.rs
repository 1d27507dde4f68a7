//! Test utilities: fixtures, reference semantics and input enumeration.

use thompson_automata::{Dfa, Label, Nfa};
use thompson_core::Ast;
use thompson_vm::Matcher;

use crate::closure::{epsilon_closure, step};
use crate::{Compiled, Compiler};

/// `a(t|w)*`
pub fn a_tw_star() -> Ast {
    Ast::concat(
        Ast::literal(b'a'),
        Ast::star(Ast::alt(Ast::literal(b't'), Ast::literal(b'w'))),
    )
}

/// `x|y`
pub fn x_or_y() -> Ast {
    Ast::alt(Ast::literal(b'x'), Ast::literal(b'y'))
}

/// Compile with default limits, panicking on failure.
pub fn compile(ast: &Ast) -> Compiled {
    Compiler::new()
        .compile(ast)
        .unwrap_or_else(|e| panic!("failed to compile `{ast}`: {e}"))
}

pub fn dfa_accepts(dfa: &Dfa, input: &[u8]) -> bool {
    Matcher::new(dfa).matches(input)
}

/// Run the NFA directly by tracking closed state sets.
pub fn nfa_accepts(nfa: &Nfa, input: &[u8]) -> bool {
    let mut current = epsilon_closure(nfa, [nfa.start()]);
    for &b in input {
        let reached = step(nfa, &current, b);
        if reached.is_empty() {
            return false;
        }
        current = epsilon_closure(nfa, reached);
    }
    current.contains(nfa.accept())
}

/// Membership straight from the definition of each AST operator.
///
/// Exponential; only for short inputs.
pub fn reference_accepts(ast: &Ast, input: &[u8]) -> bool {
    match ast {
        Ast::Literal(b) => matches!(input, [x] if x == b),
        Ast::Concatenation(left, right) => (0..=input.len()).any(|i| {
            reference_accepts(left, &input[..i]) && reference_accepts(right, &input[i..])
        }),
        Ast::Alternation(left, right) => {
            reference_accepts(left, input) || reference_accepts(right, input)
        }
        Ast::KleeneStar(inner) => {
            input.is_empty()
                || (1..=input.len()).any(|i| {
                    reference_accepts(inner, &input[..i]) && reference_accepts(ast, &input[i..])
                })
        }
    }
}

/// Every string over `alphabet` of length at most `max_len`, shortest first.
pub fn strings(alphabet: &[u8], max_len: usize) -> Vec<Vec<u8>> {
    let mut all = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|prefix: &Vec<u8>| {
                alphabet.iter().map(move |&b| {
                    let mut s = prefix.clone();
                    s.push(b);
                    s
                })
            })
            .collect();
        all.extend(frontier.iter().cloned());
    }
    all
}

/// All ASTs over `a` and `b` with up to two levels of operators.
pub fn small_asts() -> Vec<Ast> {
    let leaves = [Ast::literal(b'a'), Ast::literal(b'b')];
    let level1 = combine(&leaves);
    combine(&level1)
}

fn combine(operands: &[Ast]) -> Vec<Ast> {
    let mut out = operands.to_vec();
    for x in operands {
        out.push(Ast::star(x.clone()));
        for y in operands {
            out.push(Ast::concat(x.clone(), y.clone()));
            out.push(Ast::alt(x.clone(), y.clone()));
        }
    }
    out
}

/// Number of epsilon edges, for structural assertions.
pub fn epsilon_edge_count(nfa: &Nfa) -> usize {
    nfa.edges().filter(|(_, label, _)| *label == Label::Epsilon).count()
}
