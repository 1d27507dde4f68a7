//! Tests for the epsilon-closure engine.

use thompson_automata::{NfaBuilder, StateSet};

use crate::closure::{epsilon_closure, step};
use crate::test_utils::{a_tw_star, compile, small_asts};

#[test]
fn closure_follows_epsilon_chains_through_cycles() {
    let nfa = compile(&a_tw_star()).nfa;

    let closure = epsilon_closure(&nfa, [1]);

    assert_eq!(closure.states(), &[1, 8, 6, 2, 4, 9]);
    assert_eq!(closure.signature(), vec![1, 2, 4, 6, 8, 9]);
    assert!(closure.contains(nfa.accept()));
}

#[test]
fn closure_of_state_without_epsilons_is_itself() {
    let nfa = compile(&a_tw_star()).nfa;

    let closure = epsilon_closure(&nfa, [0]);

    assert_eq!(closure.states(), &[0]);
    assert_eq!(closure.symbols(&nfa).into_iter().collect::<Vec<_>>(), b"a");
}

#[test]
fn closure_of_empty_seed_is_empty() {
    let nfa = compile(&a_tw_star()).nfa;

    let closure = epsilon_closure(&nfa, []);

    assert!(closure.is_empty());
    assert!(closure.set().is_empty());
}

#[test]
fn closure_handles_pure_epsilon_cycle() {
    let mut b = NfaBuilder::new();
    let s0 = b.add_state();
    let s1 = b.add_state();
    let s2 = b.add_state();
    b.connect_epsilon(s0, s1);
    b.connect_epsilon(s1, s2);
    b.connect_epsilon(s2, s0);
    let nfa = b.finish(thompson_automata::Fragment::new(s0, s2));

    let closure = epsilon_closure(&nfa, [s1]);

    assert_eq!(closure.states(), &[s1, s2, s0]);
}

#[test]
fn closure_merges_overlapping_seeds() {
    let nfa = compile(&a_tw_star()).nfa;

    let closure = epsilon_closure(&nfa, [3, 5]);

    assert_eq!(closure.signature(), vec![2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(closure.len(), 8);
}

#[test]
fn step_collects_byte_targets_once() {
    let nfa = compile(&a_tw_star()).nfa;
    let closure = epsilon_closure(&nfa, [1]);

    assert_eq!(step(&nfa, &closure, b't'), vec![3]);
    assert_eq!(step(&nfa, &closure, b'w'), vec![5]);
    assert!(step(&nfa, &closure, b'a').is_empty());
}

#[test]
fn closure_is_idempotent() {
    for ast in small_asts() {
        let nfa = compile(&ast).nfa;
        let seeds = (0..nfa.len() as u32)
            .map(|id| vec![id])
            .chain([vec![nfa.start(), nfa.accept()]]);

        for seed in seeds {
            let once = epsilon_closure(&nfa, seed.iter().copied());
            let twice = epsilon_closure(&nfa, once.states().iter().copied());

            assert_eq!(once.set(), twice.set(), "`{ast}` seeded with {seed:?}");
            let expected: StateSet = seed.iter().copied().collect();
            assert!(expected.is_subset(once.set()));
        }
    }
}
