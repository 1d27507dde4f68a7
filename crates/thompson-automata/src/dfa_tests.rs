//! Tests for the DFA model.

use super::*;

fn two_state() -> Dfa {
    let mut dfa = Dfa::new(vec![2, 0, 2], false);
    let end = dfa.add_state(vec![1], true);
    dfa.add_transition(dfa.start(), b'a', end);
    dfa
}

#[test]
fn new_dfa_has_start_state() {
    let dfa = Dfa::new(vec![0], false);

    assert_eq!(dfa.len(), 1);
    assert_eq!(dfa.start(), 0);
    assert!(!dfa.is_final(0));
}

#[test]
fn core_is_canonicalized() {
    let dfa = two_state();

    assert_eq!(dfa.core(0), &[0, 2]);
    assert_eq!(dfa.find_core(&[0, 2]), Some(0));
    assert_eq!(dfa.find_core(&[1]), Some(1));
    assert_eq!(dfa.find_core(&[2]), None);
}

#[test]
fn transition_lookup() {
    let dfa = two_state();

    assert_eq!(dfa.transition(0, b'a'), Some(1));
    assert_eq!(dfa.transition(0, b'b'), None);
    assert_eq!(dfa.transition(1, b'a'), None);
    assert_eq!(dfa.transition_count(), 1);
}

#[test]
fn add_transition_replaces_existing_edge() {
    let mut dfa = two_state();

    let previous = dfa.add_transition(0, b'a', 0);

    assert_eq!(previous, Some(1));
    assert_eq!(dfa.transition(0, b'a'), Some(0));
    assert_eq!(dfa.transition_count(), 1);
}

#[test]
fn final_states_and_alphabet() {
    let dfa = two_state();

    assert_eq!(dfa.final_states().collect::<Vec<_>>(), vec![1]);
    assert_eq!(dfa.alphabet().into_iter().collect::<Vec<_>>(), vec![b'a']);
}

#[test]
fn dump_with_and_without_core() {
    let dfa = two_state();

    insta::assert_snapshot!(dfa.dump(), @r"
    start: D0

    D0 {0, 2}: 'a' → D1
    D1 {1} (accept): ∅
    ");
    insta::assert_snapshot!(dfa.printer().show_core(false).dump(), @r"
    start: D0

    D0: 'a' → D1
    D1 (accept): ∅
    ");
}
