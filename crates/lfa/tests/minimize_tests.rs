mod fixtures;

use fixtures::COMPLEX_DFA;
use lfa::{compile_dfa, FA};

fn parse(text: &str) -> FA {
    text.parse().expect("fixture should parse")
}

#[test]
fn complex_dfa_minimizes_to_five_states() {
    let mut dfa = parse(COMPLEX_DFA);
    dfa.minimize();

    assert_eq!(dfa.state_count(), 5);
    assert_eq!(dfa.transition_count(), 10);
    assert_eq!(dfa.edges().count(), 10);
    assert!(dfa.is_deterministic());

    let test_vectors = [
        ("00110", true),
        ("01", true),
        ("011111", true),
        ("10", true),
        ("10001", true),
        ("1101", false),
        ("0101", false),
    ];
    for (word, expected) in test_vectors {
        assert_eq!(dfa.check(word), expected, "word '{}'", word);
    }
}

#[test]
fn minimized_text_form() {
    // 5 folds into 1 and 8 into 2, survivors keep their relative order
    let mut dfa = parse(COMPLEX_DFA);
    dfa.minimize();

    let expected = "5 10\n\
        1 2 0\n\
        1 4 1\n\
        2 5 0\n\
        2 3 1\n\
        3 1 0\n\
        3 3 1\n\
        4 3 0\n\
        4 5 1\n\
        5 5 0\n\
        5 1 1\n\
        1\n\
        1 3\n";
    assert_eq!(dfa.to_string(), expected);
}

#[test]
fn minimization_is_idempotent() {
    let mut once = parse(COMPLEX_DFA);
    once.minimize();
    let mut twice = once.copy();
    twice.minimize();

    assert_eq!(twice.state_count(), once.state_count());
    assert_eq!(twice.transition_count(), once.transition_count());
    assert_eq!(twice, once);
}

#[test]
fn reachable_dead_state_is_removed() {
    // 3 is reachable from the start but loops forever without accepting
    let mut dfa = parse("3 4\n1 2 a\n1 3 b\n3 3 a\n3 3 b\n1\n1 2\n");
    dfa.minimize();

    assert_eq!(dfa.state_count(), 2);
    assert_eq!(dfa.transition_count(), 1);
    assert!(dfa.check("a"));
    assert!(!dfa.check("b"));
    for state in dfa.states() {
        assert!(!dfa.cannot_reach_any_accepting_state(state));
    }
}

#[test]
fn regex_pipeline_preserves_counts_invariant() {
    for pattern in ["(a|b)*blabla", "(a|bb)*", "a|b|c", "((a|b*)c)*"] {
        let dfa = compile_dfa(pattern).expect("pattern compiles");
        assert_eq!(dfa.edges().count(), dfa.transition_count(), "pattern {}", pattern);
        for (from, to, _) in dfa.edges() {
            assert!((1..=dfa.state_count()).contains(&from));
            assert!((1..=dfa.state_count()).contains(&to));
        }
        let mut again = dfa.copy();
        again.minimize();
        assert_eq!(again, dfa, "pattern {}", pattern);
    }
}

#[test]
#[should_panic(expected = "requires a DFA")]
fn minimize_rejects_nfa() {
    let mut nfa = parse("2 2\n1 2 a\n1 1 a\n1\n1 2\n");
    nfa.minimize();
}
