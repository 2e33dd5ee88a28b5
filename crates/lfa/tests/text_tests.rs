mod fixtures;

use fixtures::{COMPLEX_DFA, SIMPLE_DFA, SIMPLE_NFA};
use lfa::text::MAX_STATES;
use lfa::{FormatError, Symbol, FA};

fn parse(text: &str) -> FA {
    text.parse().expect("fixture should parse")
}

#[test]
fn reads_header_start_and_accepting_states() {
    let dfa = parse(SIMPLE_DFA);

    assert_eq!(dfa.start_state(), 1);
    assert_eq!(dfa.state_count(), 5);
    assert_eq!(dfa.transition_count(), 4);
    assert_eq!(dfa.accept_states(), &[3, 5]);
}

#[test]
fn reads_and_checks_simple_dfa() {
    let dfa = parse(SIMPLE_DFA);

    let test_vectors = [
        ("lo", true),
        ("al", true),
        ("l", false),
        ("lol", false),
        ("ll", false),
        ("alo", false),
    ];
    for (word, expected) in test_vectors {
        assert_eq!(dfa.check(word), expected, "word '{}'", word);
    }
}

#[test]
fn reads_epsilon_and_duplicate_edges() {
    let nfa = parse(SIMPLE_NFA);

    assert_eq!(nfa.state_count(), 4);
    assert_eq!(nfa.transition_count(), 10);
    assert_eq!(nfa.targets(1, 'a'), &[2, 2, 4, 3]);
    assert_eq!(nfa.targets(1, Symbol::Epsilon), &[2]);
    assert_eq!(nfa.accept_states(), &[4]);
    assert!(!nfa.is_deterministic());
}

#[test]
fn fixtures_round_trip_byte_for_byte() {
    for fixture in [SIMPLE_DFA, COMPLEX_DFA, SIMPLE_NFA] {
        assert_eq!(parse(fixture).to_string(), fixture);
    }

    let nfa_text = "3 4\n2 3 b\n1 3 λ\n1 2 a\n1 3 a\n1\n2 2 3\n";
    assert_eq!(parse(nfa_text).to_string(), nfa_text);

    let empty = "0 0\n0\n0\n";
    assert_eq!(parse(empty).to_string(), empty);
    assert_eq!(parse(empty), FA::new());
}

#[test]
fn writer_keeps_file_order_of_edges() {
    let written = parse(SIMPLE_DFA).to_string();
    assert_eq!(written, "5 4\n1 2 l\n2 3 o\n1 4 a\n4 5 l\n1\n2 3 5\n");
    assert_eq!(parse(&written), parse(SIMPLE_DFA));
}

#[test]
fn malformed_input_is_rejected() {
    assert_eq!(
        "".parse::<FA>(),
        Err(FormatError::Missing {
            line: 1,
            expected: "state and transition counts"
        })
    );
    assert_eq!(
        "2 x\n".parse::<FA>(),
        Err(FormatError::InvalidInteger {
            line: 1,
            token: "x".to_string()
        })
    );
    assert_eq!(
        "2 1\n1 3 a\n1\n1 2\n".parse::<FA>(),
        Err(FormatError::StateOutOfRange {
            line: 2,
            state: 3,
            state_count: 2
        })
    );
    assert_eq!(
        "2 1\n1 2 ab\n1\n1 2\n".parse::<FA>(),
        Err(FormatError::InvalidSymbol {
            line: 2,
            token: "ab".to_string()
        })
    );
    assert_eq!(
        "2 1\n1 2 a\n1\n2 2\n".parse::<FA>(),
        Err(FormatError::Missing {
            line: 4,
            expected: "accepting state"
        })
    );
    assert_eq!(
        "2 1\n1 2 a\n1\n1 2 2\n".parse::<FA>(),
        Err(FormatError::Trailing {
            line: 4,
            token: "2".to_string()
        })
    );
}

#[test]
fn too_few_transition_lines() {
    // the start line is taken for a transition and has too few fields
    assert_eq!(
        "2 2\n1 2 a\n1\n1 2\n".parse::<FA>(),
        Err(FormatError::Missing {
            line: 3,
            expected: "target state"
        })
    );
    assert_eq!(
        "2 2\n1 2 a\n".parse::<FA>(),
        Err(FormatError::Missing {
            line: 3,
            expected: "transition"
        })
    );
}

#[test]
fn oversized_header_is_rejected_before_allocating() {
    assert_eq!(
        "99999999999 0\n1\n0\n".parse::<FA>(),
        Err(FormatError::TooManyStates {
            line: 1,
            state_count: 99999999999,
            max: MAX_STATES
        })
    );

    let largest = format!("{} 0\n1\n0\n", MAX_STATES);
    assert_eq!(parse(&largest).state_count(), MAX_STATES);
}
