// shared automata used across the integration tests
#![allow(dead_code)]

pub const SIMPLE_DFA: &str = "5 4\n\
    1 2 l\n\
    2 3 o\n\
    1 4 a\n\
    4 5 l\n\
    1\n\
    2 3 5\n";

// binary-style DFA over {0, 1}, 4 is unreachable
pub const COMPLEX_DFA: &str = "8 16\n\
    1 2 0\n\
    1 6 1\n\
    2 7 0\n\
    2 3 1\n\
    3 1 0\n\
    3 3 1\n\
    4 3 0\n\
    4 7 1\n\
    5 8 0\n\
    5 6 1\n\
    6 3 0\n\
    6 7 1\n\
    7 7 0\n\
    7 5 1\n\
    8 7 0\n\
    8 3 1\n\
    1\n\
    1 3\n";

pub const SIMPLE_NFA: &str = "4 10\n\
    1 2 a\n\
    1 2 a\n\
    1 4 a\n\
    1 3 a\n\
    2 3 b\n\
    2 4 b\n\
    4 3 b\n\
    4 2 b\n\
    1 2 λ\n\
    2 3 λ\n\
    1\n\
    1 4\n";
