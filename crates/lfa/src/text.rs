//! Plain text form of an automaton, shared by NFAs and DFAs:
//!
//! ```text
//! <state_count> <transition_count>
//! <from_state> <to_state> <symbol>        (transition_count lines)
//! <start_state>
//! <accepting_count> <accepting_state>...
//! ```
//!
//! Symbols are single characters, `λ` marks an epsilon transition. The start
//! state and the accepting states may be spread over any number of lines.
//! Writing lists transitions in the order they were added, so a parsed file
//! writes back out byte for byte.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::fa::{StateId, Symbol, FA};

/// Largest state count a header may declare.
pub const MAX_STATES: usize = 1 << 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("line {line}: missing {expected}")]
    Missing { line: usize, expected: &'static str },
    #[error("line {line}: '{token}' is not a valid integer")]
    InvalidInteger { line: usize, token: String },
    #[error("line {line}: '{token}' is not a single character symbol")]
    InvalidSymbol { line: usize, token: String },
    #[error("line {line}: state {state} is out of range [1, {state_count}]")]
    StateOutOfRange {
        line: usize,
        state: usize,
        state_count: usize,
    },
    #[error("line {line}: unexpected '{token}'")]
    Trailing { line: usize, token: String },
    #[error("line {line}: {state_count} states exceed the limit of {max}")]
    TooManyStates {
        line: usize,
        state_count: usize,
        max: usize,
    },
}

impl FromStr for FA {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<FA, FormatError> {
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(i, text)| (i + 1, text))
            .filter(|(_, text)| !text.trim().is_empty());

        let (line, header) = lines.next().ok_or(FormatError::Missing {
            line: 1,
            expected: "state and transition counts",
        })?;
        let mut fields = header.split_whitespace();
        let state_count = integer(line, fields.next(), "state count")?;
        let transition_count = integer(line, fields.next(), "transition count")?;
        end_of_line(line, fields.next())?;
        if state_count > MAX_STATES {
            return Err(FormatError::TooManyStates {
                line,
                state_count,
                max: MAX_STATES,
            });
        }

        let mut fa = FA::new();
        for _ in 0..state_count {
            fa.add_state();
        }

        let mut last_line = line;
        for _ in 0..transition_count {
            let (line, text) = lines.next().ok_or(FormatError::Missing {
                line: last_line + 1,
                expected: "transition",
            })?;
            let mut fields = text.split_whitespace();
            let from = state(line, fields.next(), state_count, "source state")?;
            let to = state(line, fields.next(), state_count, "target state")?;
            let symbol = parse_symbol(line, fields.next())?;
            end_of_line(line, fields.next())?;

            fa.add_transition(from, symbol, to);
            last_line = line;
        }

        // the rest is a plain token stream
        let mut tokens = lines.flat_map(|(line, text)| text.split_whitespace().map(move |token| (line, token)));
        let mut line_hint = last_line + 1;
        let mut next = |expected: &'static str| match tokens.next() {
            Some((line, token)) => {
                line_hint = line;
                Ok((line, token))
            }
            None => Err(FormatError::Missing {
                line: line_hint,
                expected,
            }),
        };

        let (line, token) = next("start state")?;
        // an automaton without states has nowhere to start
        if state_count > 0 {
            let start = state(line, Some(token), state_count, "start state")?;
            fa.set_start_state(start);
        } else {
            integer(line, Some(token), "start state")?;
        }

        let (line, token) = next("accepting state count")?;
        let accept_count = integer(line, Some(token), "accepting state count")?;
        for _ in 0..accept_count {
            let (line, token) = next("accepting state")?;
            let accept = state(line, Some(token), state_count, "accepting state")?;
            fa.add_accept_state(accept);
        }

        match tokens.next() {
            Some((line, token)) => Err(FormatError::Trailing {
                line,
                token: token.to_string(),
            }),
            None => Ok(fa),
        }
    }
}

impl fmt::Display for FA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.state_count(), self.transition_count())?;
        for (from, to, symbol) in self.edges() {
            writeln!(f, "{} {} {}", from, to, symbol)?;
        }
        writeln!(f, "{}", self.start_state())?;
        write!(f, "{}", self.accept_states().len())?;
        for state in self.accept_states() {
            write!(f, " {}", state)?;
        }
        writeln!(f)
    }
}

fn integer(line: usize, token: Option<&str>, expected: &'static str) -> Result<usize, FormatError> {
    let token = token.ok_or(FormatError::Missing { line, expected })?;
    token.parse::<usize>().map_err(|_| FormatError::InvalidInteger {
        line,
        token: token.to_string(),
    })
}

fn state(
    line: usize,
    token: Option<&str>,
    state_count: usize,
    expected: &'static str,
) -> Result<StateId, FormatError> {
    let state = integer(line, token, expected)?;
    if state == 0 || state > state_count {
        return Err(FormatError::StateOutOfRange {
            line,
            state,
            state_count,
        });
    }
    Ok(state)
}

fn parse_symbol(line: usize, token: Option<&str>) -> Result<Symbol, FormatError> {
    let token = token.ok_or(FormatError::Missing {
        line,
        expected: "symbol",
    })?;
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Symbol::from(c)),
        _ => Err(FormatError::InvalidSymbol {
            line,
            token: token.to_string(),
        }),
    }
}

fn end_of_line(line: usize, token: Option<&str>) -> Result<(), FormatError> {
    match token {
        Some(token) => Err(FormatError::Trailing {
            line,
            token: token.to_string(),
        }),
        None => Ok(()),
    }
}
