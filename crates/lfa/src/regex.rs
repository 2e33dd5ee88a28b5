// regex compiler without a parse tree: every call locates the lowest
// precedence operator of its slice and hands the pieces to the builder
//
// supported syntax, lowest precedence first:
// <re> ::= <re> '|' <re>                  (leftmost top-level '|')
// |  <re> <operand> '*' <re>              (leftmost top-level '*')
// |  '(' <re> ')' <re>
// |  <char>+ [ '(' <re> ... ]             (literal chain, then the group)
// |  ''
//
// <operand> ::= <char> | '(' <re> ')'
//
// a top-level '|' always wins over a top-level '*', wherever the two sit

use thiserror::Error;

use crate::fa::{EPSILON, FA};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegexError {
    #[error("unbalanced parenthesis at position {0}")]
    UnbalancedParen(usize),
    #[error("'*' at position {0} has nothing to repeat")]
    MissingOperand(usize),
    #[error("'λ' at position {0} is reserved for epsilon transitions")]
    ReservedSymbol(usize),
    #[error("whitespace at position {0} cannot be used as a symbol")]
    Whitespace(usize),
}

/// Compiles `pattern` into an NFA accepting exactly its language.
///
/// Positions reported in errors count characters, not bytes.
pub fn compile(pattern: &str) -> Result<FA, RegexError> {
    let chars: Vec<char> = pattern.chars().collect();
    validate(&chars)?;
    compile_slice(&chars, 0)
}

fn validate(re: &[char]) -> Result<(), RegexError> {
    let mut open: Vec<usize> = Vec::new();
    for (pos, &c) in re.iter().enumerate() {
        match c {
            '(' => open.push(pos),
            ')' => {
                if open.pop().is_none() {
                    return Err(RegexError::UnbalancedParen(pos));
                }
            }
            EPSILON => return Err(RegexError::ReservedSymbol(pos)),
            c if c.is_whitespace() => return Err(RegexError::Whitespace(pos)),
            _ => (),
        }
    }

    match open.pop() {
        Some(pos) => Err(RegexError::UnbalancedParen(pos)),
        None => Ok(()),
    }
}

// `base` is the position of re[0] within the whole pattern, for errors
fn compile_slice(re: &[char], base: usize) -> Result<FA, RegexError> {
    if re.is_empty() {
        return Ok(FA::empty_word());
    }

    // strip only when the first '(' closes on the very last character,
    // "(a)(b)" starts and ends with parens but is a concatenation
    if re[0] == '(' && matching_close(re, 0, base)? == re.len() - 1 {
        return compile_slice(&re[1..re.len() - 1], base + 1);
    }

    let (pipe, star) = top_level_operators(re);

    if let Some(pipe) = pipe {
        let left = compile_slice(&re[..pipe], base)?;
        let right = compile_slice(&re[pipe + 1..], base + pipe + 1)?;
        return Ok(FA::either(&left, &right));
    }

    if let Some(star) = star {
        if star == 0 {
            return Err(RegexError::MissingOperand(base));
        }

        let operand_start = if re[star - 1] == ')' {
            matching_open(re, star - 1, base)?
        } else {
            star - 1
        };

        let operand = compile_slice(&re[operand_start..star], base + operand_start)?;
        let mut fa = FA::star(&operand);
        if operand_start > 0 {
            let prefix = compile_slice(&re[..operand_start], base)?;
            fa = FA::concat(&prefix, &fa);
        }
        if star + 1 < re.len() {
            let suffix = compile_slice(&re[star + 1..], base + star + 1)?;
            fa = FA::concat(&fa, &suffix);
        }
        return Ok(fa);
    }

    if re[0] == '(' {
        let close = matching_close(re, 0, base)?;
        let group = compile_slice(&re[1..close], base + 1)?;
        let rest = compile_slice(&re[close + 1..], base + close + 1)?;
        return Ok(FA::concat(&group, &rest));
    }

    literal_chain(re, base)
}

// one state per character up to the first '(', the group and everything
// after it are compiled separately and appended
fn literal_chain(re: &[char], base: usize) -> Result<FA, RegexError> {
    let mut fa = FA::new();
    let mut state = fa.add_state();
    fa.set_start_state(state);

    for (pos, &c) in re.iter().enumerate() {
        if c == '(' {
            fa.add_accept_state(state);
            let tail = compile_slice(&re[pos..], base + pos)?;
            return Ok(FA::concat(&fa, &tail));
        }

        let next = fa.add_state();
        fa.add_transition(state, c, next);
        state = next;
    }

    fa.add_accept_state(state);
    Ok(fa)
}

// leftmost '|' and leftmost '*' at nesting depth 0
fn top_level_operators(re: &[char]) -> (Option<usize>, Option<usize>) {
    let mut depth: usize = 0;
    let mut pipe = None;
    let mut star = None;

    for (pos, &c) in re.iter().enumerate() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '|' if depth == 0 && pipe.is_none() => pipe = Some(pos),
            '*' if depth == 0 && star.is_none() => star = Some(pos),
            _ => (),
        }
    }

    (pipe, star)
}

fn matching_close(re: &[char], open: usize, base: usize) -> Result<usize, RegexError> {
    let mut depth: usize = 0;
    for (pos, &c) in re.iter().enumerate().skip(open) {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(pos);
                }
            }
            _ => (),
        }
    }

    Err(RegexError::UnbalancedParen(base + open))
}

fn matching_open(re: &[char], close: usize, base: usize) -> Result<usize, RegexError> {
    let mut depth: usize = 0;
    for pos in (0..=close).rev() {
        match re[pos] {
            ')' => depth += 1,
            '(' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(pos);
                }
            }
            _ => (),
        }
    }

    Err(RegexError::UnbalancedParen(base + close))
}
