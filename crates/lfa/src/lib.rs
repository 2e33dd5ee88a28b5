mod builder;
mod dot;
pub mod fa;
mod minimize;
pub mod regex;
mod subset;
pub mod text;


pub use fa::{StateId, Symbol, EPSILON, FA};
pub use regex::{compile, RegexError};
pub use text::FormatError;

/// Compiles `pattern` all the way down to a minimized DFA.
pub fn compile_dfa(pattern: &str) -> Result<FA, RegexError> {
    let nfa = compile(pattern)?;
    let mut dfa = nfa.to_dfa();
    dfa.minimize();
    Ok(dfa)
}
