use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use lfa::FA;

/// Compile a regular expression to a minimal DFA and match a word against it.
///
/// Whatever is not given on the command line is prompted for on stdin.
#[derive(Parser, Debug)]
#[command(name = "lfa", version)]
struct Args {
    /// Regular expression over literals, '|', '*' and parentheses
    #[arg(short, long, conflicts_with = "automaton")]
    regex: Option<String>,

    /// Word to match
    #[arg(short, long)]
    word: Option<String>,

    /// Read an automaton in text form instead of compiling a regex
    #[arg(short, long)]
    automaton: Option<PathBuf>,

    /// Print the minimized automaton as Graphviz DOT
    #[arg(long)]
    dot: bool,

    /// Dump every pipeline stage to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    input.read_line(&mut line).context("failed to read stdin")?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn load_automaton(path: &Path, verbose: bool) -> Result<FA> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let fa: FA = text
        .parse()
        .with_context(|| format!("malformed automaton in {}", path.display()))?;
    if verbose {
        eprintln!("automaton =\n{}", fa);
    }

    if fa.is_deterministic() {
        return Ok(fa);
    }

    let dfa = fa.to_dfa();
    if verbose {
        eprintln!("dfa =\n{}", dfa);
    }
    Ok(dfa)
}

fn compile_regex(pattern: &str, verbose: bool) -> Result<FA> {
    let nfa = lfa::compile(pattern).with_context(|| format!("invalid regex '{}'", pattern))?;
    if verbose {
        eprintln!("nfa =\n{}", nfa);
    }

    let dfa = nfa.to_dfa();
    if verbose {
        eprintln!("dfa =\n{}", dfa);
    }
    Ok(dfa)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut dfa = match &args.automaton {
        Some(path) => load_automaton(path, args.verbose)?,
        None => {
            let pattern = match args.regex {
                Some(pattern) => pattern,
                None => prompt(&mut input, "Give a regular expression: ")?,
            };
            compile_regex(&pattern, args.verbose)?
        }
    };

    let word = match args.word {
        Some(word) => word,
        None => prompt(&mut input, "Give a word to match: ")?,
    };

    dfa.minimize();
    if args.verbose {
        eprintln!("minimized =\n{}", dfa);
    }

    println!("Matches? {}", dfa.check(&word));
    println!("Minimized DFA for the regular expression: ");
    if args.dot {
        println!("{}", dfa.to_dot());
    } else {
        print!("{}", dfa);
    }

    Ok(())
}
