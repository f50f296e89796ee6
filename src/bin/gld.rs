use clap::Parser;
use std::io::{BufRead, Write};
use std::process::exit;

use gld_grammar::{
    error::GrammarError,
    grammar::Grammar,
    recognizer::Recognizer,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grammar file in GLD json format
    #[arg(value_name = "GRAMMAR")]
    grammar: String,

    /// Check these sentences instead of reading them from stdin
    #[arg(short, long)]
    sentence: Vec<String>,

    /// Every character of a sentence is a token (default: whitespace separated tokens)
    #[arg(long, default_value_t = false)]
    chars: bool,

    /// Derivation strings in the grammar file have one symbol per character, as in "0S"
    #[arg(long, default_value_t = false)]
    char_derivations: bool,

    /// Give up on a sentence after exploring this many search states
    #[arg(long)]
    step_limit: Option<usize>,

    /// Use the grammar even if it is inconsistent or not right-linear
    #[arg(long, default_value_t = false)]
    no_validate: bool,

    /// Do not print the grammar
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

fn tokenize(sentence: &str, chars: bool) -> Vec<String> {
    if chars {
        sentence.chars().filter(|c| !c.is_whitespace()).map(String::from).collect()
    } else {
        sentence.split_whitespace().map(String::from).collect()
    }
}

fn prompt<W: Write>(out: &mut W) -> std::io::Result<()> {
    write!(out, "Type a sentence for validation (or exit to leave): ")?;
    out.flush()
}

fn report(error: GrammarError) -> ! {
    eprintln!("error: {}", error);

    match &error {
        GrammarError::Structure(errors) => errors.iter().for_each(|e| eprintln!("  - {}", e)),
        GrammarError::Shape(errors) => errors.iter().for_each(|e| eprintln!("  - {}", e)),
        _ => {},
    }

    exit(1);
}

fn main() {
    let args = Args::parse();

    let builder = match Grammar::builder().gld_grammar(&args.grammar) {
        Ok(builder) => builder,
        Err(e) => {
            eprintln!("error: {}", e);
            exit(1);
        },
    };

    let grammar = match builder.validate(!args.no_validate).char_derivations(args.char_derivations).build() {
        Ok(grammar) => grammar,
        Err(e) => report(e),
    };

    if !args.quiet {
        print!("{}", grammar);
    }

    for nonterm in grammar.unreachable_non_terminals() {
        eprintln!("warning: non-terminal {} is unreachable from {}", nonterm, grammar.initial_symbol());
    }

    let recognizer = Recognizer::new(&grammar).step_limit(args.step_limit);

    if !args.sentence.is_empty() {
        for sentence in &args.sentence {
            println!("{}: {}", sentence, recognizer.recognize(&tokenize(sentence, args.chars)));
        }
        return;
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if let Err(e) = prompt(&mut std::io::stdout()) {
            eprintln!("error: {}", e);
            exit(1);
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("error: {}", e);
                exit(1);
            },
            None => break,
        };

        if line.trim() == "exit" {
            break;
        }

        println!("{}", recognizer.recognize(&tokenize(&line, args.chars)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("hello  world !", false), vec!["hello", "world", "!"]);
        assert_eq!(tokenize("01 0", true), vec!["0", "1", "0"]);
        assert!(tokenize("   ", false).is_empty());
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_prompt() {
        let mut out = Vec::new();
        prompt(&mut out).unwrap();
        assert_eq!(out, b"Type a sentence for validation (or exit to leave): ");

        let err = prompt(&mut ClosedPipe).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }
}
