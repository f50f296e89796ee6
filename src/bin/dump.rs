use clap::Parser;
use std::process::exit;

use gld_grammar::{
    grammar::Grammar,
    backends::json::JsonGenerator,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_name = "GRAMMAR")]
    grammar: String,

    #[arg(short, long)]
    output: String,

    #[arg(short, long)]
    initial_symbol: Option<String>,

    #[arg(long, default_value_t = false)]
    char_derivations: bool,
}

fn main() {
    let args = Args::parse();

    let mut builder = match Grammar::builder().gld_grammar(&args.grammar) {
        Ok(builder) => builder,
        Err(e) => {
            eprintln!("error: {}", e);
            exit(1);
        },
    };

    if let Some(initial_symbol) = args.initial_symbol {
        builder = builder.initial_symbol(initial_symbol);
    }

    let grammar = match builder.char_derivations(args.char_derivations).build() {
        Ok(grammar) => grammar,
        Err(e) => {
            eprintln!("error: {}", e);
            exit(1);
        },
    };

    if let Err(e) = JsonGenerator::new().generate(&args.output, &grammar) {
        eprintln!("error: could not write {}: {}", args.output, e);
        exit(1);
    }
}
