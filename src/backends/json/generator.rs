use serde::ser::Serialize;
use serde_json::{
    json,
    ser::PrettyFormatter,
    Serializer,
    Value,
};
use std::{
    fs::File,
    io::Write,
    path::Path,
};

use crate::{
    grammar::{
        Grammar,
        Production,
        Symbol,
    },
    parser::gld::EPSILON_MARKER,
};

fn derivation_value(production: &Production) -> Value {
    if production.is_epsilon() {
        return Value::String(EPSILON_MARKER.to_string());
    }

    let symbols = production
        .body()
        .iter()
        .filter_map(|symbol| match symbol {
            Symbol::Terminal(term) => Some(term.content().to_string()),
            Symbol::NonTerminal(nonterm) => Some(nonterm.id().to_string()),
            Symbol::Unknown(name) => Some(name.clone()),
            Symbol::Epsilon => None,
        })
        .map(Value::String)
        .collect();

    Value::Array(symbols)
}

/// This is the main struct of the [`json`](crate::backends::json) backend that writes grammars in GLD json format.
pub struct JsonGenerator {}

impl JsonGenerator {
    /// Create a new JsonGenerator.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {}
    }

    /// Convert `grammar` into a json value. Consecutive productions with the same head
    /// are grouped into one entry, so the declaration order is preserved.
    pub fn to_value(&self, grammar: &Grammar) -> Value {
        let mut productions = Vec::<Value>::new();
        let mut current: Option<(&str, Vec<Value>)> = None;

        for production in grammar.productions() {
            let head = production.head().id();

            if let Some((symbol, derivations)) = current.as_mut() {
                if *symbol == head {
                    derivations.push(derivation_value(production));
                    continue;
                }
            }

            if let Some((symbol, derivations)) = current.take() {
                productions.push(json!({"symbol": symbol, "derivations": derivations}));
            }

            current = Some((head, vec![derivation_value(production)]));
        }

        if let Some((symbol, derivations)) = current {
            productions.push(json!({"symbol": symbol, "derivations": derivations}));
        }

        let alphabet = grammar.alphabet();

        json!({
            "non_terminal_symbols": alphabet.non_terminals().iter().map(|nt| nt.id()).collect::<Vec<_>>(),
            "terminal_symbols": alphabet.terminals().iter().map(|t| t.content()).collect::<Vec<_>>(),
            "initial_symbol": alphabet.initial_symbol().id(),
            "productions": productions,
        })
    }

    /// Write `grammar` into the output file `path` in GLD json format.
    pub fn generate<P: AsRef<Path>>(self, path: P, grammar: &Grammar) -> std::io::Result<()> {
        let json = self.to_value(grammar);

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        json.serialize(&mut ser)?;
        buf.push(b'\n');

        let mut file = File::create(path)?;
        file.write_all(&buf)
    }
}
