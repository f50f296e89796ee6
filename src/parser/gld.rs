use std::path::Path;
use std::fs::File;
use std::io::BufReader;
use json_comments::{CommentSettings, StripComments};
use serde_json as json;

use crate::{
    grammar::{DerivationDescription, GrammarDescription, ProductionDescription},
    error::ParsingError,
};

/// Marks the empty derivation when it stands alone as a derivation string.
pub(crate) const EPSILON_MARKER: &str = "e";

fn parse_names(value: &json::Value, key: &str) -> Result<Vec<String>, String> {
    let array = match value {
        json::Value::Array(array) => array,
        _ => return Err(format!("'{}' must be an array of strings", key)),
    };

    let mut names = Vec::new();

    for name in array {
        match name.as_str() {
            Some(name) if !name.is_empty() => names.push(name.to_string()),
            Some(_) => return Err(format!("'{}' must not contain empty strings", key)),
            None => return Err(format!("'{}' must be an array of strings", key)),
        }
    }

    Ok(names)
}

fn parse_derivation(value: &json::Value, symbol: &str) -> Result<DerivationDescription, String> {
    match value {
        json::Value::String(s) if s.trim() == EPSILON_MARKER => Ok(DerivationDescription::Epsilon),
        json::Value::String(s) if s.trim().is_empty() => {
            Err(format!("Invalid derivation of '{}': Empty sequences are not allowed, use \"{}\"", symbol, EPSILON_MARKER))
        },
        json::Value::String(s) => Ok(DerivationDescription::Text(s.clone())),
        json::Value::Array(_) => {
            let names = parse_names(value, "derivations")
                .map_err(|e| format!("Invalid derivation of '{}': {}", symbol, e))?;

            if names.is_empty() {
                return Err(format!("Invalid derivation of '{}': Empty sequences are not allowed, use \"{}\"", symbol, EPSILON_MARKER));
            }

            Ok(DerivationDescription::Symbols(names))
        },
        _ => Err(format!("Derivations of '{}' must be strings or arrays of strings", symbol)),
    }
}

fn parse_production(value: &json::Value) -> Result<ProductionDescription, String> {
    let object = match value {
        json::Value::Object(object) => object,
        _ => return Err("Every production must be an object".to_string()),
    };

    let symbol = match object.get("symbol").and_then(json::Value::as_str) {
        Some(symbol) => symbol.to_string(),
        None => return Err("Every production needs a 'symbol' string".to_string()),
    };

    let derivations = match object.get("derivations") {
        Some(json::Value::Array(derivations)) => derivations,
        _ => return Err(format!("Production '{}' needs a 'derivations' array", symbol)),
    };

    if derivations.is_empty() {
        return Err(format!("Invalid production '{}': Must not be empty", symbol));
    }

    let derivations = derivations
        .iter()
        .map(|d| parse_derivation(d, &symbol))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProductionDescription {
        symbol,
        derivations,
    })
}

fn field<'a>(object: &'a json::Map<String, json::Value>, key: &str) -> Result<&'a json::Value, String> {
    object.get(key).ok_or_else(|| format!("Missing key '{}'", key))
}

pub(crate) fn parse_grammar(value: json::Value) -> Result<GrammarDescription, String> {
    let object = match value {
        json::Value::Object(object) => object,
        _ => return Err("GLD grammar must be specified as an object".to_string()),
    };

    let non_terminal_symbols = parse_names(field(&object, "non_terminal_symbols")?, "non_terminal_symbols")?;
    let terminal_symbols = parse_names(field(&object, "terminal_symbols")?, "terminal_symbols")?;

    let initial_symbol = match field(&object, "initial_symbol")?.as_str() {
        Some(initial) => initial.to_string(),
        None => return Err("'initial_symbol' must be a string".to_string()),
    };

    let productions = match field(&object, "productions")? {
        json::Value::Array(productions) => productions
            .iter()
            .map(parse_production)
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err("'productions' must be an array".to_string()),
    };

    Ok(GrammarDescription {
        non_terminal_symbols,
        terminal_symbols,
        initial_symbol,
        productions,
    })
}

pub fn parse_json(path: &Path) -> Result<GrammarDescription, ParsingError> {
    let file = File::open(path).map_err(|e| ParsingError::new(path, format!("Could not open file: {}", e)))?;
    let reader = BufReader::new(file);
    let reader = StripComments::with_settings(CommentSettings::c_style(), reader);

    let value: json::Value = match json::from_reader(reader) {
        Ok(value) => value,
        Err(_) => {
            return Err(ParsingError::new(
                path,
                "Invalid JSON syntax"
            ));
        },
    };

    parse_grammar(value).map_err(|e| ParsingError::new(path, e))
}
