use ahash::AHashSet;

use crate::{
    error::StructuralError,
    grammar::{Grammar, Symbol},
};

/// Check that `grammar` is internally consistent.
///
/// Every check runs to completion, so the returned list contains every violation:
/// - each declared non-terminal heads at least one production
/// - each declared terminal occurs in some production body
/// - each production head is a declared non-terminal
/// - each body symbol is a declared terminal, a declared non-terminal or epsilon
pub fn validate_structure(grammar: &Grammar) -> Result<(), Vec<StructuralError>> {
    let alphabet = grammar.alphabet();
    let mut errors = Vec::new();
    let mut heads = AHashSet::new();
    let mut used_terminals = AHashSet::new();

    for production in grammar.productions() {
        heads.insert(production.head().id());

        for symbol in production.body() {
            if let Symbol::Terminal(term) = symbol {
                used_terminals.insert(term.content());
            }
        }
    }

    for nonterm in alphabet.non_terminals() {
        if !heads.contains(nonterm.id()) {
            errors.push(StructuralError::MissingProductionsForNonTerminal(nonterm.clone()));
        }
    }

    for term in alphabet.terminals() {
        if !used_terminals.contains(term.content()) {
            errors.push(StructuralError::UnusedTerminal(term.clone()));
        }
    }

    for production in grammar.productions() {
        if !alphabet.is_non_terminal(production.head().id()) {
            errors.push(StructuralError::UndeclaredProductionHead(production.head().clone()));
        }

        for symbol in production.body() {
            if let Symbol::Unknown(name) = symbol {
                errors.push(StructuralError::UndefinedBodySymbol {
                    head: production.head().clone(),
                    symbol: name.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
