use std::path::Path;
use ahash::AHashSet;

use crate::{
    parser::gld,
    grammar::{
        Alphabet, DerivationDescription, Grammar, GrammarDescription,
        NonTerminal, Production, Symbol, Terminal,
        validate_shape, validate_structure,
    },
    error::{ParsingError, GrammarError},
};

/// The GrammarBuilder turns a [`GrammarDescription`] into a [`Grammar`].
///
/// Use it like so:
/// ```no_run
/// # use gld_grammar::grammar::Grammar;
/// let grammar = Grammar::builder()
///     // Load a grammar file
///     .gld_grammar("my-grammar.json").unwrap()
///     // Optionally start somewhere else
///     .initial_symbol("A")
///     .build().unwrap();
/// ```
/// By default `build()` runs [`validate_structure`] and [`validate_shape`] and refuses
/// grammars that fail either of them.
pub struct GrammarBuilder {
    description: GrammarDescription,
    validate: bool,
    char_derivations: bool,
    initial_symbol: Option<String>,
}

impl GrammarBuilder {
    pub(crate) fn new() -> Self {
        Self {
            description: GrammarDescription::default(),
            validate: true,
            char_derivations: false,
            initial_symbol: None,
        }
    }

    fn check_initial_symbol(&self, initial: &str) -> bool {
        self.description.non_terminal_symbols.iter().any(|nt| nt == initial)
    }

    fn check_disjoint(&self) -> Option<String> {
        let non_terms = self.description.non_terminal_symbols.iter().collect::<AHashSet<_>>();

        self.description
            .terminal_symbols
            .iter()
            .find(|term| non_terms.contains(term))
            .cloned()
    }

    fn split_text(&self, text: &str) -> Vec<String> {
        if self.char_derivations {
            text.chars().filter(|c| !c.is_whitespace()).map(String::from).collect()
        } else {
            text.split_whitespace().map(str::to_string).collect()
        }
    }
}

fn dedup(names: &[String]) -> Vec<&String> {
    let mut seen = AHashSet::new();
    names.iter().filter(|name| seen.insert(*name)).collect()
}

impl GrammarBuilder {
    /// Load a grammar file in GLD json format. It replaces any previously set description.
    pub fn gld_grammar<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ParsingError> {
        self.description = gld::parse_json(path.as_ref())?;
        Ok(self)
    }

    /// Use an already materialized grammar description.
    pub fn description(mut self, description: GrammarDescription) -> Self {
        self.description = description;
        self
    }

    /// Whether `build()` runs the structural and shape validators. On by default.
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Split derivation strings into one symbol per character, as in `"0S"`.
    /// Off by default, where derivation strings are split on whitespace.
    pub fn char_derivations(mut self, char_derivations: bool) -> Self {
        self.char_derivations = char_derivations;
        self
    }

    /// Override the initial symbol of the description.
    pub fn initial_symbol<S: Into<String>>(mut self, initial_symbol: S) -> Self {
        self.initial_symbol = Some(initial_symbol.into());
        self
    }

    /// Create a [`Grammar`].
    pub fn build(self) -> Result<Grammar, GrammarError> {
        let initial = self.initial_symbol.clone().unwrap_or_else(|| self.description.initial_symbol.clone());

        if !self.check_initial_symbol(&initial) {
            return Err(GrammarError::UndeclaredInitialSymbol(initial));
        }

        if let Some(symbol) = self.check_disjoint() {
            return Err(GrammarError::AmbiguousSymbol(symbol));
        }

        let alphabet = Alphabet::new(
            dedup(&self.description.non_terminal_symbols).into_iter().map(NonTerminal::new).collect(),
            dedup(&self.description.terminal_symbols).into_iter().map(Terminal::new).collect(),
            NonTerminal::new(initial),
        );

        let mut productions = Vec::new();

        for production in &self.description.productions {
            let head = NonTerminal::new(&production.symbol);

            for derivation in &production.derivations {
                let body = match derivation {
                    DerivationDescription::Epsilon => vec![Symbol::Epsilon],
                    DerivationDescription::Symbols(names) => names.iter().map(|name| alphabet.classify(name)).collect(),
                    DerivationDescription::Text(text) => self.split_text(text).iter().map(|name| alphabet.classify(name)).collect(),
                };

                productions.push(Production::new(head.clone(), body));
            }
        }

        let grammar = Grammar::new(alphabet, productions);

        if self.validate {
            validate_structure(&grammar).map_err(GrammarError::Structure)?;
            validate_shape(&grammar).map_err(GrammarError::Shape)?;
        }

        Ok(grammar)
    }
}
