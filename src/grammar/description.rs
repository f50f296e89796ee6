/// One right-hand side of a [`ProductionDescription`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerivationDescription {
    /// The empty derivation
    Epsilon,
    /// A sequence of symbol names
    Symbols(Vec<String>),
    /// Symbol names written as one string. How it is split is decided by
    /// [`GrammarBuilder::char_derivations`](crate::grammar::GrammarBuilder::char_derivations).
    Text(String),
}

impl DerivationDescription {
    /// Shorthand for `DerivationDescription::Symbols`.
    pub fn symbols<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DerivationDescription::Symbols(names.into_iter().map(Into::into).collect())
    }
}

/// All derivations of one non-terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionDescription {
    /// The head of every derivation
    pub symbol: String,
    /// The alternatives, in priority order
    pub derivations: Vec<DerivationDescription>,
}

/// A grammar as it comes out of a grammar file, before symbol names are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GrammarDescription {
    /// Declared non-terminal names
    pub non_terminal_symbols: Vec<String>,
    /// Declared terminal names
    pub terminal_symbols: Vec<String>,
    /// Name of the initial symbol
    pub initial_symbol: String,
    /// The productions in declaration order
    pub productions: Vec<ProductionDescription>,
}

impl GrammarDescription {
    /// Create a description without any productions.
    pub fn new<N, T, S1, S2, S3>(non_terminal_symbols: N, terminal_symbols: T, initial_symbol: S3) -> Self
    where
        N: IntoIterator<Item = S1>,
        T: IntoIterator<Item = S2>,
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self {
            non_terminal_symbols: non_terminal_symbols.into_iter().map(Into::into).collect(),
            terminal_symbols: terminal_symbols.into_iter().map(Into::into).collect(),
            initial_symbol: initial_symbol.into(),
            productions: Vec::new(),
        }
    }

    /// Append the production `symbol -> derivation`.
    pub fn production<S: Into<String>>(mut self, symbol: S, derivation: DerivationDescription) -> Self {
        self.productions.push(ProductionDescription {
            symbol: symbol.into(),
            derivations: vec![derivation],
        });
        self
    }
}
