use std::fmt::{Display, Formatter, Result as FmtResult};

use ahash::{AHashMap, AHashSet};
use itertools::Itertools;

use crate::grammar::GrammarBuilder;

/// Name of a non-terminal.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct NonTerminal(String);

impl NonTerminal {
    /// Create a non-terminal with the given name.
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// The name of this non-terminal.
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// A terminal, matched verbatim against one input token.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Terminal(String);

impl Terminal {
    /// Create a terminal with the given content.
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// The token this terminal matches.
    pub fn content(&self) -> &str {
        &self.0
    }
}

/// A single symbol in the body of a production.
///
/// `Epsilon` is its own variant and never compares equal to a terminal,
/// even one that happens to be spelled like the epsilon marker of a grammar file.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum Symbol {
    /// A declared terminal
    Terminal(Terminal),
    /// A declared non-terminal
    NonTerminal(NonTerminal),
    /// The empty derivation
    Epsilon,
    /// A name declared in neither alphabet. Only grammars that fail
    /// [`validate_structure`](crate::grammar::validate_structure) contain these.
    Unknown(String),
}

impl Symbol {
    /// Whether this is a terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    /// Whether this is a non-terminal.
    pub fn is_non_terminal(&self) -> bool {
        matches!(self, Symbol::NonTerminal(_))
    }
}

/// A single production rule `head -> body`.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Production {
    head: NonTerminal,
    body: Vec<Symbol>,
}

impl Production {
    /// Create a production. An empty `body` is stored as `[Epsilon]`.
    pub fn new(head: NonTerminal, mut body: Vec<Symbol>) -> Self {
        if body.is_empty() {
            body.push(Symbol::Epsilon);
        }

        Self {
            head,
            body,
        }
    }

    /// Create the production `head -> ε`.
    pub fn epsilon(head: NonTerminal) -> Self {
        Self::new(head, vec![Symbol::Epsilon])
    }

    /// The left-hand side.
    pub fn head(&self) -> &NonTerminal {
        &self.head
    }

    /// The right-hand side.
    pub fn body(&self) -> &[Symbol] {
        &self.body
    }

    /// Whether the body is exactly `[Epsilon]`.
    pub fn is_epsilon(&self) -> bool {
        matches!(self.body.as_slice(), [Symbol::Epsilon])
    }
}

/// The declared terminals and non-terminals together with the initial symbol.
///
/// Both alphabets keep their declaration order.
#[derive(Debug, Clone)]
pub struct Alphabet {
    non_terminals: Vec<NonTerminal>,
    terminals: Vec<Terminal>,
    initial: NonTerminal,
    non_terminal_index: AHashSet<String>,
    terminal_index: AHashSet<String>,
}

impl Alphabet {
    pub(crate) fn new(non_terminals: Vec<NonTerminal>, terminals: Vec<Terminal>, initial: NonTerminal) -> Self {
        let non_terminal_index = non_terminals.iter().map(|nt| nt.id().to_string()).collect();
        let terminal_index = terminals.iter().map(|t| t.content().to_string()).collect();

        Self {
            non_terminals,
            terminals,
            initial,
            non_terminal_index,
            terminal_index,
        }
    }

    /// The declared non-terminals.
    pub fn non_terminals(&self) -> &[NonTerminal] {
        &self.non_terminals
    }

    /// The declared terminals.
    pub fn terminals(&self) -> &[Terminal] {
        &self.terminals
    }

    /// The symbol every derivation starts from.
    pub fn initial_symbol(&self) -> &NonTerminal {
        &self.initial
    }

    /// Whether `name` is a declared non-terminal.
    pub fn is_non_terminal(&self, name: &str) -> bool {
        self.non_terminal_index.contains(name)
    }

    /// Whether `name` is a declared terminal.
    pub fn is_terminal(&self, name: &str) -> bool {
        self.terminal_index.contains(name)
    }

    /// Turn a name from a grammar description into a [`Symbol`].
    pub fn classify(&self, name: &str) -> Symbol {
        if self.is_terminal(name) {
            Symbol::Terminal(Terminal::new(name))
        } else if self.is_non_terminal(name) {
            Symbol::NonTerminal(NonTerminal::new(name))
        } else {
            Symbol::Unknown(name.to_string())
        }
    }
}

/// A right-linear grammar: an [`Alphabet`] and its productions in declaration order.
///
/// The order of the productions is the order in which the recognizer tries them.
/// A grammar never changes after it has been built.
#[derive(Debug, Clone)]
pub struct Grammar {
    alphabet: Alphabet,
    productions: Vec<Production>,
    by_head: AHashMap<NonTerminal, Vec<usize>>,
}

impl Grammar {
    pub(crate) fn new(alphabet: Alphabet, productions: Vec<Production>) -> Self {
        let mut by_head = AHashMap::<NonTerminal, Vec<usize>>::new();

        for (i, production) in productions.iter().enumerate() {
            by_head.entry(production.head().clone()).or_default().push(i);
        }

        Self {
            alphabet,
            productions,
            by_head,
        }
    }

    /// Returns a [`GrammarBuilder`] that loads and validates grammars.
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    /// The alphabet of this grammar.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Shorthand for `self.alphabet().initial_symbol()`.
    pub fn initial_symbol(&self) -> &NonTerminal {
        self.alphabet.initial_symbol()
    }

    /// All productions in declaration order.
    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    /// The productions headed by `head`, in declaration order.
    pub fn productions_of<'a>(&'a self, head: &NonTerminal) -> impl Iterator<Item = &'a Production> + 'a {
        self.by_head
            .get(head)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&i| &self.productions[i])
    }
}

impl Display for NonTerminal {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl Display for Terminal {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Symbol::Terminal(term) => write!(f, "{}", term),
            Symbol::NonTerminal(nonterm) => write!(f, "{}", nonterm),
            Symbol::Epsilon => write!(f, "ε"),
            Symbol::Unknown(name) => write!(f, "{}?", name),
        }
    }
}

impl Display for Production {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{} -> {}", self.head, self.body.iter().join(" "))
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        writeln!(f, "Non-terminals: {}", self.alphabet.non_terminals.iter().join(", "))?;
        writeln!(f, "Terminals: {}", self.alphabet.terminals.iter().join(", "))?;
        writeln!(f, "Initial symbol: {}", self.alphabet.initial)?;
        writeln!(f, "Productions:")?;

        for production in &self.productions {
            writeln!(f, "  {}", production)?;
        }

        Ok(())
    }
}
