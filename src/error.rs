//! Error types of this crate.

use std::path::PathBuf;
use thiserror::Error;

use crate::grammar::{NonTerminal, Production, Terminal};

/// Loading a grammar file failed.
#[derive(Debug, Error)]
pub struct ParsingError {
    path: PathBuf,
    msg: String,
}

impl ParsingError {
    pub(crate) fn new<P: Into<PathBuf>, S: Into<String>>(path: P, msg: S) -> Self {
        Self {
            path: path.into(),
            msg: msg.into(),
        }
    }

    /// The file that could not be loaded.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// What went wrong.
    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl std::fmt::Display for ParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParsingError in {}: {}", self.path.display(), self.msg)
    }
}

/// Building a [`Grammar`](crate::grammar::Grammar) failed.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// The initial symbol is not among the non-terminals
    #[error("The initial symbol '{0}' is not a declared non-terminal")]
    UndeclaredInitialSymbol(String),

    /// A name was declared in both alphabets
    #[error("The symbol '{0}' is declared as both terminal and non-terminal")]
    AmbiguousSymbol(String),

    /// Every violation found by the structural validator
    #[error("The grammar is inconsistent ({} error(s))", .0.len())]
    Structure(Vec<StructuralError>),

    /// Every violation found by the shape validator
    #[error("The grammar is not right-linear ({} error(s))", .0.len())]
    Shape(Vec<ShapeError>),
}

/// A violation found by [`validate_structure`](crate::grammar::validate_structure).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// A declared non-terminal heads no production
    #[error("The non-terminal '{0}' has no productions")]
    MissingProductionsForNonTerminal(NonTerminal),

    /// A declared terminal occurs in no production body
    #[error("The terminal '{0}' is not used in any production")]
    UnusedTerminal(Terminal),

    /// A production is headed by an undeclared name
    #[error("The production head '{0}' is not a declared non-terminal")]
    UndeclaredProductionHead(NonTerminal),

    /// A production body references an undeclared name
    #[error("The symbol '{symbol}' in a production of '{head}' is neither a terminal nor a non-terminal")]
    UndefinedBodySymbol {
        /// Head of the production containing the symbol
        head: NonTerminal,
        /// The undeclared name
        symbol: String,
    },
}

/// A production that is not right-linear, found by [`validate_shape`](crate::grammar::validate_shape).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Rule 1: a non-epsilon body needs at least one terminal
    #[error("'{0}' does not contain a terminal")]
    EmptyDerivationMissingTerminal(Production),

    /// Rule 2: at most one non-terminal per body
    #[error("'{0}' contains more than one non-terminal")]
    TooManyNonTerminals(Production),

    /// Rule 3: the non-terminal must come last
    #[error("'{0}' has a terminal after its non-terminal")]
    NonTerminalNotTrailing(Production),
}

impl ShapeError {
    /// The offending production.
    pub fn production(&self) -> &Production {
        match self {
            ShapeError::EmptyDerivationMissingTerminal(p) |
            ShapeError::TooManyNonTerminals(p) |
            ShapeError::NonTerminalNotTrailing(p) => p,
        }
    }
}
