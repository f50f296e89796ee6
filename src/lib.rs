//! This library loads right-linear grammars and decides whether sentences belong to their language.
//!
//! A right-linear grammar (GLD) only has productions whose body is either the empty derivation
//! or a sequence of terminals that may end in a single non-terminal.
//!
//! It consists of
//! - __frontend__: Load a grammar file in GLD json format and validate it.
//! - __recognizer__: Decide whether a sequence of tokens is generated by a grammar.
//! - __backend__: Use the loaded grammar to do whatever you want.
//!   Currently the only backend is `json`, which writes a grammar back out in normalized form.
//!
//! ## Getting Started
//! The first step always is to load a grammar. To do this use the [`Grammar::builder()`](grammar::Grammar::builder) method
//! that will give you access to a [`GrammarBuilder`](grammar::GrammarBuilder) like this:
//! ```no_run
//! # use gld_grammar::grammar::Grammar;
//! let grammar = Grammar::builder()
//!     // Load a grammar in GLD format
//!     .gld_grammar("my-grammar.json").unwrap()
//!     // Structural and shape validation happen here
//!     .build().unwrap();
//! ```
//! Then, ask the [`Recognizer`](recognizer::Recognizer) about sentences:
//! ```no_run
//! # use gld_grammar::{grammar::Grammar, recognizer::{Recognizer, RecognitionOutcome}};
//! # let grammar = Grammar::builder().gld_grammar("my-grammar.json").unwrap().build().unwrap();
//! match Recognizer::new(&grammar).recognize(&["0", "1"]) {
//!     RecognitionOutcome::Accepted => println!("yes"),
//!     outcome => println!("no: {}", outcome),
//! }
//! ```
//! And that's it.
//!
//! ## Grammar format
//! ```json
//! {
//!     // C-style comments are allowed
//!     "non_terminal_symbols": ["S"],
//!     "terminal_symbols": ["0", "1"],
//!     "initial_symbol": "S",
//!     "productions": [
//!         { "symbol": "S", "derivations": [["0", "S"], "1 S", "e"] }
//!     ]
//! }
//! ```
//! A derivation is a list of symbol names or a string of whitespace separated names.
//! Files that write one symbol per character, as in `"0S"`, are loaded with
//! [`GrammarBuilder::char_derivations`](grammar::GrammarBuilder::char_derivations).
//! The string `"e"` on its own is the empty derivation.
//!
//! ## Feature flags
//! - `debug_trace`: Print every state the recognizer explores to stderr.

#![deny(missing_docs)]

pub(crate) mod parser;

pub mod error;
pub mod grammar;
pub mod recognizer;
pub mod backends;

#[cfg(test)]
mod tests;
