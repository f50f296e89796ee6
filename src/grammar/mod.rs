//! This is the frontend that loads and validates grammars.
//!
//! Use it like so:
//! ```no_run
//! # use gld_grammar::grammar::{Grammar, Symbol};
//! let grammar = Grammar::builder()
//!     .gld_grammar("my-grammar.json").unwrap()
//!     .build().unwrap();
//! ```
//! You can inspect the grammar contents like this:
//! ```no_run
//! # use gld_grammar::grammar::{Grammar, Symbol};
//! # let grammar = Grammar::builder().gld_grammar("my-grammar.json").unwrap().build().unwrap();
//! // Since a grammar is nothing but a set of productions, traverse the productions
//! for production in grammar.productions() {
//!     // The head of a production is a single non-terminal
//!     println!("head = {:?}", production.head());
//!
//!     // The body is a sequence of terminals and at most one trailing non-terminal,
//!     // or just epsilon.
//!     for symbol in production.body() {
//!         match symbol {
//!             Symbol::Terminal(terminal) => println!("terminal: {}", terminal.content()),
//!             Symbol::NonTerminal(nonterminal) => println!("non-terminal {}", nonterminal.id()),
//!             Symbol::Epsilon => println!("epsilon"),
//!             Symbol::Unknown(name) => println!("undeclared: {}", name),
//!         }
//!     }
//! }
//! ```

mod builder;
mod cfg;
mod description;
mod reach;
mod shape;
mod structure;

pub use builder::*;
pub use cfg::*;
pub use description::*;
pub use shape::validate_shape;
pub use structure::validate_structure;
