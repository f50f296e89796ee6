//! Write a grammar in GLD json format.
//!
//! Use it like so:
//! ```no_run
//! # use gld_grammar::{grammar::Grammar, backends::json::JsonGenerator};
//! // First, load a grammar from disk. Comments are stripped on the way.
//! let grammar = Grammar::builder()
//!     .gld_grammar("my-grammar.json").unwrap()
//!     .build().unwrap();
//!
//! // Then, write it back out in normalized form.
//! JsonGenerator::new().generate("normalized-grammar.json", &grammar).unwrap();
//! ```

mod generator;

pub use generator::JsonGenerator;
