//! Decide whether a sentence belongs to the language of a grammar.
//!
//! Use it like so:
//! ```no_run
//! # use gld_grammar::{grammar::Grammar, recognizer::{Recognizer, RecognitionOutcome}};
//! let grammar = Grammar::builder()
//!     .gld_grammar("my-grammar.json").unwrap()
//!     .build().unwrap();
//!
//! let outcome = Recognizer::new(&grammar).recognize(&["0", "1", "0"]);
//! assert_eq!(outcome, RecognitionOutcome::Accepted);
//! ```
//!
//! The recognizer does a top-down search over the derivations of the initial symbol.
//! Alternatives are tried in declaration order and the first one that derives the whole
//! sentence wins. A branch that fails is simply dropped and the search resumes at the
//! most recent choice point with the state it had there.
//!
//! An alternative is only tried if it can start the rest of the sentence: its first symbol
//! must be the next token, or it must be epsilon once the sentence is used up. Because of
//! that, every expansion either consumes a token or shrinks the goal and the search always
//! terminates. The number of explored states can still grow exponentially with the length
//! of the sentence, so it can be bounded with [`Recognizer::step_limit`].

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::grammar::{Grammar, NonTerminal, Production, Symbol};

/// The verdict for one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionOutcome {
    /// The sentence is generated by the grammar
    Accepted,
    /// The sentence only contains terminals but is not generated by the grammar
    Rejected,
    /// The sentence contains a token that is not a terminal of the grammar.
    /// No search was done.
    InvalidToken(String),
    /// The search hit the configured step limit before reaching a verdict
    Exhausted,
}

impl Display for RecognitionOutcome {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            RecognitionOutcome::Accepted => write!(f, "accepted"),
            RecognitionOutcome::Rejected => write!(f, "rejected"),
            RecognitionOutcome::InvalidToken(token) => write!(f, "invalid token '{}'", token),
            RecognitionOutcome::Exhausted => write!(f, "search limit reached"),
        }
    }
}

/// A choice point: how much of the sentence is matched and what is left to derive.
/// The goal is stored in reverse so that its front is at the end of the vector.
struct State<'g> {
    position: usize,
    goal: Vec<&'g Symbol>,
}

/// The Recognizer decides membership of sentences in the language of a [`Grammar`].
///
/// It holds no state between queries, so a single instance can be used
/// for any number of sentences.
pub struct Recognizer<'g> {
    grammar: &'g Grammar,
    step_limit: Option<usize>,
}

impl<'g> Recognizer<'g> {
    /// Create a new Recognizer. The grammar should have passed
    /// [`validate_structure`](crate::grammar::validate_structure) and
    /// [`validate_shape`](crate::grammar::validate_shape).
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            step_limit: None,
        }
    }

    /// Stop searching after `limit` states and report [`RecognitionOutcome::Exhausted`].
    /// `None` removes the limit.
    pub fn step_limit(mut self, limit: Option<usize>) -> Self {
        self.step_limit = limit;
        self
    }

    /// Decide whether `tokens` is generated by the grammar.
    pub fn recognize<S: AsRef<str>>(&self, tokens: &[S]) -> RecognitionOutcome {
        let alphabet = self.grammar.alphabet();

        for token in tokens {
            if !alphabet.is_terminal(token.as_ref()) {
                return RecognitionOutcome::InvalidToken(token.as_ref().to_string());
            }
        }

        let tokens = tokens.iter().map(AsRef::as_ref).collect::<Vec<&str>>();
        let initial = Symbol::NonTerminal(self.grammar.initial_symbol().clone());

        self.search(&tokens, &initial)
    }

    fn search<'a>(&'a self, tokens: &[&str], initial: &'a Symbol) -> RecognitionOutcome {
        let mut pending = vec![State {
            position: 0,
            goal: vec![initial],
        }];
        let mut steps = 0;

        while let Some(State { mut position, mut goal }) = pending.pop() {
            if let Some(limit) = self.step_limit {
                if steps >= limit {
                    return RecognitionOutcome::Exhausted;
                }
            }
            steps += 1;

            #[cfg(feature = "debug_trace")]
            eprintln!("[gld] remaining {:?} goal [{}]", &tokens[position..], goal.iter().rev().map(|s| s.to_string()).collect::<Vec<_>>().join(" "));

            /* Consume matching terminals */
            loop {
                match goal.last() {
                    Some(Symbol::Epsilon) => {
                        goal.pop();
                    },
                    Some(Symbol::Terminal(term)) if tokens.get(position) == Some(&term.content()) => {
                        goal.pop();
                        position += 1;
                    },
                    _ => break,
                }
            }

            let nonterm = match goal.last() {
                None => {
                    if position == tokens.len() {
                        return RecognitionOutcome::Accepted;
                    }
                    continue;
                },
                Some(Symbol::NonTerminal(nonterm)) => nonterm,
                /* A terminal that does not match or an undeclared symbol */
                Some(_) => continue,
            };

            let lookahead = tokens.get(position).copied();
            let candidates = self.candidates(nonterm, lookahead).collect::<Vec<_>>();

            /* Push in reverse so that the first candidate is explored first */
            for production in candidates.into_iter().rev() {
                let mut next = goal.clone();
                next.pop();
                next.extend(production.body().iter().rev().filter(|s| **s != Symbol::Epsilon));
                pending.push(State {
                    position,
                    goal: next,
                });
            }
        }

        RecognitionOutcome::Rejected
    }

    /// The productions of `nonterm` that can start the remaining sentence.
    fn candidates<'a>(&'a self, nonterm: &NonTerminal, lookahead: Option<&'a str>) -> impl Iterator<Item = &'g Production> + 'a {
        self.grammar.productions_of(nonterm).filter(move |production| match lookahead {
            None => production.is_epsilon(),
            Some(token) => matches!(production.body().first(), Some(Symbol::Terminal(term)) if term.content() == token),
        })
    }
}

impl Grammar {
    /// Shorthand for `Recognizer::new(self).recognize(tokens)`.
    pub fn recognize<S: AsRef<str>>(&self, tokens: &[S]) -> RecognitionOutcome {
        Recognizer::new(self).recognize(tokens)
    }
}
