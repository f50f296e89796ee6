use crate::{
    error::ShapeError,
    grammar::{Grammar, Production, Symbol},
};

impl Production {
    /// Check this production against the right-linear shape rules and
    /// return the first rule it breaks.
    ///
    /// - Rule 0: `[Epsilon]` always passes
    /// - Rule 1: the body contains at least one terminal
    /// - Rule 2: the body contains at most one non-terminal
    /// - Rule 3: no terminal follows the non-terminal
    pub fn check_shape(&self) -> Result<(), ShapeError> {
        match self.shape_errors().into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Like [`check_shape`](Self::check_shape) but returns every broken rule.
    pub fn shape_errors(&self) -> Vec<ShapeError> {
        let mut errors = Vec::new();

        if self.is_epsilon() {
            return errors;
        }

        if !self.body().iter().any(Symbol::is_terminal) {
            errors.push(ShapeError::EmptyDerivationMissingTerminal(self.clone()));
        }

        if self.body().iter().filter(|s| s.is_non_terminal()).count() > 1 {
            errors.push(ShapeError::TooManyNonTerminals(self.clone()));
        }

        let terminal_after_nonterm = self
            .body()
            .iter()
            .skip_while(|s| !s.is_non_terminal())
            .any(Symbol::is_terminal);

        if terminal_after_nonterm {
            errors.push(ShapeError::NonTerminalNotTrailing(self.clone()));
        }

        errors
    }
}

/// Check that every production of `grammar` is right-linear.
///
/// Only meaningful for grammars that passed [`validate_structure`](crate::grammar::validate_structure).
pub fn validate_shape(grammar: &Grammar) -> Result<(), Vec<ShapeError>> {
    let errors = grammar
        .productions()
        .iter()
        .flat_map(Production::shape_errors)
        .collect::<Vec<_>>();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{NonTerminal, Terminal};

    fn t(s: &str) -> Symbol {
        Symbol::Terminal(Terminal::new(s))
    }

    fn n(s: &str) -> Symbol {
        Symbol::NonTerminal(NonTerminal::new(s))
    }

    fn prod(body: Vec<Symbol>) -> Production {
        Production::new(NonTerminal::new("S"), body)
    }

    #[test]
    fn test_epsilon_passes() {
        assert_eq!(Production::epsilon(NonTerminal::new("X")).check_shape(), Ok(()));
    }

    #[test]
    fn test_right_linear_bodies() {
        assert_eq!(prod(vec![t("a")]).check_shape(), Ok(()));
        assert_eq!(prod(vec![t("a"), t("b"), n("A")]).check_shape(), Ok(()));
    }

    #[test]
    fn test_missing_terminal() {
        let p = prod(vec![n("A")]);
        assert_eq!(p.check_shape(), Err(ShapeError::EmptyDerivationMissingTerminal(p.clone())));
    }

    #[test]
    fn test_too_many_nonterminals() {
        let p = prod(vec![t("a"), n("A"), n("B")]);
        assert_eq!(p.check_shape(), Err(ShapeError::TooManyNonTerminals(p.clone())));

        let p = prod(vec![n("A"), n("B")]);
        assert!(p.shape_errors().contains(&ShapeError::TooManyNonTerminals(p.clone())));
    }

    #[test]
    fn test_nonterminal_not_trailing() {
        let p = prod(vec![n("A"), t("b")]);
        assert_eq!(p.check_shape(), Err(ShapeError::NonTerminalNotTrailing(p.clone())));
        assert_eq!(p.shape_errors().len(), 1);
    }

    #[test]
    fn test_unknown_symbols_are_ignored() {
        let p = prod(vec![t("a"), n("A"), Symbol::Unknown("x".to_string())]);
        assert_eq!(p.check_shape(), Ok(()));
    }
}
