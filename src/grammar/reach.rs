use petgraph::{
    graphmap::DiGraphMap,
    visit::{Dfs, VisitMap},
};

use crate::grammar::{Grammar, NonTerminal, Symbol};

impl Grammar {
    /// Declared non-terminals that cannot appear in any derivation from the initial symbol.
    ///
    /// Such non-terminals are harmless for recognition, so this is not part of
    /// structural validation.
    pub fn unreachable_non_terminals(&self) -> Vec<&NonTerminal> {
        let mut graph = DiGraphMap::<&str, ()>::new();

        for nonterm in self.alphabet().non_terminals() {
            graph.add_node(nonterm.id());
        }

        for production in self.productions() {
            for symbol in production.body() {
                if let Symbol::NonTerminal(nonterm) = symbol {
                    graph.add_edge(production.head().id(), nonterm.id(), ());
                }
            }
        }

        /* The initial symbol is always a node since it is a declared non-terminal */
        let mut dfs = Dfs::new(&graph, self.initial_symbol().id());

        while dfs.next(&graph).is_some() {}

        self.alphabet()
            .non_terminals()
            .iter()
            .filter(|nonterm| !dfs.discovered.is_visited(&nonterm.id()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::grammar::{DerivationDescription, Grammar, GrammarDescription};

    #[test]
    fn test_unreachable() {
        let desc = GrammarDescription::new(["S", "A", "B", "C"], ["a"], "S")
            .production("S", DerivationDescription::symbols(["a", "A"]))
            .production("A", DerivationDescription::Epsilon)
            .production("B", DerivationDescription::symbols(["a", "C"]))
            .production("C", DerivationDescription::symbols(["a"]));
        let grammar = Grammar::builder().description(desc).build().unwrap();
        let unreachable = grammar
            .unreachable_non_terminals()
            .into_iter()
            .map(|nt| nt.id())
            .collect::<Vec<_>>();
        assert_eq!(unreachable, vec!["B", "C"]);
    }

    #[test]
    fn test_long_chain() {
        let names = (0..200).map(|i| format!("N{}", i)).collect::<Vec<_>>();
        let mut desc = GrammarDescription::new(names.clone(), ["a"], "N0");

        for pair in names.windows(2) {
            desc = desc.production(pair[0].clone(), DerivationDescription::symbols(["a".to_string(), pair[1].clone()]));
        }
        desc = desc.production("N199", DerivationDescription::Epsilon);

        let grammar = Grammar::builder().description(desc.clone()).build().unwrap();
        assert!(grammar.unreachable_non_terminals().is_empty());

        let grammar = Grammar::builder().description(desc).initial_symbol("N100").build().unwrap();
        assert_eq!(grammar.unreachable_non_terminals().len(), 100);
    }

    #[test]
    fn test_everything_reachable() {
        let desc = GrammarDescription::new(["S"], ["a"], "S")
            .production("S", DerivationDescription::symbols(["a", "S"]))
            .production("S", DerivationDescription::Epsilon);
        let grammar = Grammar::builder().description(desc).build().unwrap();
        assert!(grammar.unreachable_non_terminals().is_empty());
    }
}
