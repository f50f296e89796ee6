use crate::{
    error::{GrammarError, ShapeError, StructuralError},
    grammar::{
        validate_shape, validate_structure, DerivationDescription, Grammar,
        GrammarDescription, NonTerminal, Terminal,
    },
    recognizer::{RecognitionOutcome, Recognizer},
};

fn load(name: &str) -> Grammar {
    Grammar::builder()
        .gld_grammar(format!("test-data/grammars/{}.json", name)).unwrap()
        .build()
        .unwrap()
}

fn load_unvalidated(name: &str) -> Grammar {
    Grammar::builder()
        .gld_grammar(format!("test-data/grammars/{}.json", name)).unwrap()
        .validate(false)
        .build()
        .unwrap()
}

fn words(sentence: &str) -> Vec<&str> {
    sentence.split_whitespace().collect()
}

#[test]
fn test_binary_words() {
    let grammar = load("binary");
    let recognizer = Recognizer::new(&grammar);

    assert_eq!(recognizer.recognize(&words("0 1 0")), RecognitionOutcome::Accepted);
    assert_eq!(recognizer.recognize(&words("")), RecognitionOutcome::Accepted);
    assert_eq!(recognizer.recognize(&words("1 1 1 1 0")), RecognitionOutcome::Accepted);
    assert_eq!(recognizer.recognize(&words("0 2")), RecognitionOutcome::InvalidToken("2".to_string()));
}

#[test]
fn test_even_zeros() {
    let grammar = load("even-zeros");

    for (sentence, accepted) in [
        ("", true),
        ("1", true),
        ("0", false),
        ("0 0", true),
        ("1 0 1 0 1", true),
        ("0 1 1", false),
        ("0 0 0 1 0", true),
    ] {
        let expected = if accepted { RecognitionOutcome::Accepted } else { RecognitionOutcome::Rejected };
        assert_eq!(grammar.recognize(&words(sentence)), expected, "sentence '{}'", sentence);
    }
}

#[test]
fn test_multi_character_tokens() {
    let grammar = load("greeting");

    assert_eq!(grammar.recognize(&words("hello world !")), RecognitionOutcome::Accepted);
    assert_eq!(grammar.recognize(&words("hello world")), RecognitionOutcome::Accepted);
    assert_eq!(grammar.recognize(&words("good morning alice")), RecognitionOutcome::Accepted);
    assert_eq!(grammar.recognize(&words("good alice")), RecognitionOutcome::Rejected);
    assert_eq!(grammar.recognize(&words("hello")), RecognitionOutcome::Rejected);
    assert_eq!(grammar.recognize(&words("hello bob")), RecognitionOutcome::InvalidToken("bob".to_string()));
}

#[test]
fn test_inconsistent_grammar() {
    let grammar = load_unvalidated("inconsistent");

    assert_eq!(validate_structure(&grammar), Err(vec![
        StructuralError::MissingProductionsForNonTerminal(NonTerminal::new("B")),
        StructuralError::UnusedTerminal(Terminal::new("c")),
        StructuralError::UndefinedBodySymbol {
            head: NonTerminal::new("S"),
            symbol: "D".to_string(),
        },
        StructuralError::UndeclaredProductionHead(NonTerminal::new("C")),
    ]));

    let result = Grammar::builder()
        .gld_grammar("test-data/grammars/inconsistent.json").unwrap()
        .build();
    assert!(matches!(result, Err(GrammarError::Structure(errors)) if errors.len() == 4));
}

#[test]
fn test_not_right_linear() {
    let grammar = load_unvalidated("not-right-linear");
    assert_eq!(validate_structure(&grammar), Ok(()));

    let errors = validate_shape(&grammar).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(matches!(&errors[0], ShapeError::NonTerminalNotTrailing(p) if p.to_string() == "S -> A b"));
    assert!(matches!(&errors[1], ShapeError::TooManyNonTerminals(p) if p.to_string() == "S -> a A S"));
}

#[test]
fn test_removing_sole_producer() {
    let desc = GrammarDescription::new(["S", "A"], ["a", "b"], "S")
        .production("S", DerivationDescription::symbols(["a", "A"]))
        .production("S", DerivationDescription::symbols(["b"]))
        .production("A", DerivationDescription::symbols(["b"]));
    let grammar = Grammar::builder().description(desc.clone()).validate(false).build().unwrap();
    assert_eq!(validate_structure(&grammar), Ok(()));

    let mut desc = desc;
    desc.productions.pop();
    let grammar = Grammar::builder().description(desc).validate(false).build().unwrap();
    assert_eq!(
        validate_structure(&grammar),
        Err(vec![StructuralError::MissingProductionsForNonTerminal(NonTerminal::new("A"))]),
    );
}

#[test]
fn test_repeated_queries() {
    let grammar = load("even-zeros");
    let recognizer = Recognizer::new(&grammar);
    let sentences = ["0 1 0", "0", "", "1 0 2"];
    let first = sentences.iter().map(|s| recognizer.recognize(&words(s))).collect::<Vec<_>>();

    for _ in 0..3 {
        let again = sentences.iter().map(|s| recognizer.recognize(&words(s))).collect::<Vec<_>>();
        assert_eq!(again, first);
    }
}

#[test]
fn test_production_order_does_not_matter() {
    let forward = GrammarDescription::new(["S", "A"], ["a", "b"], "S")
        .production("S", DerivationDescription::symbols(["a", "S"]))
        .production("S", DerivationDescription::symbols(["a"]))
        .production("S", DerivationDescription::symbols(["a", "b", "A"]))
        .production("S", DerivationDescription::Epsilon)
        .production("A", DerivationDescription::symbols(["b", "A"]))
        .production("A", DerivationDescription::Epsilon);
    let mut backward = forward.clone();
    backward.productions.reverse();

    let forward = Grammar::builder().description(forward).build().unwrap();
    let backward = Grammar::builder().description(backward).build().unwrap();

    for sentence in ["", "a", "a a", "a b", "a a b b", "b", "a b a", "b a", "a a a b"] {
        assert_eq!(
            forward.recognize(&words(sentence)),
            backward.recognize(&words(sentence)),
            "sentence '{}'", sentence,
        );
    }
}

#[test]
fn test_character_derivation_file() {
    let grammar = Grammar::builder()
        .gld_grammar("test-data/grammars/binary-chars.json").unwrap()
        .char_derivations(true)
        .build()
        .unwrap();

    assert_eq!(grammar.productions()[0].to_string(), "S -> 0 S");
    assert_eq!(grammar.recognize(&words("0 1 0")), RecognitionOutcome::Accepted);
    assert_eq!(grammar.recognize(&words("")), RecognitionOutcome::Accepted);

    let result = Grammar::builder()
        .gld_grammar("test-data/grammars/binary-chars.json").unwrap()
        .build();
    assert!(matches!(result, Err(GrammarError::Structure(_))));
}
