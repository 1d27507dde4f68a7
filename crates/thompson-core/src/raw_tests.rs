use indoc::indoc;

use crate::{Ast, AstKind, ConstructionError, RawNode, RawSymbol, parse_ast};

#[test]
fn lowers_parser_output() {
    let json = indoc! {r#"
        {
          "type": "concatenation",
          "children": [
            { "type": "literal", "symbol": "a" },
            {
              "type": "kleene_star",
              "children": [
                {
                  "type": "alternation",
                  "children": [
                    { "type": "literal", "symbol": 116 },
                    { "type": "literal", "symbol": "w" }
                  ]
                }
              ]
            }
          ]
        }
    "#};

    let ast = parse_ast(json).unwrap().lower().unwrap();

    assert_eq!(ast.to_string(), "a(t|w)*");
}

#[test]
fn unknown_kind_is_rejected() {
    let raw = RawNode::new("optional").with_child(RawNode::new("literal"));

    let err = raw.lower().unwrap_err();

    assert_eq!(
        err,
        ConstructionError::UnknownKind {
            kind: "optional".into()
        }
    );
    assert_eq!(err.to_string(), "unknown AST node kind `optional`");
}

#[test]
fn wrong_child_count_is_rejected() {
    let raw = RawNode::new("alternation")
        .with_child(RawNode::new("literal").with_symbol(b'x'));

    let err = raw.lower().unwrap_err();

    assert_eq!(
        err,
        ConstructionError::ChildCount {
            kind: AstKind::Alternation,
            expected: 2,
            found: 1,
        }
    );
    assert_eq!(err.to_string(), "alternation node expects 2 children, found 1");
}

#[test]
fn literal_needs_symbol() {
    let err = RawNode::new("literal").lower().unwrap_err();
    assert_eq!(err, ConstructionError::MissingSymbol);
}

#[test]
fn symbol_on_inner_node_is_rejected() {
    let raw = RawNode::new("kleene_star")
        .with_child(RawNode::new("literal").with_symbol('a'))
        .with_symbol('b');

    let err = raw.lower().unwrap_err();

    assert_eq!(
        err,
        ConstructionError::UnexpectedSymbol {
            kind: AstKind::KleeneStar
        }
    );
}

#[test]
fn wide_char_symbol_is_out_of_range() {
    let raw = parse_ast(r#"{ "type": "literal", "symbol": "λ" }"#).unwrap();

    let err = raw.lower().unwrap_err();

    assert_eq!(
        err,
        ConstructionError::SymbolOutOfRange {
            symbol: RawSymbol::Text("λ".into())
        }
    );
    assert_eq!(err.to_string(), "symbol \"λ\" does not fit in a single byte");
}

#[test]
fn wide_number_symbol_is_out_of_range() {
    let raw = parse_ast(r#"{ "type": "literal", "symbol": 300 }"#).unwrap();

    let err = raw.lower().unwrap_err();

    assert_eq!(
        err,
        ConstructionError::SymbolOutOfRange {
            symbol: RawSymbol::Number(300)
        }
    );
    assert_eq!(err.to_string(), "symbol 300 does not fit in a single byte");
}

#[test]
fn negative_and_multi_char_symbols_are_out_of_range() {
    for (json, symbol) in [
        (r#"{ "type": "literal", "symbol": -1 }"#, RawSymbol::Number(-1)),
        (r#"{ "type": "literal", "symbol": "ab" }"#, RawSymbol::Text("ab".into())),
        (r#"{ "type": "literal", "symbol": "" }"#, RawSymbol::Text(String::new())),
    ] {
        let err = parse_ast(json).unwrap().lower().unwrap_err();
        assert_eq!(err, ConstructionError::SymbolOutOfRange { symbol }, "{json}");
    }
}

#[test]
fn nul_byte_is_an_ordinary_literal() {
    let raw = parse_ast(r#"{ "type": "literal", "symbol": 0 }"#).unwrap();
    assert_eq!(raw.lower().unwrap(), Ast::literal(0));
}

#[test]
fn nesting_beyond_limit_is_rejected() {
    let mut raw = RawNode::new("literal").with_symbol(b'a');
    for _ in 0..3 {
        raw = RawNode::new("kleene_star").with_child(raw);
    }

    assert!(raw.lower_with_limit(4).is_ok());
    assert_eq!(
        raw.lower_with_limit(3).unwrap_err(),
        ConstructionError::RecursionLimitExceeded { limit: 3 }
    );
}

#[test]
fn raw_from_ast_lowers_back_to_same_tree() {
    let ast = Ast::alt(
        Ast::string("ab").unwrap(),
        Ast::star(Ast::literal(b'c')),
    );

    let raw = RawNode::from(&ast);

    assert_eq!(raw.lower().unwrap(), ast);
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(parse_ast(r#"{ "children": [] }"#).is_err());
    assert!(parse_ast(r#"{ "type": "literal", "symbol": 1.5 }"#).is_err());
    assert!(parse_ast(r#"{ "type": "literal" } trailing"#).is_err());
}

#[test]
fn deep_json_parses_past_serde_default_nesting() {
    let ast = Ast::string([b'a'; 100]).unwrap();
    let json = serde_json::to_string(&RawNode::from(&ast)).unwrap();

    let raw = parse_ast(&json).unwrap();

    assert_eq!(raw.lower().unwrap(), ast);
}

#[test]
fn very_deep_json_is_rejected_by_lowering_not_parsing() {
    let depth = 20_000;
    let mut json = String::new();
    for _ in 0..depth {
        json.push_str(r#"{"type":"kleene_star","children":["#);
    }
    json.push_str(r#"{"type":"literal","symbol":97}"#);
    for _ in 0..depth {
        json.push_str("]}");
    }

    let raw = parse_ast(&json).unwrap();

    assert_eq!(
        raw.lower().unwrap_err(),
        ConstructionError::RecursionLimitExceeded { limit: 1024 }
    );
}
