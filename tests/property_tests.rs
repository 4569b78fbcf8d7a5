//! Property-based tests for the Calc front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use calc::ast::{Expr, Node};
use calc::diagnostics::Diagnostics;
use calc::lexer::{TokenKind, lex};
use calc::scope::ScopeTree;
use calc::source::{FileSet, Pos};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Identifiers that are not reserved words.
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,6}".prop_filter("keywords are not identifiers", |s| !matches!(s.as_str(), "decl" | "if" | "var"))
}

/// Well-formed expressions built from literals, identifiers and binary forms.
fn expr_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..100, 0u32..100).prop_map(|(a, b)| format!("{a}.{b}")),
        ident_strategy(),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            prop::sample::select(vec!["+", "-", "*", "/", "%", "==", "!=", "<", "<=", ">", ">="]),
            prop::collection::vec(inner, 2..4),
        )
            .prop_map(|(op, operands)| format!("({op} {})", operands.join(" ")))
    })
}

/// Text biased towards the language's own characters, so random input still reaches deep productions.
fn soup_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("(".to_string()),
            Just(")".to_string()),
            Just(" ".to_string()),
            Just("\n".to_string()),
            Just(",".to_string()),
            Just("; c\n".to_string()),
            Just("decl".to_string()),
            Just("if".to_string()),
            Just("var".to_string()),
            Just("=".to_string()),
            Just("-".to_string()),
            Just("+".to_string()),
            Just("Int".to_string()),
            "[0-9.]{1,4}",
            ident_strategy(),
            "\\PC",
        ],
        0..64,
    )
    .prop_map(|parts| parts.join(""))
}

fn parse_as_file(source: &str) -> (Vec<Expr>, Diagnostics) {
    let mut files = FileSet::new();
    let mut scopes = ScopeTree::new();
    let top = scopes.open(None);
    let mut diags = Diagnostics::new();
    let file = calc::parse_source(&mut files, &mut scopes, top, "prop.calc", source, &mut diags);
    (file.root, diags)
}

fn assert_spans_ordered(roots: &[Expr]) -> Result<(), TestCaseError> {
    for root in roots {
        let mut bad = None;
        root.walk(&mut |node| {
            if node.pos() > node.end() && bad.is_none() {
                bad = Some(format!("{node:?}"));
            }
        });
        prop_assert!(bad.is_none(), "node ends before it starts: {:?}", bad);
    }
    Ok(())
}

// =============================================================================
// Lexer Properties
// =============================================================================

proptest! {
    /// Property: token positions never go backwards and every lexeme is the source text at its position
    #[test]
    fn token_positions_are_monotonic(source in "\\PC{0,200}") {
        let tokens = lex(&source);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
        prop_assert_eq!(tokens.last().map(|t| t.pos), Some(Pos(source.len() + 1)));

        let mut last = Pos::NONE;
        for tok in &tokens {
            prop_assert!(tok.pos > last || tok.pos == last && tok.lit.is_empty());
            let offset = tok.pos.0 - 1;
            prop_assert_eq!(&source[offset..offset + tok.lit.len()], tok.lit);
            last = tok.pos;
        }
    }

    /// Property: identifiers lex to a single identifier token
    #[test]
    fn identifiers_survive_lexing(ident in ident_strategy()) {
        let tokens = lex(&ident);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Ident);
        prop_assert_eq!(tokens[0].lit, ident.as_str());
    }
}

// =============================================================================
// Parser Properties
// =============================================================================

proptest! {
    /// Property: well-formed expressions parse cleanly and span the whole input
    #[test]
    fn generated_expressions_parse(source in expr_strategy()) {
        let expr = calc::parse_expression("", &source);
        prop_assert!(expr.is_ok(), "{:?}", expr);
        if let Ok(expr) = expr {
            prop_assert_eq!(expr.pos(), Pos(1));
            prop_assert_eq!(expr.end(), Pos(source.len() + 1));
            assert_spans_ordered(std::slice::from_ref(&expr))?;
        }
    }

    /// Property: any generated expression works as a function body
    #[test]
    fn generated_bodies_parse(name in ident_strategy(), body in expr_strategy()) {
        let source = format!("(decl {name} () Int {body})");
        let (root, diags) = parse_as_file(&source);
        prop_assert!(diags.is_empty(), "{}", diags);
        prop_assert_eq!(root.len(), 1);
    }

    /// Property: arbitrary text never panics and every produced node satisfies pos <= end
    #[test]
    fn arbitrary_input_never_panics(source in soup_strategy()) {
        let _ = calc::parse_expression("prop.calc", &source);
        let (root, _) = parse_as_file(&source);
        assert_spans_ordered(&root)?;
    }
}
