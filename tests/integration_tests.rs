//! Integration tests for the Calc front end
//!
//! These drive the file and directory entry points over the fixtures under `tests/fixtures/`.

use std::fs;
use std::path::{Path, PathBuf};

use calc::LoadError;
use calc::ast::Expr;
use calc::diagnostics::{self, Diagnostics};
use calc::scope::ScopeTree;
use calc::source::FileSet;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn fixture(path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(path)
}

/// Parse a single file against a fresh top scope.
fn parse_fixture(path: &Path) -> Result<calc::ast::File, LoadError> {
    let mut files = FileSet::new();
    let mut scopes = ScopeTree::new();
    let top = scopes.open(None);
    calc::parse_file(&mut files, path, &mut scopes, top)
}

fn calc_files(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == calc::SOURCE_EXTENSION))
        .collect();
    paths.sort();
    paths
}

fn listing(diags: &Diagnostics) -> String {
    diags.iter().map(|d| d.to_string()).collect::<Vec<_>>().join("\n")
}

/// Test that all valid fixtures parse without diagnostics
#[test]
fn test_valid_fixtures() {
    init_tracing();
    let paths = calc_files(&fixture("valid"));
    assert!(!paths.is_empty());

    for path in paths {
        let result = parse_fixture(&path);
        assert!(
            result.is_ok(),
            "Expected {} to parse successfully, got: {}",
            path.display(),
            result.unwrap_err()
        );
    }
}

/// Test that invalid fixtures produce diagnostics (never an I/O error)
#[test]
fn test_invalid_fixtures() {
    init_tracing();
    let paths = calc_files(&fixture("invalid"));
    assert!(!paths.is_empty());

    for path in paths {
        match parse_fixture(&path) {
            Err(LoadError::Syntax(diags)) => assert!(diags.count() > 0),
            other => panic!("Expected {} to fail with diagnostics, got {other:?}", path.display()),
        }
    }
}

#[test]
fn test_invalid_fixture_messages() {
    let cases = [
        ("no_decls.calc", "no_decls.calc:2:1: reached end of file without any declarations"),
        ("arity.calc", "arity.calc:1:20: binary expression must have at least two operands"),
        (
            "nested_decl.calc",
            "nested_decl.calc:1:17: function declarations may only be used in top-level scope",
        ),
        (
            "redeclared.calc",
            "redeclared.calc:2:7: redeclaration of function not allowed, originally declared at: redeclared.calc:1:7",
        ),
        ("side_effect.calc", "side_effect.calc:1:16: expression has no side-effects"),
        ("malformed_number.calc", "malformed_number.calc:1:18: illegal token '1.2.3'"),
        ("unterminated.calc", "unterminated.calc:3:1: Expected ')' got ''"),
    ];

    for (name, expected) in cases {
        let err = parse_fixture(&fixture("invalid").join(name)).unwrap_err();
        let diags = err.diagnostics().expect("syntax error");
        assert_eq!(listing(diags), expected, "{name}");
    }
}

#[test]
fn test_parse_file_rejects_other_extensions() {
    let err = parse_fixture(&fixture("misc/main.txt")).unwrap_err();
    assert!(matches!(err, LoadError::Extension { .. }), "{err:?}");
}

#[test]
fn test_parse_file_missing_file_is_io_error() {
    let err = parse_fixture(&fixture("valid/does_not_exist.calc")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }), "{err:?}");
}

#[test]
fn test_parse_file_keeps_file_name_only() {
    let file = parse_fixture(&fixture("valid/calls.calc")).unwrap();
    assert_eq!(file.name, "calls.calc");
    assert_eq!(file.decls().count(), 3);
}

// ============================================================================
// Packages
// ============================================================================

#[test]
fn test_parse_dir_shares_top_scope() {
    init_tracing();
    let mut files = FileSet::new();
    let package = calc::parse_dir(&mut files, &fixture("package")).unwrap();

    let names: Vec<_> = package.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a.calc", "b.calc"], "non-.calc entries are skipped, files are sorted");
    assert_eq!(files.len(), 2);
    assert!(package.files.iter().all(|f| f.scope == package.scope));
    assert_eq!(package.scopes.scope(package.scope).len(), 2);

    // (decl two () Int (+ (one) (one))) resolves `one` from a.calc
    let one = package.scopes.lookup_local(package.scope, "one");
    let Some(Expr::Decl(two)) = package.files[1].root.first() else {
        panic!("Expected declaration");
    };
    let Some(Expr::Binary(sum)) = two.body.as_deref() else {
        panic!("Expected binary body");
    };
    for operand in &sum.list {
        let Expr::Call(call) = operand else {
            panic!("Expected call operand");
        };
        assert_eq!(call.name.symbol, one);
    }
}

#[test]
fn test_parse_dir_redeclaration_across_files() {
    let mut files = FileSet::new();
    let err = calc::parse_dir(&mut files, &fixture("duplicate")).unwrap_err();
    let diags = err.diagnostics().expect("syntax error");
    assert_eq!(
        listing(diags),
        "b.calc:1:7: redeclaration of function not allowed, originally declared at: a.calc:1:7"
    );
}

#[test]
fn test_parse_dir_reports_every_file() {
    let mut files = FileSet::new();
    let err = calc::parse_dir(&mut files, &fixture("broken_package")).unwrap_err();
    let diags = err.diagnostics().expect("syntax error");
    insta::assert_snapshot!(listing(diags), @r"
    a.calc:1:20: binary expression must have at least two operands
    b.calc:1:17: Expected expression but got '5'
    ");

    let rendered = diagnostics::render(diags, &files);
    assert!(rendered.contains("a.calc"));
    assert!(rendered.contains("b.calc"));
}

#[test]
fn test_parse_dir_without_sources() {
    let mut files = FileSet::new();
    let err = calc::parse_dir(&mut files, &fixture("no_calc")).unwrap_err();
    assert!(matches!(err, LoadError::NoFiles { .. }), "{err:?}");
    assert!(err.to_string().starts_with("no files to parse"));
}

#[test]
fn test_parse_dir_missing_directory() {
    let mut files = FileSet::new();
    let err = calc::parse_dir(&mut files, &fixture("does_not_exist")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }), "{err:?}");
}

/// Test specific lexer behavior through the re-exported modules
mod lexer_tests {
    use calc::lang::keywords::KeywordId;
    use calc::lexer::{TokenKind, lex};

    #[test]
    fn test_decl_header() {
        let tokens = lex("(decl f (x Int) Int x)");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::LPAREN,
                TokenKind::Keyword(KeywordId::Decl),
                TokenKind::Ident,
                TokenKind::LPAREN,
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::RPAREN,
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::RPAREN,
                TokenKind::Eof,
            ]
        );
    }
}
