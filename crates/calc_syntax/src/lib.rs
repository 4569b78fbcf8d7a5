//! Syntax front end for the Calc language: source positions, lexer, AST, scopes, parser, diagnostics.
//!
//! The crate turns source text into a position-annotated AST whose lexical scopes are built while parsing, or into a
//! list of diagnostics when the text is malformed. It does no file-system access; see the `calc` crate for the
//! `.calc` file and directory entry points.
//!
//! ## Notes
//! - Vocabulary identity (keywords/operators/punctuation) comes from `calc_core::lang` registries.
//! - Parsing is single-threaded and sequential. Files of one batch share a [`source::FileSet`], a
//!   [`scope::ScopeTree`] with one top scope, and one [`diagnostics::Diagnostics`] sink.
//!
//! ## Examples
//! ```rust
//! use calc_syntax::diagnostics::Diagnostics;
//! use calc_syntax::scope::ScopeTree;
//! use calc_syntax::source::FileSet;
//!
//! let mut files = FileSet::new();
//! let mut scopes = ScopeTree::new();
//! let top = scopes.open(None);
//! let mut diags = Diagnostics::new();
//!
//! let file = calc_syntax::parse_source(&mut files, &mut scopes, top, "main.calc", "(decl main () Int 0)", &mut diags);
//! assert!(diags.is_empty());
//! assert_eq!(file.root.len(), 1);
//! assert!(scopes.lookup(top, "main").is_some());
//! ```
//!
//! ## See also
//! - `calc_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod scope;
pub mod source;
pub mod token_helpers;

pub use parser::{parse_expression, parse_source};
