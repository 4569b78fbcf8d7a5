//! Parser for the Calc programming language
//!
//! A recursive-descent parser with one token of lookahead. It pulls tokens from the [`Lexer`] on demand, builds the
//! AST bottom-up, opens and fills scopes in the [`ScopeTree`] as it descends, and records [`Diagnostics`] without
//! ever aborting.
//!
//! ## Examples
//!
//! ```rust
//! use calc_syntax::ast::{Expr, Node};
//! use calc_syntax::parser::parse_expression;
//! use calc_syntax::source::Pos;
//!
//! let expr = parse_expression("", "(+ 3 5)").unwrap();
//! assert!(matches!(expr, Expr::Binary(_)));
//! assert_eq!((expr.pos(), expr.end()), (Pos(1), Pos(8)));
//! ```

use crate::ast::*;
use crate::diagnostics::Diagnostics;
use crate::lexer::{Lexer, TokenKind};
use crate::scope::{ObjKind, Object, ScopeId, ScopeTree, SymbolId};
use crate::source::{FileSet, Pos, Position, SourceMap};
use calc_core::lang::keywords::KeywordId;
use calc_core::lang::operators::{self, OperatorId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
