//! Calc front end
//!
//! This module contains all front-end components:
//! - `source`: absolute positions, per-file line tables, file sets
//! - `lexer`: tokenization of source code
//! - `ast`: abstract syntax tree definitions
//! - `scope`: scope tree and symbols
//! - `parser`: parsing source into the AST while building scopes
//! - `diagnostics`: syntax diagnostics and their rendering
//! - `loader`: `.calc` file and directory entry points

// Syntax components are provided by the shared calc_syntax crate.
pub use calc_syntax::{ast, diagnostics, lexer, parser, scope, source, token_helpers};

// File-system pieces remain local.
pub mod error;
pub mod loader;

pub use error::LoadError;
pub use loader::{SOURCE_EXTENSION, parse_dir, parse_file};
