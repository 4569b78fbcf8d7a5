#![forbid(unsafe_code)]
//! Calc Programming Language Front End
//!
//! Calc is a small S-expression language. This crate turns `.calc` sources into a position-annotated AST with
//! resolved lexical scopes, or into the full list of diagnostics when the sources are malformed.
//!
//! The syntax pipeline itself (source map, lexer, AST, scopes, parser, diagnostics) lives in `calc_syntax` and is
//! re-exported here; this crate adds the file and directory entry points.
//!
//! ## Panic Policy
//!
//! - **Production code**: malformed input is never a panic. Syntax problems become diagnostics and file-system
//!   problems become [`LoadError`]s.
//! - **True invariants**: handing a source map a position or offset it does not own is a caller bug and panics.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use calc::source::FileSet;
//!
//! let mut files = FileSet::new();
//! match calc::parse_dir(&mut files, Path::new("src")) {
//!     Ok(package) => println!("parsed {} files", package.files.len()),
//!     Err(calc::LoadError::Syntax(diags)) => eprint!("{}", calc::diagnostics::render(&diags, &files)),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

pub mod frontend;

pub use calc_core::lang;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::scope;
pub use frontend::source;

pub use calc_syntax::{parse_expression, parse_source};
pub use frontend::{LoadError, SOURCE_EXTENSION, parse_dir, parse_file};
