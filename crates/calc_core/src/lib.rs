//! Canonical language vocabulary for the Calc front end.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that name every reserved word,
//! operator and punctuation token of the language, so the lexer, the parser and any downstream tooling agree on
//! spellings without passing strings around.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no AST types.
//! - Syntax rules (what may appear where) belong to `calc_syntax`; the registries only describe spellings and
//!   coarse categories.

pub mod lang;
