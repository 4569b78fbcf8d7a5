//! Calc language vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`, `PunctuationId`) and look up spellings and metadata
//! via the registry tables instead of comparing strings.
//!
//! ## Examples
//! ```rust
//! use calc_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("decl"), Some(KeywordId::Decl));
//! assert_eq!(keywords::as_str(KeywordId::If), "if");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
