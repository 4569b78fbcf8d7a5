//! Token types for the Calc lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for parentheses and the comma
//!
//! ## Notes
//! - Tokens borrow their lexeme from the source buffer; they are transient and never outlive a parse.
//! - Use `crate::token_helpers` for the classification predicates (`is_literal`, `is_operator`, ...).

use std::fmt;

use crate::source::Pos;
use calc_core::lang::keywords::{self, KeywordId};
use calc_core::lang::operators::{self, OperatorId};
use calc_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Special ==========
    Eof,
    Illegal,
    Comment,

    // ========== Identifiers and Literals ==========
    Ident,
    Integer,
    Float,

    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),
}

impl TokenKind {
    pub const LPAREN: TokenKind = TokenKind::Punctuation(PunctuationId::LParen);
    pub const RPAREN: TokenKind = TokenKind::Punctuation(PunctuationId::RParen);
    pub const COMMA: TokenKind = TokenKind::Punctuation(PunctuationId::Comma);

    /// Display name of the kind: the registry spelling for vocabulary tokens, a category name otherwise.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "Illegal",
            TokenKind::Comment => "Comment",
            TokenKind::Ident => "Identifier",
            TokenKind::Integer => "Integer",
            TokenKind::Float => "Float",
            TokenKind::Keyword(id) => keywords::as_str(id),
            TokenKind::Operator(id) => operators::as_str(id),
            TokenKind::Punctuation(id) => punctuation::as_str(id),
        }
    }

    /// Inverse of [`TokenKind::as_str`]. Unknown strings (including `""`) map to [`TokenKind::Illegal`].
    ///
    /// The lexer runs this over every identifier-shaped run it scans, which is how keywords are told apart from
    /// plain identifiers.
    pub fn lookup(s: &str) -> TokenKind {
        match s {
            "EOF" => TokenKind::Eof,
            "Illegal" => TokenKind::Illegal,
            "Comment" => TokenKind::Comment,
            "Identifier" => TokenKind::Ident,
            "Integer" => TokenKind::Integer,
            "Float" => TokenKind::Float,
            _ => {
                if let Some(id) = keywords::from_str(s) {
                    TokenKind::Keyword(id)
                } else if let Some(id) = operators::from_str(s) {
                    TokenKind::Operator(id)
                } else if let Some(id) = punctuation::from_str(s) {
                    TokenKind::Punctuation(id)
                } else {
                    TokenKind::Illegal
                }
            }
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scanned token: its kind, its raw lexeme and the absolute position of its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lit: &'a str,
    pub pos: Pos,
}

impl<'a> Token<'a> {
    /// Construct a new token.
    pub fn new(kind: TokenKind, lit: &'a str, pos: Pos) -> Self {
        Self { kind, lit, pos }
    }
}
