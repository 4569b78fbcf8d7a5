//! Lexer for the Calc programming language
//!
//! Produces one token at a time, on demand, as the parser pulls them:
//! - Whitespace (any Unicode space) is skipped
//! - `;` starts a comment running to the end of the line; comments produce no token
//! - Runs of digits and `.` are numeric literals, classified by how many dots they hold
//! - Identifier-shaped runs are looked up in the vocabulary registries (keyword or identifier)
//! - Everything else is single- or double-character punctuation/operators, or `Illegal`
//!
//! Every newline consumed is reported to the file's [`SourceMap`], so positions can later be resolved to rows and
//! columns.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `numbers` - Numeric literal scanning

mod numbers;
pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::source::SourceMap;
use calc_core::lang::operators::OperatorId;

/// On-demand scanner over one source buffer.
///
/// ## Notes
/// - The lexer owns the file's [`SourceMap`] while scanning; take it back with [`Lexer::into_source_map`].
/// - After end-of-input, [`Lexer::scan`] keeps returning the `Eof` token.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    /// Offset of the next unconsumed byte.
    offset: usize,
    map: SourceMap,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `source`, recording newlines into `map`.
    ///
    /// ## Panics
    /// - If `map` was created for a buffer of a different length.
    pub fn new(source: &'a str, map: SourceMap) -> Self {
        assert_eq!(map.size(), source.len(), "source map does not match the buffer");
        Self {
            source,
            chars: source.char_indices().peekable(),
            offset: 0,
            map,
        }
    }

    /// The file's source map, with every newline scanned so far recorded.
    pub fn source_map(&self) -> &SourceMap {
        &self.map
    }

    /// Give back the source map once scanning is done.
    pub fn into_source_map(self) -> SourceMap {
        self.map
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        let (idx, c) = self.chars.next()?;
        if c == '\n' {
            self.map.add_line(idx);
        }
        self.offset = idx + c.len_utf8();
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Skip from `;` up to (not including) the end of the line.
    fn skip_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token<'a> {
        Token::new(kind, &self.source[start..self.offset], self.map.pos(start))
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    /// Scan the next token.
    pub fn scan(&mut self) -> Token<'a> {
        loop {
            self.skip_whitespace();
            if self.peek() == Some(';') {
                self.skip_comment();
                continue;
            }
            break;
        }

        let start = self.offset;
        let Some(c) = self.advance() else {
            return self.token(TokenKind::Eof, start);
        };

        let kind = match c {
            // ASCII digits only; other Unicode digits are illegal
            '0'..='9' => return self.scan_number(start),
            _ if is_ident_start(c) => return self.scan_identifier(start),

            '(' => TokenKind::LPAREN,
            ')' => TokenKind::RPAREN,
            ',' => TokenKind::COMMA,
            '+' => TokenKind::Operator(OperatorId::Add),
            '-' => TokenKind::Operator(OperatorId::Sub),
            '*' => TokenKind::Operator(OperatorId::Mul),
            '/' => TokenKind::Operator(OperatorId::Quo),
            '%' => TokenKind::Operator(OperatorId::Rem),
            '=' => self.operator(OperatorId::Assign, OperatorId::Eql),
            '<' => self.operator(OperatorId::Lst, OperatorId::LtEq),
            '>' => self.operator(OperatorId::Gtt, OperatorId::GtEq),
            '!' if self.match_char('=') => TokenKind::Operator(OperatorId::Neq),
            _ => TokenKind::Illegal,
        };

        self.token(kind, start)
    }

    /// Pick the `=`-suffixed compound operator if the next character is `=`, else the simple one.
    fn operator(&mut self, simple: OperatorId, with_eq: OperatorId) -> TokenKind {
        if self.match_char('=') {
            TokenKind::Operator(with_eq)
        } else {
            TokenKind::Operator(simple)
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) -> Token<'a> {
        while self.peek().is_some_and(is_ident_continue) {
            self.advance();
        }

        let spelling = &self.source[start..self.offset];
        let kind = match TokenKind::lookup(spelling) {
            kind @ TokenKind::Keyword(_) => kind,
            _ => TokenKind::Ident,
        };
        self.token(kind, start)
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a whole, unnamed source string.
///
/// The returned tokens always end with exactly one `Eof` token. Positions start at 1.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(source, SourceMap::new("", 1, source));
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.scan();
        tokens.push(tok);
        if tok.kind == TokenKind::Eof {
            return tokens;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
