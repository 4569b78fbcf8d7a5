//! Number scanning for the Calc lexer
//!
//! A numeric literal is a maximal run of ASCII digits and `.` starting with a digit. The run is classified by the
//! number of dots it holds: none is an integer, one is a float, more is illegal.

use super::Lexer;
use super::tokens::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Scan the rest of a numeric run whose first digit (at `start`) was already consumed.
    pub(super) fn scan_number(&mut self, start: usize) -> Token<'a> {
        let mut dots = 0usize;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => {}
                '.' => dots += 1,
                _ => break,
            }
            self.advance();
        }

        let kind = match dots {
            0 => TokenKind::Integer,
            1 => TokenKind::Float,
            _ => TokenKind::Illegal,
        };
        self.token(kind, start)
    }
}
