//! Small helper APIs for working with `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy to work with
//! ID-based tokens.

use crate::lexer::TokenKind;
use calc_core::lang::keywords::KeywordId;
use calc_core::lang::operators;
use calc_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return `true` for identifiers and numeric literals.
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::Integer | TokenKind::Float)
    }

    /// Return `true` for any operator token.
    pub fn is_operator(&self) -> bool {
        matches!(self, TokenKind::Operator(_))
    }

    /// Return `true` for operators that head a binary form (arithmetic and comparison).
    pub fn is_binary_operator(&self) -> bool {
        matches!(self, TokenKind::Operator(id) if operators::is_binary(*id))
    }

    /// Return `true` for every kind except [`TokenKind::Illegal`].
    pub fn is_valid(&self) -> bool {
        !matches!(self, TokenKind::Illegal)
    }

    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is any keyword, or the given keyword when `id` is set.
    pub fn is_keyword(&self, id: Option<KeywordId>) -> bool {
        match (self, id) {
            (TokenKind::Keyword(_), None) => true,
            (TokenKind::Keyword(k), Some(id)) => *k == id,
            _ => false,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::lang::operators::OperatorId;

    #[test]
    fn test_is_literal() {
        let cases = [
            (TokenKind::Operator(OperatorId::Add), false),
            (TokenKind::Operator(OperatorId::Rem), false),
            (TokenKind::Eof, false),
            (TokenKind::Integer, true),
            (TokenKind::Float, true),
            (TokenKind::Ident, true),
            (TokenKind::Comment, false),
        ];
        for (kind, expected) in cases {
            assert_eq!(kind.is_literal(), expected, "{kind:?}");
        }
    }

    #[test]
    fn test_is_operator() {
        let cases = [
            (TokenKind::Operator(OperatorId::Add), true),
            (TokenKind::Operator(OperatorId::Rem), true),
            (TokenKind::Operator(OperatorId::Assign), true),
            (TokenKind::Eof, false),
            (TokenKind::Integer, false),
            (TokenKind::Comment, false),
        ];
        for (kind, expected) in cases {
            assert_eq!(kind.is_operator(), expected, "{kind:?}");
        }
        assert!(!TokenKind::Operator(OperatorId::Assign).is_binary_operator());
        assert!(TokenKind::Operator(OperatorId::Neq).is_binary_operator());
    }

    #[test]
    fn test_is_valid() {
        assert!(TokenKind::Operator(OperatorId::Add).is_valid());
        assert!(TokenKind::Eof.is_valid());
        assert!(TokenKind::Comment.is_valid());
        assert!(TokenKind::Integer.is_valid());
        assert!(!TokenKind::Illegal.is_valid());
        assert!(!TokenKind::lookup("not a token").is_valid());
    }

    #[test]
    fn test_keyword_helpers() {
        let kind = TokenKind::Keyword(KeywordId::Var);
        assert!(kind.is_keyword(None));
        assert!(kind.is_keyword(Some(KeywordId::Var)));
        assert!(!kind.is_keyword(Some(KeywordId::If)));
        assert!(!TokenKind::Ident.is_keyword(None));
        assert_eq!(kind.keyword_id(), Some(KeywordId::Var));
    }
}
