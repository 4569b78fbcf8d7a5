//! Operator vocabulary.
//!
//! This module defines the canonical operator set: arithmetic, comparison and assignment operators, along with the
//! category that decides where the parser accepts them.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and matches whole spellings only (`"<="` is not `"<"`).
//! - Calc is prefix-notation, so there is no precedence table: an operator always heads its own parenthesised form.
//! - `-` is both the binary subtraction operator and the prefix negation operator; [`is_prefix`] marks it.
//!
//! ## Examples
//! ```rust
//! use calc_core::lang::operators::{self, OperatorCategory, OperatorId};
//!
//! assert_eq!(operators::from_str("%"), Some(OperatorId::Rem));
//! assert_eq!(operators::category(OperatorId::LtEq), OperatorCategory::Comparison);
//! ```

/// Broad grouping for operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Comparison,
    Assignment,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Quo,
    Rem,

    // Comparison
    Eql,
    Neq,
    Lst,
    LtEq,
    Gtt,
    GtEq,

    // Assignment
    Assign,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub category: OperatorCategory,
    /// Whether the operator may also appear in prefix (unary) position.
    pub prefix: bool,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Add, "+", OperatorCategory::Arithmetic, false),
    op(OperatorId::Sub, "-", OperatorCategory::Arithmetic, true),
    op(OperatorId::Mul, "*", OperatorCategory::Arithmetic, false),
    op(OperatorId::Quo, "/", OperatorCategory::Arithmetic, false),
    op(OperatorId::Rem, "%", OperatorCategory::Arithmetic, false),
    // Comparison
    op(OperatorId::Eql, "==", OperatorCategory::Comparison, false),
    op(OperatorId::Neq, "!=", OperatorCategory::Comparison, false),
    op(OperatorId::Lst, "<", OperatorCategory::Comparison, false),
    op(OperatorId::LtEq, "<=", OperatorCategory::Comparison, false),
    op(OperatorId::Gtt, ">", OperatorCategory::Comparison, false),
    op(OperatorId::GtEq, ">=", OperatorCategory::Comparison, false),
    // Assignment
    op(OperatorId::Assign, "=", OperatorCategory::Assignment, false),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Canonical spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Category of an operator.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Return `true` for operators that head a binary (n-ary) form: arithmetic and comparison.
pub fn is_binary(id: OperatorId) -> bool {
    matches!(
        category(id),
        OperatorCategory::Arithmetic | OperatorCategory::Comparison
    )
}

/// Return `true` for operators that may also appear in prefix (unary) position.
pub fn is_prefix(id: OperatorId) -> bool {
    info_for(id).prefix
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, category: OperatorCategory, prefix: bool) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        category,
        prefix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_operators() {
        assert!(is_binary(OperatorId::Add));
        assert!(is_binary(OperatorId::GtEq));
        assert!(!is_binary(OperatorId::Assign));
    }

    #[test]
    fn test_only_minus_is_prefix() {
        let prefix: Vec<_> = OPERATORS.iter().map(|o| o.id).filter(|id| is_prefix(*id)).collect();
        assert_eq!(prefix, vec![OperatorId::Sub]);
    }

    #[test]
    fn test_whole_spelling_lookup() {
        assert_eq!(from_str("<="), Some(OperatorId::LtEq));
        assert_eq!(from_str("<"), Some(OperatorId::Lst));
        assert_eq!(from_str("=<"), None);
        assert_eq!(from_str(""), None);
    }
}
