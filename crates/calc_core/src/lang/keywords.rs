//! Define the reserved keyword vocabulary for the Calc language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) recording the canonical spelling and category of each.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Reserved words are recognised by the lexer after it has scanned an identifier-shaped run; they are never a
//!   separate scanning state.
//!
//! ## Examples
//! ```rust
//! use calc_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("var"), Some(KeywordId::Var));
//! assert_eq!(keywords::from_str("Var"), None);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    /// `decl`: top-level function declaration.
    Decl,
    /// `if`: conditional expression.
    If,
    /// `var`: variable declaration.
    Var,
}

/// High-level grouping for documentation and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Definition,
    ControlFlow,
    Binding,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub summary: &'static str,
}

/// Registry of all reserved keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(
        KeywordId::Decl,
        "decl",
        KeywordCategory::Definition,
        "declare a top-level function: (decl name (params) Type body)",
    ),
    info(
        KeywordId::If,
        "if",
        KeywordCategory::ControlFlow,
        "conditional: (if cond [Type] then [else])",
    ),
    info(
        KeywordId::Var,
        "var",
        KeywordCategory::Binding,
        "declare a variable: (var name Type) or (var (= name value))",
    ),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory, summary: &'static str) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_round_trip() {
        for k in KEYWORDS {
            assert_eq!(from_str(as_str(k.id)), Some(k.id));
        }
    }

    #[test]
    fn test_identifiers_are_not_keywords() {
        assert_eq!(from_str("x"), None);
        assert_eq!(from_str("Int"), None);
        assert_eq!(from_str("DECL"), None);
        assert_eq!(category(KeywordId::Var), KeywordCategory::Binding);
    }
}
