use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use calc_core::lang::keywords;
use calc_core::lang::operators;
use calc_core::lang::punctuation;

/// Every spelling resolves back to its own id, renders back to itself, and belongs to one entry only.
fn check_registry<Id>(
    registry: &str,
    entries: impl IntoIterator<Item = (Id, &'static str)>,
    from_str: fn(&str) -> Option<Id>,
    as_str: fn(Id) -> &'static str,
) where
    Id: Copy + Debug + Eq + Hash,
{
    let mut seen: HashMap<&'static str, Id> = HashMap::new();
    for (id, spelling) in entries {
        assert_eq!(from_str(spelling), Some(id), "{registry}: {spelling:?} does not resolve");
        assert_eq!(as_str(id), spelling, "{registry}: {id:?} renders differently");
        if let Some(prev) = seen.insert(spelling, id) {
            panic!("{registry}: {spelling:?} is spelled by both {prev:?} and {id:?}");
        }
    }
}

#[test]
fn keyword_registry_is_consistent() {
    check_registry(
        "keywords",
        keywords::KEYWORDS.iter().map(|k| (k.id, k.canonical)),
        keywords::from_str,
        keywords::as_str,
    );
}

#[test]
fn operator_registry_is_consistent() {
    check_registry(
        "operators",
        operators::OPERATORS.iter().map(|o| (o.id, o.spelling)),
        operators::from_str,
        operators::as_str,
    );
}

#[test]
fn punctuation_registry_is_consistent() {
    check_registry(
        "punctuation",
        punctuation::PUNCTUATION.iter().map(|p| (p.id, p.canonical)),
        punctuation::from_str,
        punctuation::as_str,
    );
}

/// A spelling must belong to exactly one registry, otherwise `TokenKind::lookup` would be ambiguous.
#[test]
fn spellings_disjoint_across_registries() {
    let mut owners: HashMap<&'static str, &'static str> = HashMap::new();

    let all = keywords::KEYWORDS
        .iter()
        .map(|k| (k.canonical, "keyword"))
        .chain(operators::OPERATORS.iter().map(|o| (o.spelling, "operator")))
        .chain(punctuation::PUNCTUATION.iter().map(|p| (p.canonical, "punctuation")));

    for (spelling, registry) in all {
        if let Some(prev) = owners.insert(spelling, registry) {
            panic!("spelling {spelling:?} is registered as both {prev} and {registry}");
        }
    }
}

/// Keyword spellings must be identifier-shaped so the lexer can find them in identifier runs.
#[test]
fn keywords_are_identifier_shaped() {
    for info in keywords::KEYWORDS {
        let mut chars = info.canonical.chars();
        let first = chars.next().expect("empty keyword spelling");
        assert!(first.is_ascii_alphabetic() || first == '_', "{:?}", info.canonical);
        assert!(chars.all(|c| c.is_ascii_alphanumeric() || c == '_'), "{:?}", info.canonical);
    }
}
