//! Autocomplete tests: trie completions first, near-miss prefixes second.

use super::common::{gadget_catalog, make_doc, make_product};
use catalog_search::{Catalog, RankingConfig, RankingEngine};

#[test]
fn test_prefix_completes_from_trie() {
    let catalog = gadget_catalog();
    let engine = RankingEngine::with_defaults(&catalog);
    let suggestions = engine.search_suggestions("app");

    assert!(!suggestions.is_empty());
    assert!(suggestions.iter().all(|s| s.starts_with("app") || s.contains("app")));
    assert_eq!(suggestions, vec!["apple"]);
}

#[test]
fn test_prefix_is_case_insensitive() {
    let catalog = gadget_catalog();
    let engine = RankingEngine::with_defaults(&catalog);
    assert_eq!(engine.search_suggestions("MacB"), vec!["macbook"]);
}

#[test]
fn test_typo_in_prefix_falls_back_to_fuzzy() {
    let catalog = gadget_catalog();
    let engine = RankingEngine::with_defaults(&catalog);

    // "iphn" is one substitution from "ipho"
    assert_eq!(engine.search_suggestions("iphn"), vec!["iphone"]);
}

#[test]
fn test_trie_results_come_first_then_document_order() {
    let catalog = gadget_catalog();
    let engine = RankingEngine::with_defaults(&catalog);
    let suggestions = engine.search_suggestions("s");

    // Any one-char prefix is within one edit of every word's first char, so
    // the fuzzy pass fills the rest in document order until the cap.
    assert_eq!(
        suggestions,
        vec![
            "s23",
            "samsung",
            "smartphone",
            "iphone",
            "14",
            "apple",
            "with",
            "advanced",
            "camera",
            "electronics",
        ]
    );
}

#[test]
fn test_no_duplicates_and_capped() {
    let catalog: Catalog = (1..=30)
        .map(|id| make_doc(id, &format!("Widget w{id:02}")))
        .collect();
    let engine = RankingEngine::with_defaults(&catalog);
    let suggestions = engine.search_suggestions("w");

    assert_eq!(suggestions.len(), 10);
    let mut unique = suggestions.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), suggestions.len());
}

#[test]
fn test_enough_trie_hits_skip_fuzzy() {
    let catalog: Catalog = vec![
        make_product(1, "cab cabin cabinet", "cable cables", ""),
        make_product(2, "lab", "", ""),
    ]
    .into_iter()
    .collect();

    let engine = RankingEngine::with_defaults(&catalog);
    let suggestions = engine.search_suggestions("cab");
    assert_eq!(suggestions, vec!["cab", "cabin", "cabinet", "cable", "cables"]);

    let config = RankingConfig {
        min_trie_suggestions: 6,
        ..RankingConfig::default()
    };
    let engine = RankingEngine::new(&catalog, config);
    assert!(engine.search_suggestions("cab").contains(&"lab".to_string()));
}

#[test]
fn test_cyrillic_prefix() {
    let catalog: Catalog = vec![
        make_product(1, "Смартфон Samsung", "", ""),
        make_product(2, "Смарт-часы", "", ""),
    ]
    .into_iter()
    .collect();
    let engine = RankingEngine::with_defaults(&catalog);

    assert_eq!(engine.search_suggestions("СМАР"), vec!["смарт", "смартфон"]);
}

#[test]
fn test_blank_prefix_returns_nothing() {
    let catalog = gadget_catalog();
    let engine = RankingEngine::with_defaults(&catalog);

    assert!(engine.search_suggestions("").is_empty());
    assert!(engine.search_suggestions("   ").is_empty());
}

#[test]
fn test_unknown_prefix_returns_nothing() {
    let catalog = gadget_catalog();
    let engine = RankingEngine::with_defaults(&catalog);
    assert!(engine.search_suggestions("zzzz").is_empty());
}
