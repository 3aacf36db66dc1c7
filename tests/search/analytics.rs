//! Analytics tests: per-strategy counts and the strategy label.

use super::common::{doc_ids, gadget_catalog, two_phone_catalog};
use catalog_search::{QueryType, RankingEngine, SearchStrategy};

#[test]
fn test_single_keyword_analytics() {
    let catalog = gadget_catalog();
    let engine = RankingEngine::with_defaults(&catalog);
    let analytics = engine.search_analytics("iPhone");

    assert_eq!(analytics.query_intent().query_type, QueryType::SingleKeyword);
    assert_eq!(analytics.strategy(), SearchStrategy::SingleKeywordFuzzy);
    assert_eq!(analytics.keyword_matches(), 1);
    assert_eq!(analytics.phrase_matches(), 1);
    assert_eq!(analytics.fuzzy_matches(), 1);
    assert_eq!(analytics.total_matches(), 3);
}

#[test]
fn test_phrase_analytics_counts_quoted_phrase() {
    let catalog = two_phone_catalog();
    let engine = RankingEngine::with_defaults(&catalog);
    let analytics = engine.search_analytics("\"great camera\"");

    assert_eq!(analytics.strategy(), SearchStrategy::PhraseFocused);
    assert_eq!(analytics.phrase_matches(), 1);
    assert_eq!(analytics.keyword_matches(), 1);
}

#[test]
fn test_multi_keyword_is_hybrid() {
    let catalog = gadget_catalog();
    let engine = RankingEngine::with_defaults(&catalog);
    let analytics = engine.search_analytics("apple pro");

    assert_eq!(analytics.strategy(), SearchStrategy::MultiAlgorithmHybrid);
    assert_eq!(analytics.keyword_matches(), 3);
    assert_eq!(
        analytics.total_matches(),
        analytics.keyword_matches() + analytics.phrase_matches() + analytics.fuzzy_matches()
    );
}

#[test]
fn test_counts_agree_with_core_lookups() {
    let catalog = gadget_catalog();
    let engine = RankingEngine::with_defaults(&catalog);
    let core = engine.core();
    let query = "smartphone";
    let analytics = engine.search_analytics(query);

    assert_eq!(analytics.keyword_matches(), core.keyword_search(query).len());
    assert_eq!(analytics.phrase_matches(), core.phrase_search(query).len());
    assert_eq!(
        analytics.fuzzy_matches(),
        core.fuzzy_search(query, engine.config().max_fuzzy_distance).len()
    );
    assert_eq!(analytics.suggestions(), engine.search_suggestions(query).len());
    assert_eq!(doc_ids(&core.keyword_search(query)), vec![1, 2]);
}

#[test]
fn test_blank_query_analytics_is_basic_and_empty() {
    let catalog = gadget_catalog();
    let engine = RankingEngine::with_defaults(&catalog);
    let analytics = engine.search_analytics("  ");

    assert_eq!(analytics.strategy(), SearchStrategy::Basic);
    assert_eq!(analytics.total_matches(), 0);
    assert_eq!(analytics.suggestions(), 0);
}

#[test]
fn test_report_mentions_every_count() {
    let catalog = gadget_catalog();
    let engine = RankingEngine::with_defaults(&catalog);
    let report = engine.search_analytics("iPhone").performance_report();

    for line in [
        "Search Strategy: Single keyword + fuzzy search",
        "Keyword matches: 1",
        "Phrase matches: 1",
        "Fuzzy matches: 1",
        "Total matches: 3",
        "Autocomplete suggestions: 1",
    ] {
        assert!(report.contains(line), "missing {line:?} in\n{report}");
    }
}
