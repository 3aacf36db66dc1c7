//! Shared test utilities and fixtures.

#![allow(dead_code)]

use catalog_search::{Catalog, DocId, Document, ScoredDocument};
use proptest::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

// Re-export canonical fixtures from catalog_search::testing
pub use catalog_search::testing::{gadget_catalog, make_doc, make_product, repeated_catalog, two_phone_catalog};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Generate random word-like strings.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{2,8}").unwrap()
}

/// Generate random field text (multiple words).
pub fn text_strategy(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..max_words).prop_map(|words| words.join(" "))
}

/// Generate a catalog of 1-8 documents with ids `1..=n`.
pub fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec((text_strategy(4), text_strategy(10), text_strategy(2)), 1..8).prop_map(
        |fields| {
            fields
                .into_iter()
                .enumerate()
                .map(|(i, (title, description, category))| {
                    Document::new(i as u32 + 1, title, description, category)
                })
                .collect()
        },
    )
}

/// Generate free-text queries, including blanks, quotes and punctuation.
pub fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        word_strategy(),
        text_strategy(5),
        word_strategy().prop_map(|w| format!("\"{}\"", w)),
        prop::string::string_regex("[a-z \"!?.,]{0,20}").unwrap(),
    ]
}

// ============================================================================
// HELPERS
// ============================================================================

/// Ids of ranked results, in rank order.
pub fn ids(results: &[ScoredDocument<'_>]) -> Vec<u32> {
    results.iter().map(|r| r.id().get()).collect()
}

pub fn doc_ids(docs: &[&Document]) -> Vec<u32> {
    docs.iter().map(|d| d.id.get()).collect()
}

pub fn doc_id(id: u32) -> DocId {
    DocId(id)
}

/// Write `contents` to a temp file that lives as long as the handle.
pub fn temp_json(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
