//! Inverted index property tests.
//!
//! These tests verify inverted index invariants:
//! - Every token of every document retrieves that document
//! - Multi-token search is exactly the intersection of single-token searches
//! - Postings point only at documents that contain the token

use super::common::{catalog_strategy, word_strategy};
use catalog_search::{tokenize, Indexer};
use proptest::prelude::*;
use std::collections::BTreeSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: a document is found by each of its own tokens.
    #[test]
    fn prop_every_token_retrieves_its_document(catalog in catalog_strategy()) {
        let index = Indexer::new().build(&catalog);

        for doc in catalog.iter() {
            for field in doc.indexed_fields() {
                for token in tokenize(field) {
                    prop_assert!(
                        index.inverted.search(&token).contains(&doc.id),
                        "token {:?} does not retrieve doc {}", token, doc.id
                    );
                }
            }
        }
    }

    /// Property: postings are sound, no document listed without the token.
    #[test]
    fn prop_postings_are_sound(catalog in catalog_strategy()) {
        let index = Indexer::new().build(&catalog);

        for (token, postings) in index.inverted.iter() {
            for id in postings {
                let doc = catalog.get(*id).expect("posting for unknown doc");
                let has_token = doc
                    .indexed_fields()
                    .iter()
                    .any(|field| tokenize(field).iter().any(|t| t == token));
                prop_assert!(has_token, "doc {} listed under {:?}", id, token);
            }
        }
    }

    /// Property: AND search equals the intersection of per-token searches.
    #[test]
    fn prop_search_is_intersection(
        catalog in catalog_strategy(),
        words in prop::collection::vec(word_strategy(), 1..4),
    ) {
        let index = Indexer::new().build(&catalog);
        let query = words.join(" ");

        let mut expected: Option<BTreeSet<_>> = None;
        for word in &words {
            let hits = index.inverted.search(word);
            expected = Some(match expected {
                None => hits,
                Some(acc) => acc.intersection(&hits).copied().collect(),
            });
        }

        prop_assert_eq!(index.inverted.search(&query), expected.unwrap_or_default());
    }

    /// Property: searching is case-insensitive.
    #[test]
    fn prop_search_ignores_case(catalog in catalog_strategy(), word in word_strategy()) {
        let index = Indexer::new().build(&catalog);
        prop_assert_eq!(
            index.inverted.search(&word),
            index.inverted.search(&word.to_uppercase())
        );
    }
}

#[test]
fn test_partial_overlap_intersection() {
    use catalog_search::{DocId, InvertedIndex};

    let mut index = InvertedIndex::new();
    index.add_document("red apple", DocId(1));
    index.add_document("red cherry", DocId(2));
    index.add_document("green apple", DocId(3));

    let hits: Vec<u32> = index.search("red apple").into_iter().map(DocId::get).collect();
    assert_eq!(hits, vec![1]);
    assert!(index.search("green cherry").is_empty());
}
