//! Prefix trie property tests.
//!
//! Autocomplete must return exactly the inserted tokens that start with the
//! prefix, each once, in lexicographic order.

use super::common::word_strategy;
use catalog_search::PrefixTrie;
use proptest::prelude::*;
use std::collections::BTreeSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: autocomplete equals a filtered, sorted scan of the tokens.
    #[test]
    fn prop_autocomplete_matches_scan(
        tokens in prop::collection::vec(word_strategy(), 0..30),
        prefix in "[a-z0-9]{0,3}",
    ) {
        let mut trie = PrefixTrie::new();
        for token in &tokens {
            trie.insert(token);
        }

        let expected: Vec<String> = tokens
            .iter()
            .filter(|t| t.starts_with(prefix.as_str()))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        prop_assert_eq!(trie.autocomplete(&prefix), expected);
    }

    /// Property: membership and size reflect distinct insertions.
    #[test]
    fn prop_len_counts_distinct_tokens(tokens in prop::collection::vec(word_strategy(), 0..30)) {
        let mut trie = PrefixTrie::new();
        for token in &tokens {
            trie.insert(token);
        }

        let distinct: BTreeSet<&String> = tokens.iter().collect();
        prop_assert_eq!(trie.len(), distinct.len());
        for token in &tokens {
            prop_assert!(trie.contains(token));
        }
    }
}
