// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One-shot index construction.
//!
//! Walks the catalog once, in id order, and fills every structure the ranking
//! engine reads:
//!
//! 1. **Inverted index** - each indexed field's tokens → doc id
//! 2. **Prefix trie** - every token, for autocomplete
//! 3. **Field cache** - lower-cased fields and word lists per document
//!
//! There is no incremental update. A changed catalog means a new index.
//!
//! # Invariants
//!
//! - A doc id appears in the posting set of token T iff T is a token of that
//!   document's title, description or category.
//! - Every token in the inverted index is a trie member, and vice versa.
//! - `fields` is sorted by id and has exactly one entry per catalog document.

use super::Catalog;
use crate::index::{InvertedIndex, NormalizedFields, PrefixTrie, SearchIndex};
use std::time::Instant;
use tracing::info;

/// Builds a [`SearchIndex`] from a catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct Indexer;

impl Indexer {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, catalog: &Catalog) -> SearchIndex {
        let start = Instant::now();
        let mut inverted = InvertedIndex::new();
        let mut trie = PrefixTrie::new();
        let mut fields = Vec::with_capacity(catalog.len());

        for document in catalog.iter() {
            for text in document.indexed_fields() {
                inverted.add_document(text, document.id);
            }

            let normalized = NormalizedFields::from_document(document);
            for word in normalized.all_words() {
                trie.insert(word);
            }
            fields.push(normalized);
        }

        info!(
            target: "catalog_search::index",
            documents = fields.len(),
            vocabulary = inverted.vocabulary_len(),
            trie_nodes = trie.node_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "built search index"
        );

        SearchIndex {
            inverted,
            trie,
            fields,
        }
    }
}
