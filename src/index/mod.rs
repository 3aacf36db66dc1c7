// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index structures: what the indexer builds and the ranking engine reads.
//!
//! - **Inverted index**: token → documents, for AND keyword lookup
//! - **Prefix trie**: tokens by prefix, for autocomplete
//! - **Normalized fields**: lower-cased field copies for substring and fuzzy passes
//!
//! All three are built once and never mutated afterwards.

mod fields;
mod inverted;
mod trie;

pub use fields::NormalizedFields;
pub use inverted::InvertedIndex;
pub use trie::PrefixTrie;

use crate::types::DocId;

/// Everything the indexer produces for one catalog.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    pub inverted: InvertedIndex,
    pub trie: PrefixTrie,
    /// One entry per document, ascending by id.
    pub fields: Vec<NormalizedFields>,
}

impl SearchIndex {
    pub fn doc_count(&self) -> usize {
        self.fields.len()
    }

    /// Normalized fields of one document.
    pub fn fields_of(&self, id: DocId) -> Option<&NormalizedFields> {
        self.fields
            .binary_search_by_key(&id, |f| f.id)
            .ok()
            .map(|pos| &self.fields[pos])
    }
}
