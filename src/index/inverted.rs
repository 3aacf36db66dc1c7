// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index: token → set of documents.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **COMPLETE**: a document id is in the posting set of token `T` iff `T`
//!    occurs at least once in at least one text added for that document.
//! 2. **NON_EMPTY**: every token in the map has at least one posting.
//! 3. **UNIQUE**: a posting set never holds the same id twice (it is a set).
//!
//! Posting sets are `BTreeSet`s so lookups come back in ascending id order.
//! Callers don't rely on that order, but tests and logs stay reproducible.

use crate::types::DocId;
use crate::util::tokenize;
use std::collections::{BTreeSet, HashMap};

/// Token to posting-set map with AND lookup.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    terms: HashMap<String, BTreeSet<DocId>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `text` and add `doc_id` to the posting set of every token.
    ///
    /// Call once per indexed field; repeated calls for the same document
    /// accumulate.
    pub fn add_document(&mut self, text: &str, doc_id: DocId) {
        for word in tokenize(text) {
            self.terms.entry(word).or_default().insert(doc_id);
        }
    }

    /// Documents containing *every* token of `query`.
    ///
    /// A query with no tokens matches nothing, and so does a query containing
    /// any token the index has never seen.
    pub fn search(&self, query: &str) -> BTreeSet<DocId> {
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return BTreeSet::new();
        }

        let mut postings: Vec<&BTreeSet<DocId>> = Vec::with_capacity(tokens.len());
        for token in &tokens {
            match self.terms.get(token) {
                Some(set) => postings.push(set),
                // If any word is not found, no intersection is possible
                None => return BTreeSet::new(),
            }
        }

        // Intersect smallest-first so the working set only shrinks
        postings.sort_by_key(|set| set.len());
        let mut result = postings[0].clone();
        for set in &postings[1..] {
            result.retain(|id| set.contains(id));
            if result.is_empty() {
                break;
            }
        }
        result
    }

    /// Posting set for an exact (already lower-cased) token.
    pub fn postings(&self, token: &str) -> Option<&BTreeSet<DocId>> {
        self.terms.get(token)
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.terms.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn vocabulary_len(&self) -> usize {
        self.terms.len()
    }

    /// Iterate `(token, postings)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<DocId>)> {
        self.terms.iter().map(|(term, set)| (term.as_str(), set))
    }
}
