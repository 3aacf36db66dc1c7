// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-strategy lookups.
//!
//! Each method answers "which documents match" for one strategy and nothing
//! more: no scores, no ranking. The ranking engine scores with the same
//! predicates, and analytics counts with these directly. Results are in
//! ascending id order.

use crate::build::Catalog;
use crate::index::{NormalizedFields, SearchIndex};
use crate::scoring::{fuzzy_matches, phrase_matches};
use crate::types::Document;
use crate::util::{contains, tokenize_unique};

/// Borrowed view over a catalog and its index.
#[derive(Debug, Clone, Copy)]
pub struct SearchCore<'a> {
    catalog: &'a Catalog,
    index: &'a SearchIndex,
}

impl<'a> SearchCore<'a> {
    pub fn new(catalog: &'a Catalog, index: &'a SearchIndex) -> Self {
        Self { catalog, index }
    }

    /// Documents holding every query token (AND).
    pub fn keyword_search(&self, query: &str) -> Vec<&'a Document> {
        self.index
            .inverted
            .search(query)
            .into_iter()
            .filter_map(|id| self.catalog.get(id))
            .collect()
    }

    /// Documents whose title or description contains `phrase`, case-insensitive.
    ///
    /// A blank phrase matches nothing.
    pub fn phrase_search(&self, phrase: &str) -> Vec<&'a Document> {
        if phrase.trim().is_empty() {
            return Vec::new();
        }
        let phrase = phrase.to_lowercase();
        self.documents_where(|fields| {
            contains(&fields.title, &phrase) || contains(&fields.description, &phrase)
        })
    }

    /// Documents containing at least one of `phrases` (already lower-cased).
    pub fn any_phrase_search(&self, phrases: &[String]) -> Vec<&'a Document> {
        self.documents_where(|fields| phrase_matches(phrases, fields))
    }

    /// Documents with a title or description word within `max_distance`
    /// edits of some query token.
    pub fn fuzzy_search(&self, query: &str, max_distance: usize) -> Vec<&'a Document> {
        let tokens = tokenize_unique(query);
        if tokens.is_empty() {
            return Vec::new();
        }
        self.documents_where(|fields| fuzzy_matches(&tokens, fields, max_distance))
    }

    /// Trie completions of the lower-cased prefix.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        self.index.trie.autocomplete(&prefix.to_lowercase())
    }

    fn documents_where<F>(&self, predicate: F) -> Vec<&'a Document>
    where
        F: Fn(&NormalizedFields) -> bool,
    {
        self.index
            .fields
            .iter()
            .filter(|fields| predicate(fields))
            .filter_map(|fields| self.catalog.get(fields.id))
            .collect()
    }
}
