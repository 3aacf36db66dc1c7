// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking engine: conditional passes into one score per document.
//!
//! # Passes
//!
//! | Pass    | Runs when                    | Contribution per document             |
//! |---------|------------------------------|---------------------------------------|
//! | Phrase  | `intent.exact_phrase`        | phrase boost, once if any phrase hits |
//! | Keyword | `intent.has_keywords`        | keyword relevance × keyword weight    |
//! | Fuzzy   | `intent.allows_fuzzy_search` | fuzzy relevance × fuzzy penalty       |
//! | Exact   | always                       | whole-query substring boosts          |
//!
//! Each pass adds into one accumulator keyed by doc id. Passes never read each
//! other's output, so their order only affects float rounding, and that order
//! is fixed. Keyword and fuzzy passes see every query token, repeats
//! included.
//!
//! # Concurrency
//!
//! The engine is immutable after construction and every query allocates its
//! own accumulator, so `&RankingEngine` can be shared across threads freely.
//! With the `parallel` feature the fuzzy and exact passes, which visit every
//! document, fan out over rayon. Both collect `(id, score)` pairs in id order
//! and merge sequentially, so results are identical either way.

use super::analytics::SearchAnalytics;
use super::analyzer::{quoted_phrases, QueryAnalyzer, QueryIntent};
use super::core::SearchCore;
use crate::build::{Catalog, Indexer};
use crate::config::RankingConfig;
use crate::error::Result;
use crate::fuzzy::levenshtein_within;
use crate::index::{NormalizedFields, SearchIndex};
use crate::scoring::ranking::rank_scores;
use crate::scoring::{exact_match_score, fuzzy_relevance, keyword_relevance, phrase_matches};
use crate::types::{DocId, ScoredDocument};
use crate::util::tokenize;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

type Scores = BTreeMap<DocId, f64>;

/// Multi-strategy search over one catalog.
#[derive(Debug, Clone)]
pub struct RankingEngine<'a> {
    catalog: &'a Catalog,
    index: SearchIndex,
    config: RankingConfig,
}

impl<'a> RankingEngine<'a> {
    /// Index `catalog` and build an engine over it.
    ///
    /// `config` is taken as is. Use [`RankingEngine::try_new`] for a config
    /// assembled from untrusted values.
    pub fn new(catalog: &'a Catalog, config: RankingConfig) -> Self {
        let index = Indexer::new().build(catalog);
        Self::from_index(catalog, index, config)
    }

    /// Like [`RankingEngine::new`], but rejects a config that fails
    /// [`RankingConfig::validate`].
    pub fn try_new(catalog: &'a Catalog, config: RankingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(catalog, config))
    }

    /// Wrap an index already built from `catalog`. `config` is not validated.
    pub fn from_index(catalog: &'a Catalog, index: SearchIndex, config: RankingConfig) -> Self {
        Self {
            catalog,
            index,
            config,
        }
    }

    pub fn with_defaults(catalog: &'a Catalog) -> Self {
        Self::new(catalog, RankingConfig::default())
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Single-strategy lookups over the same catalog and index.
    pub fn core(&self) -> SearchCore<'_> {
        SearchCore::new(self.catalog, &self.index)
    }

    pub fn analyze(&self, query: &str) -> QueryIntent {
        QueryAnalyzer::new(&self.config.stop_words).analyze(query)
    }

    // =========================================================================
    // RANKED SEARCH
    // =========================================================================

    /// Rank the catalog against `query`, best first, at most `max_results`.
    ///
    /// A blank query returns nothing. Equal scores come back in id order.
    pub fn smart_search(&self, query: &str) -> Vec<ScoredDocument<'a>> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let intent = self.analyze(query);
        let tokens = tokenize(query);
        let mut scores = Scores::new();

        if intent.exact_phrase {
            self.phrase_pass(query, &mut scores);
        }
        if intent.has_keywords {
            self.keyword_pass(query, &tokens, &mut scores);
        }
        if intent.allows_fuzzy_search {
            self.fuzzy_pass(&tokens, &mut scores);
        }
        self.exact_pass(&query.to_lowercase(), &mut scores);

        let candidates = scores.len();
        let catalog = self.catalog;
        let results: Vec<ScoredDocument<'a>> = rank_scores(scores, self.config.max_results)
            .into_iter()
            .filter_map(|(id, score)| catalog.get(id).map(|doc| ScoredDocument::new(doc, score)))
            .collect();

        debug!(
            target: "catalog_search::search",
            query,
            intent = %intent,
            candidates,
            returned = results.len(),
            "smart search"
        );
        results
    }

    fn phrase_pass(&self, query: &str, scores: &mut Scores) {
        let phrases = quoted_phrases(query);
        if phrases.is_empty() {
            return;
        }
        let boost = self.config.phrase_match_boost;
        let hits = self.per_document(|fields| phrase_matches(&phrases, fields).then_some(boost));
        merge(scores, hits);
    }

    fn keyword_pass(&self, query: &str, tokens: &[String], scores: &mut Scores) {
        let weight = self.config.keyword_weight;
        for id in self.index.inverted.search(query) {
            if let Some(fields) = self.index.fields_of(id) {
                *scores.entry(id).or_insert(0.0) += keyword_relevance(tokens, fields) * weight;
            }
        }
    }

    fn fuzzy_pass(&self, tokens: &[String], scores: &mut Scores) {
        if tokens.is_empty() {
            return;
        }
        let max_distance = self.config.max_fuzzy_distance;
        let penalty = self.config.fuzzy_match_penalty;
        let hits = self.per_document(|fields| {
            fuzzy_relevance(tokens, fields, max_distance).map(|relevance| relevance * penalty)
        });
        merge(scores, hits);
    }

    fn exact_pass(&self, query_lower: &str, scores: &mut Scores) {
        let boost = self.config.exact_match_boost;
        let hits = self.per_document(|fields| {
            let score = exact_match_score(query_lower, fields, boost);
            (score > 0.0).then_some(score)
        });
        merge(scores, hits);
    }

    /// Score every document; `None` means no contribution. Id order.
    #[cfg(feature = "parallel")]
    fn per_document<F>(&self, score: F) -> Vec<(DocId, f64)>
    where
        F: Fn(&NormalizedFields) -> Option<f64> + Sync + Send,
    {
        self.index
            .fields
            .par_iter()
            .filter_map(|fields| score(fields).map(|s| (fields.id, s)))
            .collect()
    }

    /// Score every document; `None` means no contribution. Id order.
    #[cfg(not(feature = "parallel"))]
    fn per_document<F>(&self, score: F) -> Vec<(DocId, f64)>
    where
        F: Fn(&NormalizedFields) -> Option<f64>,
    {
        self.index
            .fields
            .iter()
            .filter_map(|fields| score(fields).map(|s| (fields.id, s)))
            .collect()
    }

    // =========================================================================
    // SUGGESTIONS
    // =========================================================================

    /// Autocomplete suggestions for a typed prefix, at most `max_suggestions`.
    ///
    /// Trie completions come first. When there are fewer than
    /// `min_trie_suggestions` of them, words whose leading chars are within
    /// `suggestion_fuzzy_distance` of the prefix follow, in document order.
    /// No duplicates.
    pub fn search_suggestions(&self, prefix: &str) -> Vec<String> {
        if prefix.trim().is_empty() {
            return Vec::new();
        }

        let prefix = prefix.to_lowercase();
        let limit = self.config.max_suggestions;
        let completions = self.index.trie.autocomplete(&prefix);
        let use_fuzzy = completions.len() < self.config.min_trie_suggestions;

        let mut seen = HashSet::new();
        let mut suggestions = Vec::new();
        for word in completions {
            if suggestions.len() == limit {
                return suggestions;
            }
            if seen.insert(word.clone()) {
                suggestions.push(word);
            }
        }

        if use_fuzzy {
            let prefix_chars = prefix.chars().count();
            let max_distance = self.config.suggestion_fuzzy_distance;
            'documents: for fields in &self.index.fields {
                for word in fields.all_words() {
                    if suggestions.len() == limit {
                        break 'documents;
                    }
                    if word.chars().count() < prefix_chars || seen.contains(word) {
                        continue;
                    }
                    let head: String = word.chars().take(prefix_chars).collect();
                    if levenshtein_within(&prefix, &head, max_distance) {
                        seen.insert(word.to_string());
                        suggestions.push(word.to_string());
                    }
                }
            }
        }

        debug!(
            target: "catalog_search::suggest",
            prefix = %prefix,
            fuzzy = use_fuzzy,
            returned = suggestions.len(),
            "suggestions"
        );
        suggestions
    }

    // =========================================================================
    // ANALYTICS
    // =========================================================================

    /// Per-strategy match counts for `query`.
    ///
    /// The phrase count uses the quoted phrases when there are any, and the
    /// whole query as one phrase otherwise.
    pub fn search_analytics(&self, query: &str) -> SearchAnalytics {
        let intent = self.analyze(query);
        let core = self.core();

        let keyword_matches = core.keyword_search(query).len();
        let phrases = quoted_phrases(query);
        let phrase_matches = if phrases.is_empty() {
            core.phrase_search(query).len()
        } else {
            core.any_phrase_search(&phrases).len()
        };
        let fuzzy_matches = core.fuzzy_search(query, self.config.max_fuzzy_distance).len();
        let suggestions = self.search_suggestions(query).len();

        SearchAnalytics::new(intent, keyword_matches, phrase_matches, fuzzy_matches, suggestions)
    }
}

fn merge(scores: &mut Scores, hits: Vec<(DocId, f64)>) {
    for (id, score) in hits {
        *scores.entry(id).or_insert(0.0) += score;
    }
}
