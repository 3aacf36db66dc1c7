// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking configuration: every tunable knob in one immutable value.
//!
//! The defaults are the values the ranking was tuned with. Changing them
//! changes which documents win, so they are named here rather than scattered
//! through the passes as literals. The engine takes a `RankingConfig` at
//! construction and never mutates it.
//!
//! Field weights inside a pass (title 2.0 / description 1.0 / category 0.5)
//! and the match-type thresholds are not configurable; they live in
//! [`crate::scoring`] as constants.
//!
//! Overrides load from JSON, camelCase keys, every key optional:
//!
//! ```json
//! { "maxResults": 50, "fuzzyMatchPenalty": 0.25, "stopWords": ["the", "a"] }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

/// Default stop words, embedded from `data/stop_words.json`.
///
/// Articles, prepositions and conjunctions in English and Russian. A query
/// made only of these (or of words of two chars or fewer) has no keywords.
static DEFAULT_STOP_WORDS: LazyLock<HashSet<String>> =
    LazyLock::new(|| parse_stop_words_json(include_str!("../data/stop_words.json")));

/// The embedded stop-word set, shared by every default config.
pub fn default_stop_words() -> &'static HashSet<String> {
    &DEFAULT_STOP_WORDS
}

/// Flatten `{ "lang": ["word", ...], ... }` into one lower-cased set.
fn parse_stop_words_json(json: &str) -> HashSet<String> {
    serde_json::from_str::<BTreeMap<String, Vec<String>>>(json)
        .unwrap_or_default()
        .into_values()
        .flatten()
        .map(|word| word.to_lowercase())
        .collect()
}

/// Tuning constants for the ranking engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RankingConfig {
    /// Largest edit distance the fuzzy pass accepts between a query token and
    /// a document word.
    pub max_fuzzy_distance: usize,
    /// Base boost of the always-on exact-substring pass. Title hits get twice
    /// this, category hits half.
    pub exact_match_boost: f64,
    /// Added once to a document whose title or description contains any of
    /// the quoted phrases.
    pub phrase_match_boost: f64,
    /// Multiplier on the fuzzy pass total.
    pub fuzzy_match_penalty: f64,
    /// Multiplier on the keyword pass total.
    pub keyword_weight: f64,
    pub max_results: usize,
    pub max_suggestions: usize,
    /// Below this many trie suggestions, fuzzy-prefix suggestions are added.
    pub min_trie_suggestions: usize,
    /// Edit distance allowed between a prefix and a word's leading chars.
    pub suggestion_fuzzy_distance: usize,
    pub stop_words: HashSet<String>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_fuzzy_distance: 2,
            exact_match_boost: 2.0,
            phrase_match_boost: 1.5,
            fuzzy_match_penalty: 0.5,
            keyword_weight: 1.0,
            max_results: 20,
            max_suggestions: 10,
            min_trie_suggestions: 5,
            suggestion_fuzzy_distance: 1,
            stop_words: DEFAULT_STOP_WORDS.clone(),
        }
    }
}

impl RankingConfig {
    /// Parse overrides from a JSON string. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let mut config: RankingConfig = serde_json::from_str(json)?;
        config.stop_words = config
            .stop_words
            .into_iter()
            .map(|word| word.to_lowercase())
            .collect();
        Ok(config)
    }

    /// Load overrides from a JSON file and validate them.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_json_str(&raw).map_err(|e| Error::json(path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the stop-word set.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = words
            .into_iter()
            .map(|word| word.as_ref().to_lowercase())
            .collect();
        self
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Reject weights the scoring math cannot use.
    ///
    /// Scores must stay finite and non-negative, and a search that may
    /// return nothing by construction is a misconfiguration.
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("exactMatchBoost", self.exact_match_boost),
            ("phraseMatchBoost", self.phrase_match_boost),
            ("fuzzyMatchPenalty", self.fuzzy_match_penalty),
            ("keywordWeight", self.keyword_weight),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }
        if self.max_results == 0 {
            return Err(Error::InvalidConfig("maxResults must be at least 1".into()));
        }
        Ok(())
    }
}
