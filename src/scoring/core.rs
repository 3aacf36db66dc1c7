// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind each scoring pass.
//!
//! Every pass is a plain function of (query tokens, one document's normalized
//! fields) → contribution. The engine decides which passes run and adds their
//! outputs; nothing here knows about the accumulator or the other passes.
//!
//! # Field weights
//!
//! | Field       | Keyword | Fuzzy | Exact substring |
//! |-------------|---------|-------|-----------------|
//! | Title       | 2.0     | ×2    | boost × 2       |
//! | Description | 1.0     | ×1    | boost × 1       |
//! | Category    | 0.5     | -     | boost × 0.5     |
//!
//! Title always outweighs description, which always outweighs category. The
//! fuzzy pass ignores category: category names are short and shared by many
//! documents, so a near-miss there says nothing.
//!
//! # Unbounded scores
//!
//! Contributions are added without normalization. A document that hits every
//! pass can score well above 10, while the percentage saturates at 100 from a
//! score of 10. Both are kept as-is; ranking only needs the order.

use crate::fuzzy::similarity_within;
use crate::index::NormalizedFields;
use crate::types::MatchType;
use crate::util::contains;
use std::collections::HashSet;

// =============================================================================
// KEYWORD PASS CONSTANTS
// =============================================================================

/// Per-token reward for a title substring hit.
pub const TITLE_KEYWORD_WEIGHT: f64 = 2.0;

/// Per-token reward for a description substring hit.
pub const DESCRIPTION_KEYWORD_WEIGHT: f64 = 1.0;

/// Per-token reward for a category substring hit.
pub const CATEGORY_KEYWORD_WEIGHT: f64 = 0.5;

/// Multi-token bonus: with `n > 1` distinct tokens matching, the keyword sum
/// is multiplied by `1 + MULTI_TOKEN_BONUS * n`.
pub const MULTI_TOKEN_BONUS: f64 = 0.2;

// =============================================================================
// FUZZY AND EXACT PASS CONSTANTS
// =============================================================================

/// Title-word similarity counts double against description-word similarity.
pub const TITLE_FUZZY_WEIGHT: f64 = 2.0;
pub const DESCRIPTION_FUZZY_WEIGHT: f64 = 1.0;

/// Exact-substring multipliers applied to the configured boost.
pub const TITLE_EXACT_MULTIPLIER: f64 = 2.0;
pub const DESCRIPTION_EXACT_MULTIPLIER: f64 = 1.0;
pub const CATEGORY_EXACT_MULTIPLIER: f64 = 0.5;

// =============================================================================
// PRESENTATION
// =============================================================================

/// Minimum score per match-type bucket.
pub const EXACT_MATCH_THRESHOLD: f64 = 4.0;
pub const HIGH_RELEVANCE_THRESHOLD: f64 = 2.0;
pub const MEDIUM_RELEVANCE_THRESHOLD: f64 = 1.0;

/// Score → percentage scale. A score of 10 or more reads as 100%.
pub const PERCENTAGE_SCALE: f64 = 10.0;

/// Bucket a score into a match type.
pub fn match_type_for_score(score: f64) -> MatchType {
    if score >= EXACT_MATCH_THRESHOLD {
        MatchType::Exact
    } else if score >= HIGH_RELEVANCE_THRESHOLD {
        MatchType::High
    } else if score >= MEDIUM_RELEVANCE_THRESHOLD {
        MatchType::Medium
    } else {
        MatchType::Low
    }
}

/// `min(100, floor(score × 10))`, and 0 for anything not positive.
pub fn relevance_percentage(score: f64) -> u8 {
    if !(score > 0.0) {
        return 0;
    }
    (score * PERCENTAGE_SCALE).floor().min(100.0) as u8
}

// =============================================================================
// PASSES
// =============================================================================

/// Keyword relevance of one document.
///
/// Each token earns its field weights for every field it is a substring of.
/// Substring rather than token equality: "phone" in the query rewards
/// "smartphone" in a title. Repeated tokens score once per occurrence; the
/// multi-token bonus counts distinct matched tokens.
pub fn keyword_relevance(tokens: &[String], fields: &NormalizedFields) -> f64 {
    let mut relevance = 0.0;
    let mut matched: HashSet<&str> = HashSet::new();

    for token in tokens {
        let mut hit = false;
        if contains(&fields.title, token) {
            relevance += TITLE_KEYWORD_WEIGHT;
            hit = true;
        }
        if contains(&fields.description, token) {
            relevance += DESCRIPTION_KEYWORD_WEIGHT;
            hit = true;
        }
        if contains(&fields.category, token) {
            relevance += CATEGORY_KEYWORD_WEIGHT;
            hit = true;
        }
        if hit {
            matched.insert(token.as_str());
        }
    }

    if matched.len() > 1 {
        relevance *= 1.0 + MULTI_TOKEN_BONUS * matched.len() as f64;
    }
    relevance
}

/// Best weighted similarity of `token` against one document, if any word is
/// within `max_distance` edits.
fn best_token_similarity(token: &str, fields: &NormalizedFields, max_distance: usize) -> Option<f64> {
    let title = fields
        .title_words
        .iter()
        .filter_map(|word| similarity_within(token, word, max_distance))
        .map(|sim| sim * TITLE_FUZZY_WEIGHT);
    let description = fields
        .description_words
        .iter()
        .filter_map(|word| similarity_within(token, word, max_distance))
        .map(|sim| sim * DESCRIPTION_FUZZY_WEIGHT);

    title.chain(description).reduce(f64::max)
}

/// Fuzzy relevance of one document, before the penalty.
///
/// Sums each token's best weighted similarity, repeats included. `None` when
/// no token is within
/// `max_distance` of any title or description word; `Some(0.0)` is possible
/// (a two-char token fully substituted) and still counts as a match.
pub fn fuzzy_relevance(tokens: &[String], fields: &NormalizedFields, max_distance: usize) -> Option<f64> {
    tokens
        .iter()
        .filter_map(|token| best_token_similarity(token, fields, max_distance))
        .reduce(|a, b| a + b)
}

/// Does any token sit within `max_distance` of a title or description word?
pub fn fuzzy_matches(tokens: &[String], fields: &NormalizedFields, max_distance: usize) -> bool {
    tokens.iter().any(|token| {
        fields
            .title_words
            .iter()
            .chain(&fields.description_words)
            .any(|word| crate::fuzzy::levenshtein_within(token, word, max_distance))
    })
}

/// Always-on exact pass: the whole lower-cased query as a substring.
pub fn exact_match_score(query_lower: &str, fields: &NormalizedFields, boost: f64) -> f64 {
    let mut score = 0.0;
    if contains(&fields.title, query_lower) {
        score += boost * TITLE_EXACT_MULTIPLIER;
    }
    if contains(&fields.description, query_lower) {
        score += boost * DESCRIPTION_EXACT_MULTIPLIER;
    }
    if contains(&fields.category, query_lower) {
        score += boost * CATEGORY_EXACT_MULTIPLIER;
    }
    score
}

/// Does any of `phrases` occur in title or description?
pub fn phrase_matches(phrases: &[String], fields: &NormalizedFields) -> bool {
    phrases
        .iter()
        .any(|phrase| contains(&fields.title, phrase) || contains(&fields.description, phrase))
}
