// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The one tokenizer everything shares.
//!
//! Indexing, query analysis and every scoring pass must agree on what a token
//! is, or a document indexed under `"galaxy"` would never be found by a query
//! that tokenizes to `"galaxy,"`. So there is exactly one definition:
//! lower-case, split on runs of non-word characters, drop empties.
//!
//! A word character is any Unicode alphanumeric or `_`. No stemming, no
//! stop-word removal at this level (the index keeps stop words; only the
//! query analyzer looks at them).

/// Word boundary detection: checks if character is a word separator.
#[inline]
fn is_word_boundary(c: char) -> bool {
    !(c.is_alphanumeric() || c == '_')
}

/// Tokenize text into lower-cased words, in order, duplicates kept.
///
/// ```
/// use catalog_search::tokenize;
///
/// assert_eq!(tokenize("iPhone 14, Pro-Max!"), vec!["iphone", "14", "pro", "max"]);
/// assert!(tokenize("  ...  ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(is_word_boundary)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokenize and keep only the first occurrence of each token.
pub fn tokenize_unique(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
