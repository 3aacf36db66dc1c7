// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! `levenshtein` is the plain Wagner-Fischer recurrence over a rolling row.
//! The bounded variants add two sound shortcuts: `|len(a) - len(b)|` is a
//! lower bound on edit distance, and once every cell of a row exceeds the
//! bound no later row can come back under it. The fuzzy ranking pass compares
//! every query token against every title and description word, so most pairs
//! are rejected by the length check before the DP allocates anything.
//!
//! All lengths are counted in `char`s, not bytes. Inputs are lower-cased
//! internally, so callers may pass raw text.

use std::borrow::Cow;

/// Lower-case only when needed; tokens from the tokenizer are already lower.
fn fold(s: &str) -> Cow<'_, str> {
    if s.chars().any(char::is_uppercase) {
        Cow::Owned(s.to_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}

/// Minimum number of single-character insertions, deletions or substitutions
/// turning `a` into `b`. Case-insensitive.
///
/// ```
/// use catalog_search::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "world"), 5);
/// assert_eq!(levenshtein("Apple", "apple"), 0);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a = fold(a);
    let b = fold(b);
    let b_chars: Vec<char> = b.chars().collect();

    let mut dp: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_chars.len()]
}

/// Edit distance if it is at most `max`, otherwise `None`.
///
/// Same result as `Some(levenshtein(a, b)).filter(|d| *d <= max)`, but
/// abandons the DP as soon as the answer is known to exceed `max`.
pub fn bounded_levenshtein(a: &str, b: &str, max: usize) -> Option<usize> {
    let a = fold(a);
    let b = fold(b);
    let a_len = a.chars().count();
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    // Early-exit: length difference is a lower bound on edit distance
    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return None;
        }
    }

    let distance = dp[b_len];
    (distance <= max).then_some(distance)
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    bounded_levenshtein(a, b, max).is_some()
}

/// Normalized similarity `1 - d / max(len(a), len(b))` for pairs within
/// `max_distance` edits, `None` otherwise.
///
/// Two empty strings are identical and score `1.0`.
pub fn similarity_within(a: &str, b: &str, max_distance: usize) -> Option<f64> {
    let distance = bounded_levenshtein(a, b, max_distance)?;
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return Some(1.0);
    }
    Some(1.0 - distance as f64 / longest as f64)
}
