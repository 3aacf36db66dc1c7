// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boyer-Moore substring search (bad-character rule only).
//!
//! Works on UTF-8 bytes. A byte-level match of a valid UTF-8 needle can only
//! start on a char boundary of a valid UTF-8 haystack, so byte offsets are
//! safe to slice with.
//!
//! The shift table records, for every byte, its distance from the end of the
//! needle at its last occurrence *before* the final position. On a mismatch
//! at needle position `j` the window moves by `shift[c] - (m - 1 - j)`,
//! clamped to at least 1. That is the textbook `j - last(c)` rule, and it
//! never jumps past an alignment where `c` could line up, so the first hit
//! is always the leftmost one.

/// Byte offset of the leftmost occurrence of `needle` in `haystack`.
///
/// An empty needle matches at 0, even in an empty haystack.
///
/// ```
/// use catalog_search::find_first;
///
/// assert_eq!(find_first("hello world", "world"), Some(6));
/// assert_eq!(find_first("hello world", ""), Some(0));
/// assert_eq!(find_first("hi", "hello"), None);
/// ```
pub fn find_first(haystack: &str, needle: &str) -> Option<usize> {
    let text = haystack.as_bytes();
    let pattern = needle.as_bytes();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if text.is_empty() || m > text.len() {
        return None;
    }

    let shift = bad_character_table(pattern);

    let mut i = 0;
    while i <= text.len() - m {
        // Compare right to left
        let mut j = m;
        while j > 0 && text[i + j - 1] == pattern[j - 1] {
            j -= 1;
        }
        if j == 0 {
            return Some(i);
        }

        let mismatch = j - 1;
        let bad = text[i + mismatch];
        let already_matched = m - 1 - mismatch;
        i += shift[usize::from(bad)].saturating_sub(already_matched).max(1);
    }

    None
}

/// Does `haystack` contain `needle`?
#[inline]
pub fn contains(haystack: &str, needle: &str) -> bool {
    find_first(haystack, needle).is_some()
}

/// Distance from the end of the needle for each byte's last occurrence,
/// ignoring the final position. Unseen bytes shift by the full needle length.
fn bad_character_table(pattern: &[u8]) -> [usize; 256] {
    let m = pattern.len();
    let mut table = [m; 256];
    for (i, &byte) in pattern[..m - 1].iter().enumerate() {
        table[usize::from(byte)] = m - 1 - i;
    }
    table
}
