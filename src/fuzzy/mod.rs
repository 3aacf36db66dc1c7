// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! One exact distance for callers that need the number, and bounded variants
//! for the hot loops that only care whether a pair is close enough.

mod levenshtein;

pub use levenshtein::*;
