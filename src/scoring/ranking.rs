// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how accumulated scores become an ordered list.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Doc ID** - ascending, so equal scores come out the same way every run
//!
//! Scores are compared with `total_cmp`, so a NaN can never poison the sort.
//! The passes never produce one, but a comparator that panics or lies on NaN
//! would make the ordering depend on input order.

use crate::types::DocId;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Compare two `(id, score)` pairs for ranking. `Less` means `a` ranks first.
pub fn compare_scored(a: &(DocId, f64), b: &(DocId, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Order an accumulator best-first and keep the top `limit`.
pub fn rank_scores(scores: BTreeMap<DocId, f64>, limit: usize) -> Vec<(DocId, f64)> {
    let mut ranked: Vec<(DocId, f64)> = scores.into_iter().collect();
    ranked.sort_by(compare_scored);
    ranked.truncate(limit);
    ranked
}
