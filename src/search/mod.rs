// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query time: intent, lookups, ranking, diagnostics.
//!
//! The analyzer reads the query, the engine picks passes from its verdict and
//! fuses their scores. Exact substring, keyword, phrase and fuzzy matching
//! each catch what the others miss, so a typo or a partial name still finds
//! the product.

pub mod analytics;
pub mod analyzer;
pub mod core;
pub mod engine;

pub use analytics::{SearchAnalytics, SearchStrategy};
pub use analyzer::{analyze_query, quoted_phrases, QueryAnalyzer, QueryIntent, QueryType};
pub use self::core::SearchCore;
pub use engine::RankingEngine;
