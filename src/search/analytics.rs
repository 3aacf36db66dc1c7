// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-query diagnostics: how many documents each strategy would match.
//!
//! Nothing here feeds back into ranking. The counts come from the
//! single-strategy lookups, so a document matched by keyword and fuzzy both
//! is counted twice in `total_matches`.

use super::analyzer::{QueryIntent, QueryType};
use serde::Serialize;
use std::fmt;

/// Which mix of passes a query's intent calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SearchStrategy {
    #[serde(rename = "Phrase-focused search")]
    PhraseFocused,
    #[serde(rename = "Single keyword + fuzzy search")]
    SingleKeywordFuzzy,
    #[serde(rename = "Multi-algorithm hybrid search")]
    MultiAlgorithmHybrid,
    #[serde(rename = "Basic search")]
    Basic,
}

impl SearchStrategy {
    pub fn for_intent(intent: &QueryIntent) -> Self {
        if intent.exact_phrase {
            SearchStrategy::PhraseFocused
        } else if intent.query_type == QueryType::SingleKeyword {
            SearchStrategy::SingleKeywordFuzzy
        } else if intent.has_keywords {
            SearchStrategy::MultiAlgorithmHybrid
        } else {
            SearchStrategy::Basic
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchStrategy::PhraseFocused => "Phrase-focused search",
            SearchStrategy::SingleKeywordFuzzy => "Single keyword + fuzzy search",
            SearchStrategy::MultiAlgorithmHybrid => "Multi-algorithm hybrid search",
            SearchStrategy::Basic => "Basic search",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Diagnostic record for one query.
///
/// `strategy` and `total_matches` are derived at construction and serialized
/// alongside the raw counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnalytics {
    query_intent: QueryIntent,
    keyword_matches: usize,
    phrase_matches: usize,
    fuzzy_matches: usize,
    suggestions: usize,
    total_matches: usize,
    strategy: SearchStrategy,
}

impl SearchAnalytics {
    pub fn new(
        query_intent: QueryIntent,
        keyword_matches: usize,
        phrase_matches: usize,
        fuzzy_matches: usize,
        suggestions: usize,
    ) -> Self {
        Self {
            query_intent,
            keyword_matches,
            phrase_matches,
            fuzzy_matches,
            suggestions,
            total_matches: keyword_matches + phrase_matches + fuzzy_matches,
            strategy: SearchStrategy::for_intent(&query_intent),
        }
    }

    pub fn query_intent(&self) -> &QueryIntent {
        &self.query_intent
    }

    pub fn keyword_matches(&self) -> usize {
        self.keyword_matches
    }

    pub fn phrase_matches(&self) -> usize {
        self.phrase_matches
    }

    pub fn fuzzy_matches(&self) -> usize {
        self.fuzzy_matches
    }

    pub fn suggestions(&self) -> usize {
        self.suggestions
    }

    /// Keyword + phrase + fuzzy. Overlaps are not removed.
    pub fn total_matches(&self) -> usize {
        self.total_matches
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Multi-line plain-text report.
    pub fn performance_report(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Search Analytics Report ===\n");
        report.push_str(&format!("Query Intent: {}\n", self.query_intent));
        report.push_str(&format!("Search Strategy: {}\n", self.strategy));
        report.push_str("Results:\n");
        report.push_str(&format!("  - Keyword matches: {}\n", self.keyword_matches));
        report.push_str(&format!("  - Phrase matches: {}\n", self.phrase_matches));
        report.push_str(&format!("  - Fuzzy matches: {}\n", self.fuzzy_matches));
        report.push_str(&format!("  - Total matches: {}\n", self.total_matches));
        report.push_str(&format!("  - Autocomplete suggestions: {}\n", self.suggestions));
        report
    }
}

impl fmt::Display for SearchAnalytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SearchAnalytics{{strategy='{}', total={}, keyword={}, phrase={}, fuzzy={}}}",
            self.strategy,
            self.total_matches,
            self.keyword_matches,
            self.phrase_matches,
            self.fuzzy_matches
        )
    }
}
