// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query intent: which scoring passes a query deserves.
//!
//! The analyzer looks only at the query string, never at the index. Its
//! output is a handful of flags the engine reads to switch passes on:
//!
//! | Flag                 | Set when                                            |
//! |----------------------|-----------------------------------------------------|
//! | `exact_phrase`       | the raw query holds a `"quoted phrase"`             |
//! | `has_keywords`       | a token is longer than 2 chars and not a stop word  |
//! | `allows_fuzzy_search`| at most 2 tokens, or a long token has a doubled char|
//!
//! A doubled char ("iphoone", "cammera") is a cheap typo signal. Long queries
//! without one skip the fuzzy pass, which is the most expensive of the four.

use crate::config::default_stop_words;
use crate::util::tokenize;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

static QUOTED_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("quoted phrase pattern is valid"));

/// Tokens at most this long never count as keywords.
const MIN_KEYWORD_CHARS: usize = 3;

/// Queries with at most this many tokens always get the fuzzy pass.
const FUZZY_TOKEN_LIMIT: usize = 2;

/// Only tokens longer than this are checked for doubled chars.
const TYPO_CHECK_MIN_CHARS: usize = 4;

/// Query shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryType {
    Empty,
    SingleKeyword,
    MultiKeyword,
    ExactPhrase,
    Complex,
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QueryType::Empty => "EMPTY",
            QueryType::SingleKeyword => "SINGLE_KEYWORD",
            QueryType::MultiKeyword => "MULTI_KEYWORD",
            QueryType::ExactPhrase => "EXACT_PHRASE",
            QueryType::Complex => "COMPLEX",
        })
    }
}

/// What the analyzer decided about one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryIntent {
    pub exact_phrase: bool,
    pub has_keywords: bool,
    pub allows_fuzzy_search: bool,
    pub query_type: QueryType,
}

impl QueryIntent {
    /// Intent of a blank query: no passes except the exact one, which finds
    /// nothing either.
    pub const EMPTY: QueryIntent = QueryIntent {
        exact_phrase: false,
        has_keywords: false,
        allows_fuzzy_search: false,
        query_type: QueryType::Empty,
    };
}

impl fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QueryIntent{{type={}, exactPhrase={}, hasKeywords={}, allowsFuzzy={}}}",
            self.query_type, self.exact_phrase, self.has_keywords, self.allows_fuzzy_search
        )
    }
}

/// Classifies queries against a stop-word set.
#[derive(Debug, Clone, Copy)]
pub struct QueryAnalyzer<'a> {
    stop_words: &'a HashSet<String>,
}

impl Default for QueryAnalyzer<'static> {
    fn default() -> Self {
        Self::new(default_stop_words())
    }
}

impl<'a> QueryAnalyzer<'a> {
    /// `stop_words` must be lower-cased.
    pub fn new(stop_words: &'a HashSet<String>) -> Self {
        Self { stop_words }
    }

    /// Classify a query. Pure: the same query always yields the same intent.
    pub fn analyze(&self, query: &str) -> QueryIntent {
        if query.trim().is_empty() {
            return QueryIntent::EMPTY;
        }

        let tokens = tokenize(query);
        let exact_phrase = QUOTED_PHRASE.is_match(query);

        let has_keywords = tokens
            .iter()
            .any(|t| t.chars().count() >= MIN_KEYWORD_CHARS && !self.stop_words.contains(t));

        let allows_fuzzy_search = tokens.len() <= FUZZY_TOKEN_LIMIT
            || tokens
                .iter()
                .any(|t| t.chars().count() >= TYPO_CHECK_MIN_CHARS && has_doubled_char(t));

        let query_type = if exact_phrase {
            QueryType::ExactPhrase
        } else {
            match tokens.len() {
                0 => QueryType::Empty,
                1 => QueryType::SingleKeyword,
                2..=3 => QueryType::MultiKeyword,
                _ => QueryType::Complex,
            }
        };

        QueryIntent {
            exact_phrase,
            has_keywords,
            allows_fuzzy_search,
            query_type,
        }
    }
}

/// Classify with the default stop words.
pub fn analyze_query(query: &str) -> QueryIntent {
    QueryAnalyzer::default().analyze(query)
}

/// The lower-cased contents of every `"quoted phrase"` in the query, in order.
///
/// Phrases that are only whitespace are dropped: they would match nearly every
/// document.
pub fn quoted_phrases(query: &str) -> Vec<String> {
    QUOTED_PHRASE
        .captures_iter(query)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
        .filter(|phrase| !phrase.trim().is_empty())
        .collect()
}

fn has_doubled_char(token: &str) -> bool {
    let mut chars = token.chars();
    let Some(mut previous) = chars.next() else {
        return false;
    };
    for ch in chars {
        if ch == previous {
            return true;
        }
        previous = ch;
    }
    false
}
