// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory multi-strategy product search.
//!
//! A catalog is indexed once; queries are then ranked by fusing four signals:
//! exact substring hits, keyword hits through an inverted index, quoted-phrase
//! hits, and typo-tolerant fuzzy hits by edit distance. A prefix trie serves
//! autocomplete.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   Catalog   │────▶│   Indexer    │────▶│   SearchIndex    │
//! │ (id → doc)  │     │ (one pass)   │     │ inverted + trie  │
//! └─────────────┘     └──────────────┘     │ + field cache    │
//!        │                                 └──────────────────┘
//!        │                                          │
//!        ▼                                          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                     RankingEngine                        │
//! │  QueryAnalyzer → phrase / keyword / fuzzy / exact passes │
//! │  → accumulate → sort → truncate                          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! | Module    | Role                                              |
//! |-----------|---------------------------------------------------|
//! | `types`   | Documents and scored results                      |
//! | `util`    | Tokenizer, Boyer-Moore substring search           |
//! | `fuzzy`   | Levenshtein distance, bounded and unbounded       |
//! | `index`   | Inverted index, prefix trie, normalized fields    |
//! | `build`   | Catalog loading and indexing                      |
//! | `scoring` | Per-pass relevance math and result ordering       |
//! | `search`  | Query analysis, ranking engine, analytics         |
//! | `config`  | Ranking constants and stop words                  |
//!
//! # Usage
//!
//! ```
//! use catalog_search::{Catalog, Document, RankingEngine};
//!
//! let catalog: Catalog = vec![
//!     Document::new(1, "iPhone 14", "Apple smartphone with great camera", "Electronics"),
//!     Document::new(2, "Samsung Galaxy", "Android smartphone with AMOLED display", "Electronics"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let engine = RankingEngine::with_defaults(&catalog);
//!
//! let results = engine.smart_search("Smasung");
//! assert_eq!(results[0].document.title, "Samsung Galaxy");
//!
//! // trie completions first, then near-miss prefixes ("cam" is one edit away)
//! assert_eq!(engine.search_suggestions("sam"), vec!["samsung", "camera"]);
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod types;
pub mod util;

// Re-exports for public API
pub use build::{Catalog, Indexer};
pub use config::RankingConfig;
pub use error::{Error, Result};
pub use fuzzy::{levenshtein, levenshtein_within};
pub use index::{InvertedIndex, PrefixTrie, SearchIndex};
pub use scoring::{match_type_for_score, relevance_percentage};
pub use search::{
    analyze_query, QueryAnalyzer, QueryIntent, QueryType, RankingEngine, SearchAnalytics,
    SearchCore, SearchStrategy,
};
pub use types::{DocId, Document, MatchType, ScoredDocument};
pub use util::{contains, find_first, tokenize};
