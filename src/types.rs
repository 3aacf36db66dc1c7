// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog search.
//!
//! Documents come in from the host, scored documents go back out. Everything
//! in between (postings, trie nodes, intents) lives next to the code that uses
//! it; this module only holds the types that cross the public boundary.
//!
//! # Invariants
//!
//! - **Document**: immutable once indexed. The engine borrows documents and
//!   never keeps a copy it could mutate.
//! - **ScoredDocument**: `relevance_score >= 0.0`, and `match_type` and
//!   `relevance_percentage` are always derived from that score, never set
//!   independently.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scoring::{match_type_for_score, relevance_percentage};

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe document identifier.
///
/// Catalog ids are small integers in practice, but wrapping them keeps a
/// token count or a result position from sneaking in where an id belongs.
/// Serializes as the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl From<DocId> for u32 {
    fn from(id: DocId) -> Self {
        id.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// A catalog entry: one product.
///
/// Only `title`, `description` and `category` are indexed. `price` and `image`
/// ride along so a front end can render a result without a second lookup.
///
/// The JSON shape accepts both the catalog-file names (`title`, `thumbnail`)
/// and the in-app names (`name`, `image`). Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, alias = "thumbnail", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Document {
    /// Build a document from the three indexed fields.
    pub fn new(
        id: impl Into<DocId>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            price: None,
            image: None,
        }
    }

    /// Attach a price (display only).
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Attach an image URL (display only).
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// The indexed fields, in field-weight order.
    pub fn indexed_fields(&self) -> [&str; 3] {
        [&self.title, &self.description, &self.category]
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// Coarse relevance bucket derived from a final score.
///
/// Ordered best-first, so `MatchType::Exact < MatchType::Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchType {
    #[serde(rename = "Exact Match")]
    Exact,
    #[serde(rename = "High Relevance")]
    High,
    #[serde(rename = "Medium Relevance")]
    Medium,
    #[serde(rename = "Low Relevance")]
    Low,
}

impl MatchType {
    /// Human-readable label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            MatchType::Exact => "Exact Match",
            MatchType::High => "High Relevance",
            MatchType::Medium => "Medium Relevance",
            MatchType::Low => "Low Relevance",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A document with its fused relevance score.
///
/// Serializes as `{document, relevanceScore, matchType, relevancePercentage}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredDocument<'a> {
    pub document: &'a Document,
    pub relevance_score: f64,
    pub match_type: MatchType,
    pub relevance_percentage: u8,
}

impl<'a> ScoredDocument<'a> {
    /// Wrap a document and derive the label and percentage from `score`.
    pub fn new(document: &'a Document, score: f64) -> Self {
        Self {
            document,
            relevance_score: score,
            match_type: match_type_for_score(score),
            relevance_percentage: relevance_percentage(score),
        }
    }

    #[inline]
    pub fn id(&self) -> DocId {
        self.document.id
    }
}

impl fmt::Display for ScoredDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.2}] #{} {} ({})",
            self.relevance_score, self.document.id, self.document.title, self.match_type
        )
    }
}
