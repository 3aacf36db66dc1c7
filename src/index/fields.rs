// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lower-cased copies of each document's indexed fields.
//!
//! Every ranking pass does case-insensitive substring checks or word-level
//! edit distance against title and description. Lower-casing and splitting
//! those on every query would be pure waste, so the indexer does it once and
//! the passes read from here. The catalog itself is never touched.

use crate::types::{DocId, Document};
use crate::util::tokenize;

/// Pre-normalized view of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFields {
    pub id: DocId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub title_words: Vec<String>,
    pub description_words: Vec<String>,
    pub category_words: Vec<String>,
}

impl NormalizedFields {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id,
            title: doc.title.to_lowercase(),
            description: doc.description.to_lowercase(),
            category: doc.category.to_lowercase(),
            title_words: tokenize(&doc.title),
            description_words: tokenize(&doc.description),
            category_words: tokenize(&doc.category),
        }
    }

    /// Every token of the document, field by field (title, description,
    /// category), duplicates kept.
    pub fn all_words(&self) -> impl Iterator<Item = &str> {
        self.title_words
            .iter()
            .chain(&self.description_words)
            .chain(&self.category_words)
            .map(String::as_str)
    }
}
