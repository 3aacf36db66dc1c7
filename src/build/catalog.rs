// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The document store: id → document, in id order.
//!
//! The catalog is owned by the host. The indexer reads it once and the ranking
//! engine borrows it for the lifetime of the engine, so it cannot change under
//! a built index.

use crate::error::{Error, Result};
use crate::types::{DocId, Document};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

/// The two catalog file shapes we accept.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    /// `{"products": [...]}` with any sibling keys (`total`, `skip`, ...) ignored.
    Wrapped { products: Vec<Document> },
    Bare(Vec<Document>),
}

impl CatalogFile {
    fn into_documents(self) -> Vec<Document> {
        match self {
            CatalogFile::Wrapped { products } => products,
            CatalogFile::Bare(documents) => documents,
        }
    }
}

/// Documents keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    documents: BTreeMap<DocId, Document>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from JSON, either `{"products": [...]}` or a bare array.
    pub fn from_json_str(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(file.into_documents().into_iter().collect())
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_str(&raw).map_err(|e| Error::json(path, e))
    }

    /// Add a document. A document with the same id is replaced and returned.
    pub fn insert(&mut self, document: Document) -> Option<Document> {
        let id = document.id;
        let previous = self.documents.insert(id, document);
        if previous.is_some() {
            warn!(target: "catalog_search::catalog", doc_id = %id, "duplicate document id, keeping the later record");
        }
        previous
    }

    pub fn get(&self, id: DocId) -> Option<&Document> {
        self.documents.get(&id)
    }

    /// Documents in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl FromIterator<Document> for Catalog {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for document in iter {
            catalog.insert(document);
        }
        catalog
    }
}

impl Extend<Document> for Catalog {
    fn extend<I: IntoIterator<Item = Document>>(&mut self, iter: I) {
        for document in iter {
            self.insert(document);
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Document;
    type IntoIter = std::collections::btree_map::Values<'a, DocId, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.values()
    }
}
