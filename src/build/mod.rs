// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build time: loading a catalog and indexing it.

mod catalog;
mod indexer;

pub use catalog::Catalog;
pub use indexer::Indexer;
