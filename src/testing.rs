// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the canonical fixture catalogs so every suite ranks the same
//! products.

#![doc(hidden)]

use crate::build::Catalog;
use crate::types::Document;

/// Create a simple test document with only a title.
pub fn make_doc(id: u32, title: &str) -> Document {
    Document::new(id, title, format!("Description for {}", title), "General")
}

/// Create a test document with every indexed field set.
pub fn make_product(id: u32, title: &str, description: &str, category: &str) -> Document {
    Document::new(id, title, description, category)
}

/// Two phones sharing "smartphone" and "Electronics".
pub fn two_phone_catalog() -> Catalog {
    [
        make_product(1, "iPhone 14", "Apple smartphone with great camera", "Electronics"),
        make_product(2, "Samsung Galaxy", "Android smartphone with AMOLED display", "Electronics"),
    ]
    .into_iter()
    .collect()
}

/// Five Apple/Samsung products across four categories.
pub fn gadget_catalog() -> Catalog {
    [
        make_product(1, "iPhone 14", "Apple smartphone iPhone 14 with advanced camera", "Electronics"),
        make_product(2, "Samsung Galaxy S23", "Samsung flagship smartphone with great camera", "Electronics"),
        make_product(3, "MacBook Pro", "Apple laptop MacBook Pro with M2 chip", "Computers"),
        make_product(4, "iPad Pro", "Apple tablet iPad Pro with Liquid Retina display", "Tablets"),
        make_product(5, "AirPods Pro", "Apple wireless earbuds with noise cancellation", "Accessories"),
    ]
    .into_iter()
    .collect()
}

/// `count` products with the given title, ids `1..=count`.
pub fn repeated_catalog(count: u32, title: &str) -> Catalog {
    (1..=count).map(|id| make_doc(id, title)).collect()
}
