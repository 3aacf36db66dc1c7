// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text primitives shared by indexing and every scoring pass.
//!
//! The tokenizer decides what a word is; Boyer-Moore decides whether a phrase
//! is inside a field. Neither knows anything about documents.

pub mod boyer_moore;
pub mod tokenize;

pub use boyer_moore::{contains, find_first};
pub use tokenize::{tokenize, tokenize_unique};
