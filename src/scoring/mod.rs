// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Each pass contributes independently and the engine adds them up. Title
//! beats description beats category in every pass, so a document named after
//! the query outranks one that only mentions it.

mod core;
pub mod ranking;

pub use core::*;
