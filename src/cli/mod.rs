// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the catalog-search command-line interface.
//!
//! Four subcommands, each loading a JSON catalog and indexing it in memory:
//! `search` ranks a query, `suggest` autocompletes a prefix, `analyze` shows
//! how a query is classified and what each strategy matches, and `inspect`
//! summarizes the built index.

pub mod display;
pub mod report;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "catalog-search",
    about = "Multi-strategy product search over a JSON catalog",
    version
)]
pub struct Cli {
    /// Ranking config overrides (JSON, camelCase keys)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More logging (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalog products against a query
    Search {
        /// Catalog file: {"products": [...]} or a bare array
        catalog: PathBuf,

        /// Search query; wrap words in double quotes for a phrase
        query: String,

        /// Maximum number of results (defaults to the config's maxResults)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Autocomplete a prefix
    Suggest {
        /// Catalog file
        catalog: PathBuf,

        /// Typed prefix
        prefix: String,

        /// Print JSON instead of a list
        #[arg(long)]
        json: bool,
    },

    /// Show query intent and per-strategy match counts
    Analyze {
        /// Catalog file
        catalog: PathBuf,

        /// Query to analyze
        query: String,

        /// Print JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Summarize a catalog's index
    Inspect {
        /// Catalog file
        catalog: PathBuf,
    },
}
