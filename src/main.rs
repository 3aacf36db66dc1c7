// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use catalog_search::{Catalog, RankingConfig, RankingEngine};

mod cli;
use cli::{report, Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises this crate's level.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match verbose {
            0 => "warn",
            1 => "catalog_search=debug,warn",
            _ => "catalog_search=trace,debug",
        };
        EnvFilter::new(level)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => RankingConfig::load(path)?,
        None => RankingConfig::default(),
    };

    match cli.command {
        Commands::Search {
            catalog,
            query,
            limit,
            json,
        } => {
            let mut config = config;
            if let Some(limit) = limit {
                config.max_results = limit;
            }
            let catalog = load_catalog(&catalog)?;
            let engine = RankingEngine::try_new(&catalog, config)?;
            let results = engine.smart_search(&query);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                report::print_results(&query, &results);
            }
        }
        Commands::Suggest {
            catalog,
            prefix,
            json,
        } => {
            let catalog = load_catalog(&catalog)?;
            let engine = RankingEngine::new(&catalog, config);
            let suggestions = engine.search_suggestions(&prefix);
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                report::print_suggestions(&prefix, &suggestions);
            }
        }
        Commands::Analyze {
            catalog,
            query,
            json,
        } => {
            let catalog = load_catalog(&catalog)?;
            let engine = RankingEngine::new(&catalog, config);
            let analytics = engine.search_analytics(&query);
            if json {
                println!("{}", serde_json::to_string_pretty(&analytics)?);
            } else {
                report::print_analytics(&query, &analytics);
            }
        }
        Commands::Inspect { catalog } => {
            let catalog = load_catalog(&catalog)?;
            let engine = RankingEngine::new(&catalog, config);
            report::print_inspect(&engine);
        }
    }

    Ok(())
}

fn load_catalog(path: &Path) -> catalog_search::Result<Catalog> {
    let catalog = Catalog::load(path)?;
    if catalog.is_empty() {
        tracing::warn!(target: "catalog_search::catalog", path = %path.display(), "catalog is empty");
    }
    Ok(catalog)
}
