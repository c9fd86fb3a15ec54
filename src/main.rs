// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! starthub-search CLI: run searches against a catalog snapshot.
//!
//! ```bash
//! starthub-search --catalog data/catalog.json search fin --sort-by relevance
//! starthub-search search --categories 1,2 --min-votes 5 --sort-by votes_desc
//! starthub-search autocomplete tech --limit 5
//! starthub-search show 3 --json
//! STARTHUB_CATALOG=data/catalog.json starthub-search categories
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use starthub_search::{MemoryCatalog, SearchConfig, SearchService, StartupId};
use std::fs;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output stays clean.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    let Some(path) = path else {
        return Ok(SearchConfig::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SearchConfig = serde_json::from_str(&json)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn load_catalog(path: Option<&Path>) -> Result<MemoryCatalog> {
    let Some(path) = path else {
        bail!("no catalog given; pass --catalog or set STARTHUB_CATALOG");
    };
    let catalog = MemoryCatalog::from_path(path)?;
    info!(path = %path.display(), startups = catalog.len(), "catalog loaded");
    Ok(catalog)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let catalog = load_catalog(cli.catalog.as_deref())?;
    let service = SearchService::with_config(catalog, config);

    match &cli.command {
        Commands::Search { .. } => {
            let params = cli.command.search_params().unwrap_or_default();
            let result = service.search_params(&params)?;
            if cli.json {
                print_json(&result)?;
            } else {
                display::print_search_result(&result);
            }
        }
        Commands::Autocomplete { query, limit } => {
            let entries = service.autocomplete(query, *limit)?;
            if cli.json {
                print_json(&entries)?;
            } else {
                display::print_autocomplete(query, &entries);
            }
        }
        Commands::Show { id } => {
            let profile = service.get_profile(StartupId(*id))?;
            if cli.json {
                print_json(&profile)?;
            } else {
                display::print_profile(&profile);
            }
        }
        Commands::Categories => {
            let categories = service.list_categories()?;
            if cli.json {
                print_json(&categories)?;
            } else {
                display::print_categories(&categories);
            }
        }
    }

    Ok(())
}
