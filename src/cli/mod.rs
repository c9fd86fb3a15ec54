// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the starthub-search command-line interface.
//!
//! Four subcommands over a JSON catalog snapshot: `search` runs the full
//! pipeline, `autocomplete` runs the name lookup, `show` prints one startup
//! profile and `categories` lists the categories. Every subcommand can print
//! JSON instead of the human layout with `--json`.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};
use starthub_search::RawSearchParams;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "starthub-search",
    about = "Search, rank and browse a startup catalog snapshot",
    version
)]
pub struct Cli {
    /// Catalog snapshot (JSON with startups, votes, comments, categories, users)
    #[arg(long, env = "STARTHUB_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Search configuration (JSON); missing fields take the defaults
    #[arg(long, env = "STARTHUB_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output JSON instead of the human layout
    #[arg(long, global = true)]
    pub json: bool,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search startups with filters, sorting and pagination
    Search {
        /// Free-text query; omit to browse by votes
        query: Option<String>,

        /// Comma-separated category ids, e.g. "1,2"
        #[arg(short, long)]
        categories: Option<String>,

        /// Only startups with at least this many votes
        #[arg(long, allow_negative_numbers = true)]
        min_votes: Option<i64>,

        /// Only startups with at least this many comments
        #[arg(long, allow_negative_numbers = true)]
        min_comments: Option<i64>,

        /// relevance, votes_asc, votes_desc, comments_asc or comments_desc
        #[arg(short, long)]
        sort_by: Option<String>,

        /// 1-based page number
        #[arg(short, long, allow_negative_numbers = true)]
        page: Option<i64>,

        /// Results per page (1-100, default 50)
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Suggest startups whose name contains the query
    Autocomplete {
        /// At least two characters
        query: String,

        /// Maximum suggestions (1-20, default 10)
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Show one startup with its category and owner
    Show {
        /// Startup id
        id: i64,
    },

    /// List categories
    Categories,
}

impl Commands {
    /// Raw search parameters for a `search` invocation.
    pub fn search_params(&self) -> Option<RawSearchParams> {
        match self {
            Commands::Search {
                query,
                categories,
                min_votes,
                min_comments,
                sort_by,
                page,
                limit,
            } => Some(RawSearchParams {
                query: query.clone(),
                categories: categories.clone(),
                min_votes: *min_votes,
                min_comments: *min_comments,
                sort_by: sort_by.clone(),
                page: *page,
                skip: None,
                limit: *limit,
            }),
            _ => None,
        }
    }
}
