// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Startup discovery search: filter, rank and paginate startups from a catalog.
//!
//! There is no index. Each query asks the Catalog Store for candidates that
//! pass a coarse text filter and the structural filters, then (for relevance
//! sorting with a query) scores them with a tiered matcher and re-ranks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  query.rs   │────▶│  fetcher.rs  │────▶│   rank.rs    │
//! │ (normalize, │     │ (CatalogStore│     │ (score, sort,│
//! │  SortStrat.)│     │   query)     │     │  paginate)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌─────────────┐     ┌──────────────┐
//!                     │ catalog/    │     │  scoring/    │
//!                     │ (store trait│     │ (FineRelev-  │
//!                     │  + memory)  │     │  anceScorer) │
//!                     └─────────────┘     └──────────────┘
//! ```
//!
//! # Module map
//!
//! | Rust Module        | Role                                        |
//! |--------------------|---------------------------------------------|
//! | `query`            | Raw parameters → `SearchRequest`            |
//! | `catalog`          | `CatalogStore` seam, coarse filter, memory  |
//! | `scoring`          | Tiered relevance scorer, ranking helpers    |
//! | `search`           | Fetch, rank, autocomplete, `SearchService`  |
//! | `contracts`        | Debug-mode pipeline assertions              |
//!
//! # Usage
//!
//! ```
//! use starthub_search::{MemoryCatalog, RawSearchParams, SearchService};
//!
//! let catalog = MemoryCatalog::from_json(
//!     r#"{"startups": [{"id": 1, "name": "FinTech Solutions", "ownerId": 1}]}"#,
//! ).unwrap();
//! let service = SearchService::new(catalog);
//!
//! let page = service
//!     .search_params(&RawSearchParams { query: Some("fin".into()), ..Default::default() })
//!     .unwrap();
//! assert_eq!(page.total, 1);
//! assert_eq!(page.results[0].relevance_score, Some(0.9));
//! ```

pub mod catalog;
pub mod config;
pub mod contracts;
pub mod error;
pub mod query;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod types;
pub mod utils;

pub use catalog::{
    CandidateQuery, CandidateRows, CatalogSnapshot, CatalogStore, CoarseTextFilter, CommentRow,
    MemoryCatalog, StartupRow, StoreOrder, VoteRow,
};
pub use config::SearchConfig;
pub use error::{ConfigError, SearchError, StoreError};
pub use query::{
    normalize_request, parse_categories, Pagination, RawSearchParams, SearchFilters,
    SearchRequest, SortStrategy,
};
pub use scoring::{relevance_score, FineRelevanceScorer, MatchTier};
pub use search::{total_pages, CancellationToken, SearchService};
pub use types::{
    AutocompleteEntry, Candidate, Category, CategoryId, Owner, ScoredCandidate, SearchResult,
    StartupId, StartupProfile, UserId,
};
