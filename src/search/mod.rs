// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search pipeline: fetch, score, rank, paginate.
//!
//! Everything before this module prepares a request or scores a single
//! candidate. Here the pieces meet: candidates come out of the Catalog Store,
//! get ranked, and one page goes back to the caller.

pub mod autocomplete;
pub mod cancel;
pub mod engine;
pub mod fetcher;
pub mod rank;

pub use autocomplete::{autocomplete, autocomplete_limit};
pub use cancel::CancellationToken;
pub use engine::SearchService;
pub use fetcher::{candidate_query, fetch_candidates, store_order};
pub use rank::{paginate, rank, score_candidates, total_pages};
