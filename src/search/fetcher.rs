// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate fetching: turn a request into a store query and run it.
//!
//! Which ordering the store applies depends on the strategy:
//!
//! | Strategy                | Store order         | Authoritative? |
//! |-------------------------|---------------------|----------------|
//! | votes_* / comments_*    | that aggregate      | yes            |
//! | relevance, empty query  | total_votes desc    | yes            |
//! | relevance, with query   | none (natural)      | no, re-ranked  |

use crate::catalog::{CandidateQuery, CandidateRows, CatalogStore, CoarseTextFilter, StoreOrder};
use crate::error::SearchError;
use crate::query::{SearchRequest, SortStrategy};
use crate::types::Candidate;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// The store ordering for a strategy, or `None` when the application ranks.
pub fn store_order(sort: SortStrategy, has_query: bool) -> Option<StoreOrder> {
    match sort {
        SortStrategy::VotesAsc => Some(StoreOrder::VotesAsc),
        SortStrategy::VotesDesc => Some(StoreOrder::VotesDesc),
        SortStrategy::CommentsAsc => Some(StoreOrder::CommentsAsc),
        SortStrategy::CommentsDesc => Some(StoreOrder::CommentsDesc),
        SortStrategy::Relevance if has_query => None,
        SortStrategy::Relevance => Some(StoreOrder::VotesDesc),
    }
}

/// Build the store query for a request.
pub fn candidate_query(request: &SearchRequest) -> CandidateQuery {
    let filters = request.filters();
    CandidateQuery {
        text: request.query().and_then(CoarseTextFilter::for_query),
        categories: filters.categories.clone(),
        min_votes: filters.min_votes,
        min_comments: filters.min_comments,
        order: store_order(request.sort(), request.query().is_some()),
    }
}

/// Fetch every candidate matching the request's coarse filters.
///
/// Store failures are passed through as `StoreUnavailable`; nothing is retried.
pub fn fetch_candidates<S: CatalogStore + ?Sized>(
    store: &S,
    request: &SearchRequest,
) -> Result<CandidateRows, SearchError> {
    let query = candidate_query(request);

    let fetched = store.query_candidates(&query).map_err(|e| {
        warn!(error = %e, "candidate query failed");
        SearchError::StoreUnavailable(e)
    })?;

    if let Some(order) = query.order {
        if !follows_order(&fetched.rows, order) {
            warn!(?order, "catalog store returned rows out of the requested order");
        }
    }
    debug!(
        rows = fetched.rows.len(),
        total = fetched.total,
        order = ?query.order,
        "fetched candidates"
    );
    Ok(fetched)
}

/// Whether adjacent rows never step backwards under `order`.
pub fn follows_order(rows: &[Candidate], order: StoreOrder) -> bool {
    rows.windows(2)
        .all(|pair| order.compare(&pair[0], &pair[1]) != Ordering::Greater)
}
