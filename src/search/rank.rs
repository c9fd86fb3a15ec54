// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking and pagination of fetched candidates.
//!
//! Three paths, picked by the request:
//!
//! - **Store-ordered** (non-relevance sort): keep the fetch order, slice,
//!   report the store's count.
//! - **Relevance with query**: score every candidate, drop zeros, sort by
//!   score, slice, report the count *after* dropping zeros.
//! - **Relevance without query**: the store already ordered by votes
//!   descending; slice and report the store's count.
//!
//! The relevance path reports a post-filter `total` while the others report a
//! pre-filter one. Callers comparing totals across strategies will see the
//! difference; it is kept as-is.

use crate::catalog::CandidateRows;
use crate::config::SearchConfig;
use crate::contracts::{check_no_zero_scores, check_page_shape, check_ranked_descending, check_score_bounded};
use crate::error::SearchError;
use crate::query::{Pagination, SearchRequest};
use crate::scoring::{ranking::rank_by_relevance, FineRelevanceScorer};
use crate::search::cancel::CancellationToken;
use crate::types::{Candidate, ScoredCandidate, SearchResult};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// `ceil(total / limit)`, never below 1. A non-positive limit yields 1
/// instead of dividing by zero.
pub fn total_pages(total: usize, limit: i64) -> usize {
    if limit <= 0 {
        return 1;
    }
    total.div_ceil(limit as usize).max(1)
}

/// Score every candidate against the query.
///
/// A plain map over the list: no shared state between candidates, so above
/// `parallel_threshold` the map runs on the rayon pool. Output order matches
/// input order either way. Returns `Cancelled` as soon as the token is set.
pub fn score_candidates(
    scorer: &FineRelevanceScorer,
    rows: Vec<Candidate>,
    cancel: &CancellationToken,
    parallel_threshold: usize,
) -> Result<Vec<(Candidate, f64)>, SearchError> {
    let score_one = |candidate: Candidate| -> Option<(Candidate, f64)> {
        if cancel.is_cancelled() {
            return None;
        }
        let score = scorer.score(&candidate);
        check_score_bounded(score);
        Some((candidate, score))
    };

    #[cfg(feature = "parallel")]
    let scored: Option<Vec<(Candidate, f64)>> = if rows.len() >= parallel_threshold {
        rows.into_par_iter().map(score_one).collect()
    } else {
        rows.into_iter().map(score_one).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let scored: Option<Vec<(Candidate, f64)>> = {
        let _ = parallel_threshold;
        rows.into_iter().map(score_one).collect()
    };

    scored.ok_or(SearchError::Cancelled)
}

/// Cut one page out of an ordered list.
pub fn paginate(ordered: Vec<ScoredCandidate>, total: usize, pagination: Pagination) -> SearchResult {
    let results: Vec<ScoredCandidate> = ordered
        .into_iter()
        .skip(pagination.skip())
        .take(pagination.limit())
        .collect();

    let result = SearchResult {
        results,
        total,
        page: pagination.page(),
        total_pages: total_pages(total, pagination.limit() as i64),
    };
    check_page_shape(&result, pagination.limit());
    result
}

/// Order, filter and slice fetched candidates for a request.
pub fn rank(
    request: &SearchRequest,
    fetched: CandidateRows,
    cancel: &CancellationToken,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    let scorer = request
        .query()
        .filter(|_| request.sort().is_relevance())
        .and_then(FineRelevanceScorer::new);

    let Some(scorer) = scorer else {
        let ordered = fetched.rows.into_iter().map(ScoredCandidate::unscored).collect();
        return Ok(paginate(ordered, fetched.total, request.pagination()));
    };

    let fetched_count = fetched.rows.len();
    let scored = score_candidates(&scorer, fetched.rows, cancel, config.parallel_threshold)?;
    let ranked = rank_by_relevance(scored);
    debug!(
        fetched = fetched_count,
        relevant = ranked.len(),
        "scored candidates"
    );

    let total = ranked.len();
    let result = paginate(ranked, total, request.pagination());
    check_ranked_descending(&result);
    check_no_zero_scores(&result);
    Ok(result)
}
