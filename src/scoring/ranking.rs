// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking for the relevance strategy.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Fetch order** - candidates with equal scores keep the order the store
//!    returned them in
//!
//! Zero-score candidates never make it into the ranked list. Other strategies
//! don't pass through here at all: their order comes from the store.

use crate::types::{Candidate, ScoredCandidate};
use std::cmp::Ordering;

/// Compare two scores for descending rank.
///
/// Uses `total_cmp` so the order is total even for NaN, though the scorer
/// never produces one.
#[inline]
pub fn compare_scores(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Drop zero-score candidates and order the rest by descending score.
///
/// `sort_by` is stable, which is what keeps fetch order for ties.
pub fn rank_by_relevance(scored: Vec<(Candidate, f64)>) -> Vec<ScoredCandidate> {
    let mut ranked: Vec<ScoredCandidate> = scored
        .into_iter()
        .filter(|(_, score)| *score > 0.0)
        .map(|(candidate, score)| ScoredCandidate::scored(candidate, score))
        .collect();

    ranked.sort_by(|a, b| {
        compare_scores(
            a.relevance_score.unwrap_or(0.0),
            b.relevance_score.unwrap_or(0.0),
        )
    });
    ranked
}
