// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the search pipeline.
//!
//! Debug-mode assertions for the properties every search must satisfy. They
//! compile to nothing in release builds.
//!
//! | Contract Function              | Property                                  |
//! |--------------------------------|-------------------------------------------|
//! | `check_score_bounded`          | relevance score ∈ [0.0, 1.0]              |
//! | `check_ranked_descending`      | relevance page is non-increasing in score |
//! | `check_no_zero_scores`         | scored pages never contain a 0.0 score    |
//! | `check_page_shape`             | page ≥ 1, total_pages ≥ 1, len ≤ limit    |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Static assertion that the scoring tiers stay ordered and bounded.
const _: () = {
    use crate::scoring::{
        EXACT_MATCH_SCORE, MULTI_TOKEN_BASE_SCORE, MULTI_TOKEN_SPAN, NO_MATCH_SCORE,
        SHORT_WORD_PREFIX_SCORE, SUBSTRING_SCORE, WHOLE_WORD_SCORE, WORD_PREFIX_SCORE,
    };

    assert!(EXACT_MATCH_SCORE <= 1.0);
    assert!(EXACT_MATCH_SCORE > WORD_PREFIX_SCORE);
    assert!(WORD_PREFIX_SCORE > WHOLE_WORD_SCORE);
    // best multi-token match stays below a whole-word match
    assert!(WHOLE_WORD_SCORE > MULTI_TOKEN_BASE_SCORE + MULTI_TOKEN_SPAN);
    // worst multi-token match stays above a plain substring
    assert!(MULTI_TOKEN_BASE_SCORE > SUBSTRING_SCORE);
    assert!(SUBSTRING_SCORE > NO_MATCH_SCORE);
    assert!(NO_MATCH_SCORE >= 0.0);
    assert!(SHORT_WORD_PREFIX_SCORE > NO_MATCH_SCORE && SHORT_WORD_PREFIX_SCORE <= 1.0);
};

use crate::types::SearchResult;

// ============================================================================
// SCORE CONTRACTS
// ============================================================================

/// # Panics (debug builds only)
/// Panics if `score` is NaN or outside `[0.0, 1.0]`.
#[inline]
pub fn check_score_bounded(score: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&score),
        "Contract violation: relevance score {} outside [0, 1]",
        score
    );
}

/// # Panics (debug builds only)
/// Panics if any adjacent pair on the page increases in score.
#[inline]
pub fn check_ranked_descending(result: &SearchResult) {
    debug_assert!(
        result.results.windows(2).all(|pair| {
            pair[0].relevance_score.unwrap_or(0.0) >= pair[1].relevance_score.unwrap_or(0.0)
        }),
        "Contract violation: relevance page not sorted by descending score"
    );
}

/// # Panics (debug builds only)
/// Panics if a scored entry carries 0.0.
#[inline]
pub fn check_no_zero_scores(result: &SearchResult) {
    debug_assert!(
        result
            .results
            .iter()
            .all(|r| r.relevance_score.is_none_or(|s| s > 0.0)),
        "Contract violation: zero-score candidate on a relevance page"
    );
}

// ============================================================================
// PAGE CONTRACTS
// ============================================================================

/// # Panics (debug builds only)
/// Panics if page numbering or page size is inconsistent.
#[inline]
pub fn check_page_shape(result: &SearchResult, limit: usize) {
    debug_assert!(result.page >= 1, "Contract violation: page {} < 1", result.page);
    debug_assert!(
        result.total_pages >= 1,
        "Contract violation: total_pages {} < 1",
        result.total_pages
    );
    debug_assert!(
        result.results.len() <= limit,
        "Contract violation: page holds {} results, limit {}",
        result.results.len(),
        limit
    );
}
