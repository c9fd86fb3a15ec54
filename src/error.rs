// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the search pipeline.
//!
//! Two layers: [`StoreError`] is what a Catalog Store reports, [`SearchError`]
//! is what callers of the search service see. Client errors (bad filters, bad
//! pagination, unknown ids) are raised before or instead of store work; store
//! failures surface as `StoreUnavailable` and are never retried here.

use crate::types::StartupId;
use thiserror::Error;

/// Failures reported by a Catalog Store implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not be reached or refused the query.
    #[error("catalog store unavailable: {0}")]
    Unavailable(String),

    /// A catalog snapshot could not be read or parsed.
    #[error("invalid catalog snapshot: {0}")]
    Snapshot(String),
}

/// Errors surfaced by [`SearchService`](crate::SearchService).
#[derive(Debug, Error)]
pub enum SearchError {
    /// A filter value failed validation (non-numeric category, negative minimum).
    #[error("invalid filter value '{token}'")]
    InvalidFilter { token: String },

    /// `limit` or `page` outside the accepted range.
    #[error("invalid pagination: {field} = {value} (expected {min}..={max})")]
    InvalidPagination {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// No startup with this id.
    #[error("startup {0} not found")]
    NotFound(StartupId),

    /// The Catalog Store failed; no partial results are returned.
    #[error("search unavailable")]
    StoreUnavailable(#[from] StoreError),

    /// The caller cancelled the request while candidates were being scored.
    #[error("search cancelled")]
    Cancelled,
}

impl SearchError {
    /// True for errors caused by the request itself rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SearchError::InvalidFilter { .. }
                | SearchError::InvalidPagination { .. }
                | SearchError::NotFound(_)
        )
    }
}

/// Rejected [`SearchConfig`](crate::SearchConfig) values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be at least 1")]
    Zero { field: &'static str },

    #[error("{default_field} ({default}) exceeds {max_field} ({max})")]
    DefaultAboveMax {
        default_field: &'static str,
        default: usize,
        max_field: &'static str,
        max: usize,
    },

    #[error("{field} ({value}) exceeds the hard cap of {cap}")]
    AboveCap {
        field: &'static str,
        value: usize,
        cap: usize,
    },
}
