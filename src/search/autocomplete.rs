// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Name-based suggestions for search-as-you-type.
//!
//! A straight substring lookup on startup names. No scoring, no filters, no
//! aggregates in the output.

use crate::catalog::CatalogStore;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::AutocompleteEntry;
use crate::utils::char_len;
use tracing::{debug, warn};

/// Check an autocomplete limit against `[1, config.autocomplete_limit_cap()]`.
pub fn autocomplete_limit(limit: Option<i64>, config: &SearchConfig) -> Result<usize, SearchError> {
    let limit = limit.unwrap_or(config.default_autocomplete_limit as i64);
    let max = config.autocomplete_limit_cap();
    if limit < 1 || limit > max as i64 {
        return Err(SearchError::InvalidPagination {
            field: "limit",
            value: limit,
            min: 1,
            max: max as i64,
        });
    }
    Ok(limit as usize)
}

/// Up to `limit` startups whose name contains `query`, alphabetically.
///
/// The query is trimmed first. Anything shorter than
/// `config.min_autocomplete_chars` returns an empty list without touching the
/// store.
pub fn autocomplete<S: CatalogStore + ?Sized>(
    store: &S,
    query: &str,
    limit: Option<i64>,
    config: &SearchConfig,
) -> Result<Vec<AutocompleteEntry>, SearchError> {
    let limit = autocomplete_limit(limit, config)?;

    let query = query.trim();
    if char_len(query) < config.min_autocomplete_chars {
        return Ok(Vec::new());
    }

    let matches = store.query_by_name(query, limit).map_err(|e| {
        warn!(error = %e, "autocomplete query failed");
        SearchError::StoreUnavailable(e)
    })?;

    debug!(matches = matches.len(), "autocomplete");
    Ok(matches
        .into_iter()
        .take(limit)
        .map(AutocompleteEntry::from)
        .collect())
}
