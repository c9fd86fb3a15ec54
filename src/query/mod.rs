// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization: raw request parameters in, canonical [`SearchRequest`] out.
//!
//! All validation lives here so that nothing malformed ever reaches the
//! Catalog Store. Two rules are deliberately lenient:
//!
//! - an unknown or missing sort key means [`SortStrategy::Relevance`];
//! - an empty category string means "no category filter".
//!
//! Everything else that fails to parse (non-numeric category token, negative
//! minimums, out-of-range limit or page) is rejected with a client error.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::CategoryId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// SORT STRATEGY
// =============================================================================

/// How a result list gets its order.
///
/// `Relevance` is the only strategy ranked in the application; the others are
/// ordered by the store on an aggregate column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    #[default]
    Relevance,
    VotesAsc,
    VotesDesc,
    CommentsAsc,
    CommentsDesc,
}

impl SortStrategy {
    pub const ALL: [SortStrategy; 5] = [
        SortStrategy::Relevance,
        SortStrategy::VotesAsc,
        SortStrategy::VotesDesc,
        SortStrategy::CommentsAsc,
        SortStrategy::CommentsDesc,
    ];

    /// Parse a sort key. Never fails: unknown keys fall back to `Relevance`.
    ///
    /// Accepts the English keys and the legacy Spanish ones
    /// (`relevancia`, `votos_desc`, `comentarios_asc`, ...), case-insensitively.
    pub fn parse(key: Option<&str>) -> Self {
        let Some(key) = key else {
            return SortStrategy::Relevance;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "votes_asc" | "votos_asc" => SortStrategy::VotesAsc,
            "votes_desc" | "votos_desc" => SortStrategy::VotesDesc,
            "comments_asc" | "comentarios_asc" => SortStrategy::CommentsAsc,
            "comments_desc" | "comentarios_desc" => SortStrategy::CommentsDesc,
            _ => SortStrategy::Relevance,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortStrategy::Relevance => "relevance",
            SortStrategy::VotesAsc => "votes_asc",
            SortStrategy::VotesDesc => "votes_desc",
            SortStrategy::CommentsAsc => "comments_asc",
            SortStrategy::CommentsDesc => "comments_desc",
        }
    }

    pub fn is_relevance(self) -> bool {
        self == SortStrategy::Relevance
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// FILTERS AND PAGINATION
// =============================================================================

/// Structural filters, combined with AND.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Empty set = any category.
    pub categories: BTreeSet<CategoryId>,
    /// Inclusive lower bound on `total_votes`.
    pub min_votes: Option<u64>,
    /// Inclusive lower bound on `total_comments`.
    pub min_comments: Option<u64>,
}

/// A validated `(skip, limit)` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    skip: usize,
    limit: usize,
}

impl Pagination {
    /// Build a window with `limit ∈ [1, max_limit]`.
    pub fn new(skip: usize, limit: usize, max_limit: usize) -> Result<Self, SearchError> {
        if limit == 0 || limit > max_limit {
            return Err(SearchError::InvalidPagination {
                field: "limit",
                value: limit as i64,
                min: 1,
                max: max_limit as i64,
            });
        }
        Ok(Self { skip, limit })
    }

    /// Build a window from a 1-based page number.
    pub fn from_page(page: usize, limit: usize, max_limit: usize) -> Result<Self, SearchError> {
        if page == 0 {
            return Err(SearchError::InvalidPagination {
                field: "page",
                value: 0,
                min: 1,
                max: i64::MAX,
            });
        }
        Self::new((page - 1).saturating_mul(limit), limit, max_limit)
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// 1-based page number this window starts on.
    pub fn page(&self) -> usize {
        self.skip / self.limit + 1
    }
}

// =============================================================================
// SEARCH REQUEST
// =============================================================================

/// Canonical, immutable search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    query: Option<String>,
    filters: SearchFilters,
    sort: SortStrategy,
    pagination: Pagination,
}

impl SearchRequest {
    /// The query is trimmed; a blank query is stored as `None`.
    pub fn new(
        query: Option<&str>,
        filters: SearchFilters,
        sort: SortStrategy,
        pagination: Pagination,
    ) -> Self {
        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);
        Self {
            query,
            filters,
            sort,
            pagination,
        }
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn sort(&self) -> SortStrategy {
        self.sort
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// True when this request runs the relevance scorer.
    pub fn is_scored(&self) -> bool {
        self.sort.is_relevance() && self.query.is_some()
    }
}

/// Request parameters as a caller hands them over, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSearchParams {
    pub query: Option<String>,
    /// Comma-separated category ids, e.g. `"1,2"`.
    pub categories: Option<String>,
    pub min_votes: Option<i64>,
    pub min_comments: Option<i64>,
    pub sort_by: Option<String>,
    /// 1-based page number; takes precedence over `skip`.
    pub page: Option<i64>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Parse `"1, 2,3"` into a category set.
///
/// Blank input yields the empty set. Any token that is not an integer
/// rejects the whole string.
pub fn parse_categories(raw: &str) -> Result<BTreeSet<CategoryId>, SearchError> {
    if raw.trim().is_empty() {
        return Ok(BTreeSet::new());
    }

    raw.split(',')
        .map(str::trim)
        .map(|token| {
            token
                .parse::<i64>()
                .map(CategoryId)
                .map_err(|_| SearchError::InvalidFilter {
                    token: token.to_string(),
                })
        })
        .collect()
}

fn non_negative(value: Option<i64>) -> Result<Option<u64>, SearchError> {
    match value {
        Some(v) if v < 0 => Err(SearchError::InvalidFilter {
            token: v.to_string(),
        }),
        Some(v) => Ok(Some(v as u64)),
        None => Ok(None),
    }
}

fn bounded_limit(limit: Option<i64>, config: &SearchConfig) -> Result<usize, SearchError> {
    let limit = limit.unwrap_or(config.default_limit as i64);
    let max = config.search_limit_cap();
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

/// Validate raw parameters into a [`SearchRequest`].
pub fn normalize_request(
    params: &RawSearchParams,
    config: &SearchConfig,
) -> Result<SearchRequest, SearchError> {
    let categories = match params.categories.as_deref() {
        Some(raw) => parse_categories(raw)?,
        None => BTreeSet::new(),
    };

    let filters = SearchFilters {
        categories,
        min_votes: non_negative(params.min_votes)?,
        min_comments: non_negative(params.min_comments)?,
    };

    let limit = bounded_limit(params.limit, config)?;

    let pagination = match (params.page, params.skip) {
        (Some(page), _) if page < 1 => {
            return Err(SearchError::InvalidPagination {
                field: "page",
                value: page,
                min: 1,
                max: i64::MAX,
            })
        }
        (Some(page), _) => Pagination::from_page(page as usize, limit, config.search_limit_cap())?,
        (None, Some(skip)) if skip < 0 => {
            return Err(SearchError::InvalidPagination {
                field: "skip",
                value: skip,
                min: 0,
                max: i64::MAX,
            })
        }
        (None, skip) => Pagination::new(skip.unwrap_or(0) as usize, limit, config.search_limit_cap())?,
    };

    Ok(SearchRequest::new(
        params.query.as_deref(),
        filters,
        SortStrategy::parse(params.sort_by.as_deref()),
        pagination,
    ))
}
