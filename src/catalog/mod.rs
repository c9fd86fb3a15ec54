// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The Catalog Store seam.
//!
//! Search never owns startup, vote or comment rows. It asks a [`CatalogStore`]
//! for candidates matching a [`CandidateQuery`] and gets back rows already
//! joined with their vote and comment counts. A SQL-backed store pushes the
//! whole query down; [`MemoryCatalog`] evaluates it over in-memory rows and is
//! the reference for what each predicate means.
//!
//! # Coarse text filter
//!
//! The store-level text predicate is cheap and asymmetric:
//!
//! | Query length | Predicate (case-insensitive, name OR description) |
//! |--------------|---------------------------------------------------|
//! | 1 character  | field starts with the query                       |
//! | 2+           | field contains the query                          |
//!
//! A single character anywhere in a field matches nearly everything, so the
//! one-character case is restricted to the start of the field. This is a
//! different rule from the fine scorer's, and the two are kept apart on purpose.

mod memory;

pub use memory::{CatalogSnapshot, CommentRow, MemoryCatalog, StartupRow, VoteRow};

use crate::error::StoreError;
use crate::types::{Candidate, Category, CategoryId, Owner, StartupId, UserId};
use crate::utils::{char_len, contains_ignore_case, starts_with_ignore_case};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::Arc;

// =============================================================================
// COARSE TEXT FILTER
// =============================================================================

/// Store-level text predicate derived from the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoarseTextFilter {
    /// One-character query: the field must start with it.
    FieldPrefix(String),
    /// Two or more characters: the field must contain it.
    Substring(String),
}

impl CoarseTextFilter {
    /// Pick the predicate for a query. Blank queries have no text filter.
    pub fn for_query(query: &str) -> Option<Self> {
        let pattern = query.trim().to_lowercase();
        match char_len(&pattern) {
            0 => None,
            1 => Some(CoarseTextFilter::FieldPrefix(pattern)),
            _ => Some(CoarseTextFilter::Substring(pattern)),
        }
    }

    /// The lowercased, trimmed query text.
    pub fn pattern(&self) -> &str {
        match self {
            CoarseTextFilter::FieldPrefix(p) | CoarseTextFilter::Substring(p) => p,
        }
    }

    pub fn matches_field(&self, field: &str) -> bool {
        match self {
            CoarseTextFilter::FieldPrefix(p) => starts_with_ignore_case(field, p),
            CoarseTextFilter::Substring(p) => contains_ignore_case(field, p),
        }
    }

    /// Name OR description.
    pub fn matches(&self, name: &str, description: &str) -> bool {
        self.matches_field(name) || self.matches_field(description)
    }

    /// The equivalent SQL `ILIKE` pattern, with `%`, `_` and `\` escaped.
    pub fn like_pattern(&self) -> String {
        let escaped: String = self
            .pattern()
            .chars()
            .flat_map(|c| match c {
                '%' | '_' | '\\' => vec!['\\', c],
                c => vec![c],
            })
            .collect();
        match self {
            CoarseTextFilter::FieldPrefix(_) => format!("{}%", escaped),
            CoarseTextFilter::Substring(_) => format!("%{}%", escaped),
        }
    }
}

// =============================================================================
// STORE ORDER
// =============================================================================

/// Ordering the store applies on an aggregate column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOrder {
    VotesAsc,
    VotesDesc,
    CommentsAsc,
    CommentsDesc,
}

impl StoreOrder {
    /// Compare two candidates on this order's aggregate. Equal aggregates
    /// compare `Equal` so a stable sort keeps the store's natural order.
    pub fn compare(self, a: &Candidate, b: &Candidate) -> Ordering {
        match self {
            StoreOrder::VotesAsc => a.total_votes.cmp(&b.total_votes),
            StoreOrder::VotesDesc => b.total_votes.cmp(&a.total_votes),
            StoreOrder::CommentsAsc => a.total_comments.cmp(&b.total_comments),
            StoreOrder::CommentsDesc => b.total_comments.cmp(&a.total_comments),
        }
    }
}

// =============================================================================
// CANDIDATE QUERY
// =============================================================================

/// Everything the store needs to produce a candidate set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateQuery {
    pub text: Option<CoarseTextFilter>,
    /// Empty = any category. A startup without a category never matches a
    /// non-empty set.
    pub categories: BTreeSet<CategoryId>,
    pub min_votes: Option<u64>,
    pub min_comments: Option<u64>,
    pub order: Option<StoreOrder>,
}

impl CandidateQuery {
    /// Conjunction of every predicate in the query.
    pub fn admits(&self, candidate: &Candidate) -> bool {
        let text_ok = self
            .text
            .as_ref()
            .is_none_or(|f| f.matches(&candidate.name, &candidate.description));

        let category_ok = self.categories.is_empty()
            || candidate
                .category_id
                .is_some_and(|id| self.categories.contains(&id));

        let votes_ok = self.min_votes.is_none_or(|min| candidate.total_votes >= min);
        let comments_ok = self
            .min_comments
            .is_none_or(|min| candidate.total_comments >= min);

        text_ok && category_ok && votes_ok && comments_ok
    }
}

/// Rows returned for a [`CandidateQuery`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateRows {
    pub rows: Vec<Candidate>,
    /// Rows matching the query, before any application-level filtering.
    pub total: usize,
}

// =============================================================================
// STORE TRAIT
// =============================================================================

/// Read-only access to the startup catalog.
///
/// Implementations must coalesce missing aggregates to zero and project a
/// missing description as the empty string.
pub trait CatalogStore: Send + Sync {
    /// Candidates matching `query`, in the requested order (natural store
    /// order when `query.order` is `None`), plus their count.
    fn query_candidates(&self, query: &CandidateQuery) -> Result<CandidateRows, StoreError>;

    /// Up to `limit` startups whose name contains `text` (case-insensitive),
    /// ordered alphabetically by name.
    fn query_by_name(&self, text: &str, limit: usize) -> Result<Vec<Candidate>, StoreError>;

    fn get_by_id(&self, id: StartupId) -> Result<Option<Candidate>, StoreError>;

    fn category(&self, id: CategoryId) -> Result<Option<Category>, StoreError>;

    /// All categories, ordered by id.
    fn categories(&self) -> Result<Vec<Category>, StoreError>;

    fn owner(&self, id: UserId) -> Result<Option<Owner>, StoreError>;
}

impl<T: CatalogStore + ?Sized> CatalogStore for Arc<T> {
    fn query_candidates(&self, query: &CandidateQuery) -> Result<CandidateRows, StoreError> {
        (**self).query_candidates(query)
    }

    fn query_by_name(&self, text: &str, limit: usize) -> Result<Vec<Candidate>, StoreError> {
        (**self).query_by_name(text, limit)
    }

    fn get_by_id(&self, id: StartupId) -> Result<Option<Candidate>, StoreError> {
        (**self).get_by_id(id)
    }

    fn category(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        (**self).category(id)
    }

    fn categories(&self) -> Result<Vec<Category>, StoreError> {
        (**self).categories()
    }

    fn owner(&self, id: UserId) -> Result<Option<Owner>, StoreError> {
        (**self).owner(id)
    }
}
