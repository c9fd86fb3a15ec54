// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value objects that flow through a search request.
//!
//! Everything here is owned by a single request's call stack. The Catalog Store
//! owns the underlying rows; these are read-only projections rebuilt on every
//! query and never written back.
//!
//! | Rust Type           | Role                                              |
//! |---------------------|---------------------------------------------------|
//! | `Candidate`         | Startup row joined with vote/comment aggregates   |
//! | `ScoredCandidate`   | Candidate plus optional relevance score           |
//! | `SearchResult`      | One page of ranked candidates with totals         |
//! | `AutocompleteEntry` | `{id, name, description}` suggestion              |
//! | `StartupProfile`    | Candidate enriched with category and owner names  |
//!
//! # Invariants
//!
//! - **ScoredCandidate**: `relevance_score ∈ [0.0, 1.0]` whenever present.
//! - **SearchResult**: `total_pages ≥ 1` and `page ≥ 1`.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES: Type-safe identifiers
// =============================================================================

/// Startup identifier as assigned by the Catalog Store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct StartupId(pub i64);

/// Category identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct CategoryId(pub i64);

/// Identifier of the user owning a startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct UserId(pub i64);

impl From<i64> for StartupId {
    fn from(id: i64) -> Self {
        StartupId(id)
    }
}

impl From<i64> for CategoryId {
    fn from(id: i64) -> Self {
        CategoryId(id)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId(id)
    }
}

impl fmt::Display for StartupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// CANDIDATES
// =============================================================================

/// A startup as seen by search: the stored row plus coalesced aggregates.
///
/// `description` is never null here; stores project a missing description as
/// the empty string so the scorer always has two fields to look at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: StartupId,
    pub name: String,
    pub description: String,
    pub category_id: Option<CategoryId>,
    pub owner_id: UserId,
    pub total_votes: u64,
    pub total_comments: u64,
}

/// A candidate as it appears on a result page.
///
/// The score is `None` when the request never ran the scorer (a non-relevance
/// sort, or relevance with an empty query).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
}

impl ScoredCandidate {
    /// Wrap a candidate that was never scored.
    pub fn unscored(candidate: Candidate) -> Self {
        Self {
            candidate,
            relevance_score: None,
        }
    }

    /// Wrap a candidate with its relevance score.
    pub fn scored(candidate: Candidate, score: f64) -> Self {
        Self {
            candidate,
            relevance_score: Some(score),
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub results: Vec<ScoredCandidate>,
    pub total: usize,
    /// 1-based page number derived from `skip / limit + 1`.
    pub page: usize,
    pub total_pages: usize,
}

/// Minimal projection returned by autocomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteEntry {
    pub id: StartupId,
    pub name: String,
    pub description: String,
}

impl From<Candidate> for AutocompleteEntry {
    fn from(candidate: Candidate) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name,
            description: candidate.description,
        }
    }
}

// =============================================================================
// CATALOG REFERENCE DATA
// =============================================================================

/// A startup category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// The display subset of a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: UserId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl Owner {
    /// "First Last", or `None` when both parts are blank.
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// A candidate enriched with resolved reference data.
///
/// Built by projection from a fetched [`Candidate`]; the candidate itself is
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupProfile {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub category_name: Option<String>,
    pub owner_name: Option<String>,
}

impl StartupProfile {
    pub fn project(
        candidate: Candidate,
        category: Option<&Category>,
        owner: Option<&Owner>,
    ) -> Self {
        Self {
            category_name: category.map(|c| c.name.clone()),
            owner_name: owner.and_then(Owner::display_name),
            candidate,
        }
    }
}
