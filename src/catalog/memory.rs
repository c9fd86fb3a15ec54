// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory Catalog Store.
//!
//! Holds raw startup, vote and comment rows and answers each query the way a
//! relational store would: left-join the per-startup vote and comment counts
//! (zero when a startup has none), apply the predicates, then order. Nothing
//! is cached between queries, so every call sees the rows as they are now.
//!
//! All rows sit behind one `RwLock`; a query holds the read lock for its whole
//! duration, so both aggregates come from the same snapshot.
//!
//! # Snapshot format
//!
//! ```json
//! {
//!   "startups":   [{"id": 1, "name": "AI Vision", "description": null, "ownerId": 1, "categoryId": 2}],
//!   "votes":      [{"id": 1, "startupId": 1, "userId": 7}],
//!   "comments":   [{"id": 1, "startupId": 1, "userId": 7, "content": "nice"}],
//!   "categories": [{"id": 2, "name": "Fintech"}],
//!   "users":      [{"id": 1, "firstName": "Ada", "lastName": "Lovelace"}]
//! }
//! ```
//!
//! Only `startups` is required.

use super::{CandidateQuery, CandidateRows, CatalogStore};
use crate::error::StoreError;
use crate::types::{Candidate, Category, CategoryId, Owner, StartupId, UserId};
use crate::utils::contains_ignore_case;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// A stored startup row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupRow {
    pub id: StartupId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner_id: UserId,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRow {
    pub id: i64,
    pub startup_id: StartupId,
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRow {
    pub id: i64,
    pub startup_id: StartupId,
    pub user_id: UserId,
    #[serde(default)]
    pub content: String,
}

/// Serializable contents of a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub startups: Vec<StartupRow>,
    #[serde(default)]
    pub votes: Vec<VoteRow>,
    #[serde(default)]
    pub comments: Vec<CommentRow>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub users: Vec<Owner>,
}

/// Catalog Store over in-memory rows.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    rows: RwLock<CatalogSnapshot>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Startups are kept in ascending id order, which is the natural order
    /// queries fall back to. A repeated startup or category id keeps its last
    /// row, the same as a later `upsert_startup`.
    pub fn from_snapshot(mut snapshot: CatalogSnapshot) -> Self {
        let startups = snapshot.startups.len();
        keep_last_by_id(&mut snapshot.startups, |s| s.id);
        keep_last_by_id(&mut snapshot.categories, |c| c.id);
        if snapshot.startups.len() < startups {
            warn!(
                dropped = startups - snapshot.startups.len(),
                "snapshot repeats startup ids, keeping the last row of each"
            );
        }
        Self {
            rows: RwLock::new(snapshot),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let snapshot: CatalogSnapshot =
            serde_json::from_str(json).map_err(|e| StoreError::Snapshot(e.to_string()))?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        let json = fs::read_to_string(path)
            .map_err(|e| StoreError::Snapshot(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Copy of the current rows.
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.rows.read().clone()
    }

    /// Insert or replace a startup row.
    pub fn upsert_startup(&self, startup: StartupRow) {
        let mut rows = self.rows.write();
        match rows.startups.binary_search_by_key(&startup.id, |s| s.id) {
            Ok(pos) => rows.startups[pos] = startup,
            Err(pos) => rows.startups.insert(pos, startup),
        }
    }

    pub fn record_vote(&self, vote: VoteRow) {
        self.rows.write().votes.push(vote);
    }

    pub fn record_comment(&self, comment: CommentRow) {
        self.rows.write().comments.push(comment);
    }

    pub fn len(&self) -> usize {
        self.rows.read().startups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sort by id and drop all but the last row of each id.
fn keep_last_by_id<T, K: Ord>(rows: &mut Vec<T>, id: impl Fn(&T) -> K) {
    rows.reverse();
    rows.sort_by_key(|row| id(row));
    rows.dedup_by(|later, earlier| id(later) == id(earlier));
}

/// Per-startup vote and comment counts.
struct Aggregates {
    votes: HashMap<StartupId, u64>,
    comments: HashMap<StartupId, u64>,
}

impl Aggregates {
    fn compute(rows: &CatalogSnapshot) -> Self {
        let mut votes: HashMap<StartupId, u64> = HashMap::new();
        for vote in &rows.votes {
            *votes.entry(vote.startup_id).or_insert(0) += 1;
        }

        let mut comments: HashMap<StartupId, u64> = HashMap::new();
        for comment in &rows.comments {
            *comments.entry(comment.startup_id).or_insert(0) += 1;
        }

        Self { votes, comments }
    }

    /// Left join: missing counts coalesce to zero.
    fn project(&self, startup: &StartupRow) -> Candidate {
        Candidate {
            id: startup.id,
            name: startup.name.clone(),
            description: startup.description.clone().unwrap_or_default(),
            category_id: startup.category_id,
            owner_id: startup.owner_id,
            total_votes: self.votes.get(&startup.id).copied().unwrap_or(0),
            total_comments: self.comments.get(&startup.id).copied().unwrap_or(0),
        }
    }
}

impl CatalogStore for MemoryCatalog {
    fn query_candidates(&self, query: &CandidateQuery) -> Result<CandidateRows, StoreError> {
        let rows = self.rows.read();
        let aggregates = Aggregates::compute(&rows);

        let mut candidates: Vec<Candidate> = rows
            .startups
            .iter()
            .map(|startup| aggregates.project(startup))
            .filter(|candidate| query.admits(candidate))
            .collect();

        if let Some(order) = query.order {
            candidates.sort_by(|a, b| order.compare(a, b));
        }

        Ok(CandidateRows {
            total: candidates.len(),
            rows: candidates,
        })
    }

    fn query_by_name(&self, text: &str, limit: usize) -> Result<Vec<Candidate>, StoreError> {
        let rows = self.rows.read();
        let aggregates = Aggregates::compute(&rows);

        let mut matches: Vec<(String, Candidate)> = rows
            .startups
            .iter()
            .filter_map(|startup| {
                contains_ignore_case(&startup.name, text)
                    .then(|| (startup.name.to_lowercase(), aggregates.project(startup)))
            })
            .collect();

        matches.sort_by(|(a_key, a), (b_key, b)| a_key.cmp(b_key).then(a.id.cmp(&b.id)));
        matches.truncate(limit);
        Ok(matches.into_iter().map(|(_, candidate)| candidate).collect())
    }

    fn get_by_id(&self, id: StartupId) -> Result<Option<Candidate>, StoreError> {
        let rows = self.rows.read();
        let Ok(pos) = rows.startups.binary_search_by_key(&id, |s| s.id) else {
            return Ok(None);
        };
        let aggregates = Aggregates::compute(&rows);
        Ok(Some(aggregates.project(&rows.startups[pos])))
    }

    fn category(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        Ok(self
            .rows
            .read()
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    fn categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.rows.read().categories.clone())
    }

    fn owner(&self, id: UserId) -> Result<Option<Owner>, StoreError> {
        Ok(self.rows.read().users.iter().find(|u| u.id == id).cloned())
    }
}
