// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::catalog::{CatalogSnapshot, CommentRow, MemoryCatalog, StartupRow, VoteRow};
use crate::types::{Candidate, Category, CategoryId, Owner, StartupId, UserId};

/// Create a candidate with the given vote count and no comments or category.
///
/// This is the canonical implementation used across all tests.
pub fn make_candidate(id: i64, name: &str, votes: u64) -> Candidate {
    Candidate {
        id: StartupId(id),
        name: name.to_string(),
        description: format!("Description for {}", name),
        category_id: None,
        owner_id: UserId(1),
        total_votes: votes,
        total_comments: 0,
    }
}

/// Create a startup row.
pub fn make_startup(id: i64, name: &str, description: &str, category: Option<i64>) -> StartupRow {
    StartupRow {
        id: StartupId(id),
        name: name.to_string(),
        description: Some(description.to_string()),
        owner_id: UserId(1),
        category_id: category.map(CategoryId),
    }
}

/// `count` vote rows for a startup, with ids starting at `first_id`.
pub fn make_votes(startup: i64, count: usize, first_id: i64) -> Vec<VoteRow> {
    (0..count as i64)
        .map(|i| VoteRow {
            id: first_id + i,
            startup_id: StartupId(startup),
            user_id: UserId(100 + i),
        })
        .collect()
}

/// `count` comment rows for a startup, with ids starting at `first_id`.
pub fn make_comments(startup: i64, count: usize, first_id: i64) -> Vec<CommentRow> {
    (0..count as i64)
        .map(|i| CommentRow {
            id: first_id + i,
            startup_id: StartupId(startup),
            user_id: UserId(100 + i),
            content: format!("Comment {}", i),
        })
        .collect()
}

/// The reference catalog used by integration tests.
///
/// | id | name               | category | votes | comments |
/// |----|--------------------|----------|-------|----------|
/// | 1  | AI Vision Platform | 1        | 5     | 2        |
/// | 2  | FinTech Solutions  | 2        | 4     | 0        |
/// | 3  | EduTech Learning   | 3        | 9     | 1        |
/// | 4  | HealthTech AI      | 1        | 0     | 3        |
/// | 5  | Brain Labs         | 2        | 7     | 0        |
/// | 6  | Quiet Garden       | none     | 1     | 0        |
pub fn sample_snapshot() -> CatalogSnapshot {
    let startups = vec![
        make_startup(1, "AI Vision Platform", "Plataforma de visión artificial con IA", Some(1)),
        make_startup(2, "FinTech Solutions", "Soluciones financieras innovadoras", Some(2)),
        make_startup(3, "EduTech Learning", "Plataforma educativa con IA", Some(3)),
        make_startup(4, "HealthTech AI", "Tecnología de salud con inteligencia artificial", Some(1)),
        make_startup(5, "Brain Labs", "Neuroscience tooling", Some(2)),
        StartupRow {
            id: StartupId(6),
            name: "Quiet Garden".to_string(),
            description: None,
            owner_id: UserId(2),
            category_id: None,
        },
    ];

    let votes = [
        make_votes(1, 5, 1),
        make_votes(2, 4, 10),
        make_votes(3, 9, 20),
        make_votes(5, 7, 30),
        make_votes(6, 1, 40),
    ]
    .concat();

    let comments = [
        make_comments(1, 2, 1),
        make_comments(3, 1, 10),
        make_comments(4, 3, 20),
    ]
    .concat();

    CatalogSnapshot {
        startups,
        votes,
        comments,
        categories: vec![
            Category {
                id: CategoryId(1),
                name: "Artificial Intelligence".to_string(),
                description: None,
            },
            Category {
                id: CategoryId(2),
                name: "Fintech".to_string(),
                description: Some("Financial services".to_string()),
            },
            Category {
                id: CategoryId(3),
                name: "Education".to_string(),
                description: None,
            },
        ],
        users: vec![Owner {
            id: UserId(1),
            first_name: Some("Search".to_string()),
            last_name: Some("Tester".to_string()),
        }],
    }
}

/// [`sample_snapshot`] loaded into a [`MemoryCatalog`].
pub fn sample_catalog() -> MemoryCatalog {
    MemoryCatalog::from_snapshot(sample_snapshot())
}
