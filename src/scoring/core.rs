// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fine relevance scorer.
//!
//! Tiered matching over two fields (name, description). Each field is scored
//! independently and the candidate keeps the maximum. Both sides are
//! normalized with [`normalize`](crate::utils::normalize) first.
//!
//! # Tiers
//!
//! Short queries (≤ 2 characters) only ever match at the start of a word:
//!
//! | Rule                          | Score |
//! |-------------------------------|-------|
//! | some word starts with query   | 0.8   |
//! | otherwise                     | 0.0   |
//!
//! Longer queries walk the table top-down, first match wins:
//!
//! | Tier | Rule                                         | Score                       |
//! |------|----------------------------------------------|-----------------------------|
//! | a    | field equals query                           | 1.0                         |
//! | b    | some word starts with query                  | 0.9                         |
//! | c    | some word equals query                       | 0.8                         |
//! | d    | multi-token query, ≥1 token inside some word | 0.4 + matched/total × 0.3   |
//! | e    | query is a substring of the field            | 0.3                         |
//! | f    | otherwise                                    | 0.0                         |
//!
//! Tier c can only fire when tier b did not, which for a whole-word match means
//! never: a word equal to the query also starts with it. The rule stays in the
//! table so the tier order is explicit.
//!
//! # Key Invariant: Bounded Score
//!
//! Every score lies in `[0.0, 1.0]`. Tier d tops out at 0.7 and bottoms out
//! just above 0.4, so it sits strictly between whole-word and substring
//! matches. The const block in `contracts.rs` checks these relations at
//! compile time.

use crate::types::Candidate;
use crate::utils::{char_len, normalize, words};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Queries up to this many characters use the short-query rule.
pub const SHORT_QUERY_MAX_CHARS: usize = 2;

/// Short query: some word of the field starts with it.
pub const SHORT_WORD_PREFIX_SCORE: f64 = 0.8;

/// Tier a: full normalized field equals the query.
pub const EXACT_MATCH_SCORE: f64 = 1.0;

/// Tier b: some word of the field starts with the query.
pub const WORD_PREFIX_SCORE: f64 = 0.9;

/// Tier c: some word of the field equals the query.
pub const WHOLE_WORD_SCORE: f64 = 0.8;

/// Tier d: floor of the multi-token score.
pub const MULTI_TOKEN_BASE_SCORE: f64 = 0.4;

/// Tier d: span added in proportion to the share of matched tokens.
pub const MULTI_TOKEN_SPAN: f64 = 0.3;

/// Tier e: the query appears anywhere in the field.
pub const SUBSTRING_SCORE: f64 = 0.3;

/// Tier f.
pub const NO_MATCH_SCORE: f64 = 0.0;

// =============================================================================
// MATCH TIERS
// =============================================================================

/// Which rule decided a field's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    ShortWordPrefix,
    Exact,
    WordPrefix,
    WholeWord,
    MultiToken { matched: usize, total: usize },
    Substring,
    NoMatch,
}

impl MatchTier {
    pub fn score(self) -> f64 {
        match self {
            MatchTier::ShortWordPrefix => SHORT_WORD_PREFIX_SCORE,
            MatchTier::Exact => EXACT_MATCH_SCORE,
            MatchTier::WordPrefix => WORD_PREFIX_SCORE,
            MatchTier::WholeWord => WHOLE_WORD_SCORE,
            MatchTier::MultiToken { matched, total } => {
                MULTI_TOKEN_BASE_SCORE + (matched as f64 / total as f64) * MULTI_TOKEN_SPAN
            }
            MatchTier::Substring => SUBSTRING_SCORE,
            MatchTier::NoMatch => NO_MATCH_SCORE,
        }
    }
}

// =============================================================================
// FINE RELEVANCE SCORER
// =============================================================================

/// Application-level scorer for a single query.
///
/// The query is normalized once at construction; scoring a candidate borrows
/// the scorer immutably, so one scorer can be shared across threads.
#[derive(Debug, Clone)]
pub struct FineRelevanceScorer {
    query: String,
    query_len: usize,
    tokens: Vec<String>,
}

impl FineRelevanceScorer {
    /// `None` for a query that is blank after normalization.
    pub fn new(query: &str) -> Option<Self> {
        let query = normalize(query);
        if query.is_empty() {
            return None;
        }
        Some(Self {
            query_len: char_len(&query),
            tokens: words(&query).map(str::to_string).collect(),
            query,
        })
    }

    /// The normalized query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Decide which tier a single field falls into.
    pub fn classify_field(&self, field: &str) -> MatchTier {
        let field = normalize(field);
        if field.is_empty() {
            return MatchTier::NoMatch;
        }

        let field_words: Vec<&str> = words(&field).collect();
        let query = self.query.as_str();

        if self.query_len <= SHORT_QUERY_MAX_CHARS {
            return if field_words.iter().any(|w| w.starts_with(query)) {
                MatchTier::ShortWordPrefix
            } else {
                MatchTier::NoMatch
            };
        }

        if field == query {
            return MatchTier::Exact;
        }

        if field_words.iter().any(|w| w.starts_with(query)) {
            return MatchTier::WordPrefix;
        }

        if field_words.iter().any(|w| *w == query) {
            return MatchTier::WholeWord;
        }

        if self.tokens.len() > 1 {
            let matched = self
                .tokens
                .iter()
                .filter(|token| field_words.iter().any(|w| w.contains(token.as_str())))
                .count();
            if matched > 0 {
                return MatchTier::MultiToken {
                    matched,
                    total: self.tokens.len(),
                };
            }
        }

        if field.contains(query) {
            return MatchTier::Substring;
        }

        MatchTier::NoMatch
    }

    /// Score one field.
    pub fn score_field(&self, field: &str) -> f64 {
        self.classify_field(field).score()
    }

    /// Score a candidate: the better of its name and description.
    pub fn score(&self, candidate: &Candidate) -> f64 {
        self.score_field(&candidate.name)
            .max(self.score_field(&candidate.description))
    }
}

/// One-shot scoring of a candidate against raw query text.
///
/// Blank queries score 0.0.
pub fn relevance_score(query: &str, candidate: &Candidate) -> f64 {
    FineRelevanceScorer::new(query).map_or(NO_MATCH_SCORE, |scorer| scorer.score(candidate))
}
