//! Relevance scorer properties.
//!
//! - Scores are bounded in [0, 1] and deterministic
//! - Exact (case-insensitive) matches score 1.0
//! - Short queries only ever score 0.0 or 0.8
//! - A candidate scores the better of its two fields

use crate::common::make_candidate;
use proptest::prelude::*;
use starthub_search::scoring::{SHORT_WORD_PREFIX_SCORE, WORD_PREFIX_SCORE};
use starthub_search::{relevance_score, Candidate, FineRelevanceScorer};

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9áéíóú ]{0,30}").unwrap()
}

fn phrase_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{3,10}( [a-z]{1,6}){0,2}").unwrap()
}

fn candidate(name: &str, description: &str) -> Candidate {
    Candidate {
        description: description.to_string(),
        ..make_candidate(1, name, 0)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: every score lies in [0, 1].
    #[test]
    fn prop_score_bounded(query in text_strategy(), name in text_strategy(), desc in text_strategy()) {
        let score = relevance_score(&query, &candidate(&name, &desc));
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    }

    /// Property: scoring the same pair twice gives the same answer.
    #[test]
    fn prop_score_deterministic(query in text_strategy(), name in text_strategy()) {
        let c = candidate(&name, "");
        prop_assert_eq!(relevance_score(&query, &c), relevance_score(&query, &c));
    }

    /// Property: an exact match in any letter case scores 1.0.
    #[test]
    fn prop_exact_match_is_one(phrase in phrase_strategy()) {
        let c = candidate(&phrase.to_uppercase(), "unrelated");
        prop_assert_eq!(relevance_score(&phrase, &c), 1.0);
    }

    /// Property: a word starting with the query scores 0.9 (or 1.0 if exact).
    #[test]
    fn prop_word_prefix(
        query in "[a-z]{3,8}",
        lead in "[a-z]{1,6}",
        tail in "[a-z]{0,4}",
    ) {
        let field = format!("{} {}{}", lead, query, tail);
        let scorer = FineRelevanceScorer::new(&query).unwrap();
        prop_assert_eq!(scorer.score_field(&field), WORD_PREFIX_SCORE);
    }

    /// Property: one- and two-character queries score 0.0 or 0.8, nothing else.
    #[test]
    fn prop_short_query_two_valued(query in "[a-z]{1,2}", name in text_strategy()) {
        let score = relevance_score(&query, &candidate(&name, ""));
        prop_assert!(score == 0.0 || score == SHORT_WORD_PREFIX_SCORE, "got {}", score);
    }

    /// Property: the candidate score is the max over name and description.
    #[test]
    fn prop_candidate_takes_max(query in text_strategy(), name in text_strategy(), desc in text_strategy()) {
        let Some(scorer) = FineRelevanceScorer::new(&query) else {
            return Ok(());
        };
        let both = scorer.score(&candidate(&name, &desc));
        prop_assert_eq!(both, scorer.score_field(&name).max(scorer.score_field(&desc)));
    }

    /// Property: whitespace around the query does not change the score.
    #[test]
    fn prop_query_trimmed(query in phrase_strategy(), name in text_strategy()) {
        let c = candidate(&name, "");
        let padded = format!("  {}\t", query);
        prop_assert_eq!(relevance_score(&padded, &c), relevance_score(&query, &c));
    }
}
