//! Ordering and pagination properties over random catalogs.
//!
//! - Aggregate sorts are monotone in their column
//! - Relevance pages are non-increasing in score and never hold a 0.0
//! - Walking pages reproduces the single-page listing
//! - total_pages = max(1, ceil(total / limit))

use crate::common::{make_comments, make_startup, make_votes};
use proptest::prelude::*;
use starthub_search::{
    total_pages, CatalogSnapshot, MemoryCatalog, RawSearchParams, SearchService,
};

const WORDS: &[&str] = &[
    "ai", "vision", "fintech", "health", "tech", "learning", "labs", "platform", "solar",
    "grid", "data", "cloud", "plataforma", "salud",
];

/// (name words, description words, votes, comments, category)
type Row = (Vec<usize>, Vec<usize>, usize, usize, Option<i64>);

fn row_strategy() -> impl Strategy<Value = Row> {
    (
        prop::collection::vec(0..WORDS.len(), 1..4),
        prop::collection::vec(0..WORDS.len(), 0..5),
        0usize..12,
        0usize..6,
        prop::option::of(1i64..4),
    )
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(row_strategy(), 0..30)
}

fn phrase(indices: &[usize]) -> String {
    indices.iter().map(|&i| WORDS[i]).collect::<Vec<_>>().join(" ")
}

fn build_service(rows: &[Row]) -> SearchService<MemoryCatalog> {
    let mut snapshot = CatalogSnapshot::default();
    let mut next_vote = 1;
    let mut next_comment = 1;

    for (i, (name, desc, votes, comments, category)) in rows.iter().enumerate() {
        let id = i as i64 + 1;
        snapshot
            .startups
            .push(make_startup(id, &phrase(name), &phrase(desc), *category));
        snapshot.votes.extend(make_votes(id, *votes, next_vote));
        snapshot.comments.extend(make_comments(id, *comments, next_comment));
        next_vote += *votes as i64;
        next_comment += *comments as i64;
    }

    SearchService::new(MemoryCatalog::from_snapshot(snapshot))
}

fn params(query: Option<&str>, sort: &str, page: i64, limit: i64) -> RawSearchParams {
    RawSearchParams {
        query: query.map(str::to_string),
        sort_by: Some(sort.to_string()),
        page: Some(page),
        limit: Some(limit),
        ..RawSearchParams::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: votes_desc pages are non-increasing in total_votes, and
    /// votes_asc pages non-decreasing.
    #[test]
    fn prop_vote_sorts_monotone(rows in catalog_strategy()) {
        let service = build_service(&rows);

        let desc = service.search_params(&params(None, "votes_desc", 1, 100)).unwrap();
        prop_assert!(desc.results.windows(2).all(|w| w[0].candidate.total_votes >= w[1].candidate.total_votes));

        let asc = service.search_params(&params(None, "votes_asc", 1, 100)).unwrap();
        prop_assert!(asc.results.windows(2).all(|w| w[0].candidate.total_votes <= w[1].candidate.total_votes));
    }

    /// Property: comments_desc pages are non-increasing in total_comments.
    #[test]
    fn prop_comment_sort_monotone(rows in catalog_strategy()) {
        let service = build_service(&rows);
        let desc = service.search_params(&params(None, "comments_desc", 1, 100)).unwrap();
        prop_assert!(desc.results.windows(2).all(|w| w[0].candidate.total_comments >= w[1].candidate.total_comments));
    }

    /// Property: relevance pages are sorted by score and hold no zero scores.
    #[test]
    fn prop_relevance_sorted_and_nonzero(rows in catalog_strategy(), q in prop::sample::select(WORDS)) {
        let service = build_service(&rows);
        let result = service.search_params(&params(Some(q), "relevance", 1, 100)).unwrap();

        let scores: Vec<f64> = result.results.iter().map(|r| r.relevance_score.unwrap_or(-1.0)).collect();
        prop_assert!(scores.iter().all(|s| *s > 0.0 && *s <= 1.0), "{:?}", scores);
        prop_assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{:?}", scores);
        prop_assert_eq!(result.total, result.results.len());
    }

    /// Property: the relevance total never exceeds what the store matched.
    #[test]
    fn prop_relevance_total_at_most_store_total(rows in catalog_strategy(), q in prop::sample::select(WORDS)) {
        let service = build_service(&rows);
        let scored = service.search_params(&params(Some(q), "relevance", 1, 100)).unwrap();
        let unscored = service.search_params(&params(Some(q), "votes_desc", 1, 100)).unwrap();
        prop_assert!(scored.total <= unscored.total);
    }

    /// Property: concatenating every page equals the one-page listing.
    #[test]
    fn prop_pages_partition_listing(rows in catalog_strategy(), limit in 1i64..7) {
        let service = build_service(&rows);
        let full = service.search_params(&params(None, "votes_desc", 1, 100)).unwrap();

        let pages = total_pages(full.total, limit) as i64;
        let mut walked = Vec::new();
        for page in 1..=pages {
            let result = service.search_params(&params(None, "votes_desc", page, limit)).unwrap();
            prop_assert_eq!(result.page as i64, page);
            prop_assert_eq!(result.total, full.total);
            prop_assert!(result.results.len() as i64 <= limit);
            walked.extend(result.results);
        }
        let past_end = service.search_params(&params(None, "votes_desc", pages + 1, limit)).unwrap();
        prop_assert!(past_end.results.is_empty());

        prop_assert_eq!(walked, full.results);
    }

    /// Property: total_pages = max(1, ceil(total / limit)) for positive limits,
    /// 1 otherwise.
    #[test]
    fn prop_total_pages_formula(total in 0usize..10_000, limit in -5i64..200) {
        let pages = total_pages(total, limit);
        if limit <= 0 {
            prop_assert_eq!(pages, 1);
        } else {
            let expected = ((total as f64) / (limit as f64)).ceil().max(1.0) as usize;
            prop_assert_eq!(pages, expected);
        }
    }
}
