//! Ordering for each sort strategy.

use crate::common::{ids, query, sample_service, sorted};
use starthub_search::RawSearchParams;

fn order(params: RawSearchParams) -> Vec<i64> {
    let result = sample_service().search_params(&params).unwrap();
    ids(result.results.iter().map(|r| r.candidate.id))
}

#[test]
fn test_votes_desc() {
    assert_eq!(order(sorted("votes_desc")), vec![3, 5, 1, 2, 6, 4]);
}

#[test]
fn test_votes_asc() {
    assert_eq!(order(sorted("votes_asc")), vec![4, 6, 2, 1, 5, 3]);
}

#[test]
fn test_comments_orders_keep_natural_order_on_ties() {
    assert_eq!(order(sorted("comments_desc")), vec![4, 1, 3, 2, 5, 6]);
    assert_eq!(order(sorted("comments_asc")), vec![2, 5, 6, 3, 1, 4]);
}

#[test]
fn test_legacy_sort_keys() {
    assert_eq!(order(sorted("votos_desc")), order(sorted("votes_desc")));
    assert_eq!(order(sorted("COMENTARIOS_ASC")), order(sorted("comments_asc")));
}

#[test]
fn test_relevance_without_query_is_votes_desc() {
    assert_eq!(order(RawSearchParams::default()), vec![3, 5, 1, 2, 6, 4]);
    assert_eq!(order(sorted("relevance")), vec![3, 5, 1, 2, 6, 4]);
}

#[test]
fn test_unknown_sort_key_is_relevance() {
    let params = RawSearchParams {
        sort_by: Some("newest".to_string()),
        ..query("ai")
    };
    assert_eq!(order(params), order(query("ai")));
}

#[test]
fn test_aggregate_sort_with_query_is_not_scored() {
    let params = RawSearchParams {
        sort_by: Some("votes_desc".to_string()),
        ..query("tech")
    };
    let result = sample_service().search_params(&params).unwrap();
    assert_eq!(ids(result.results.iter().map(|r| r.candidate.id)), vec![3, 2, 4]);
    assert!(result.results.iter().all(|r| r.relevance_score.is_none()));
}

#[test]
fn test_relevance_sorts_by_score_descending() {
    // description word prefix only
    let result = sample_service().search_params(&query("soluciones")).unwrap();
    assert_eq!(result.results.len(), 1);
    assert_eq!(result.results[0].relevance_score, Some(0.9));

    let result = sample_service().search_params(&query("con")).unwrap();
    let scores: Vec<f64> = result
        .results
        .iter()
        .map(|r| r.relevance_score.unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{:?}", scores);
    assert!(scores.iter().all(|s| *s > 0.0));
}
