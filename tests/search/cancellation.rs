//! Cooperative cancellation.

use crate::common::{query, sample_service, sorted, wide_catalog, HookedStore};
use starthub_search::{normalize_request, CancellationToken, SearchConfig, SearchError, SearchService};

#[test]
fn test_cancelled_scored_search_fails() {
    let service = sample_service();
    let request = normalize_request(&query("tech"), &SearchConfig::default()).unwrap();

    let token = CancellationToken::new();
    token.clone().cancel();

    assert!(matches!(
        service.search_with_cancel(&request, &token),
        Err(SearchError::Cancelled)
    ));
    assert!(!SearchError::Cancelled.is_client_error());
}

#[test]
fn test_live_token_does_not_interfere() {
    let service = sample_service();
    let request = normalize_request(&query("tech"), &SearchConfig::default()).unwrap();
    let token = CancellationToken::new();

    assert_eq!(
        service.search_with_cancel(&request, &token).unwrap(),
        service.search(&request).unwrap()
    );
}

#[test]
fn test_unscored_search_ignores_the_token() {
    // store-ordered pages have no scoring loop to interrupt
    let service = sample_service();
    let request = normalize_request(&sorted("votes_desc"), &SearchConfig::default()).unwrap();
    let token = CancellationToken::new();
    token.cancel();

    assert_eq!(service.search_with_cancel(&request, &token).unwrap().total, 6);
}

#[test]
fn test_cancel_from_another_thread() {
    let token = CancellationToken::new();
    let remote = token.clone();
    std::thread::spawn(move || remote.cancel()).join().unwrap();
    assert!(token.is_cancelled());
}

#[test]
fn test_cancel_after_fetch_stops_parallel_scoring() {
    // 300 rows is above the default parallel_threshold of 256
    let token = CancellationToken::new();
    let remote = token.clone();
    let store = HookedStore::new(wide_catalog(300), move |rows| {
        assert_eq!(rows.rows.len(), 300);
        let remote = remote.clone();
        std::thread::spawn(move || remote.cancel()).join().unwrap();
    });
    let service = SearchService::new(store);
    assert!(service.config().parallel_threshold <= 300);

    let request = normalize_request(&query("fintech"), service.config()).unwrap();
    assert!(matches!(
        service.search_with_cancel(&request, &token),
        Err(SearchError::Cancelled)
    ));
}

#[test]
fn test_wide_search_completes_without_cancel() {
    let service = SearchService::new(wide_catalog(300));
    let request = normalize_request(&query("fintech"), service.config()).unwrap();
    let result = service
        .search_with_cancel(&request, &CancellationToken::new())
        .unwrap();
    assert_eq!(result.total, 300);
    assert_eq!(result.results.len(), 50);
}
