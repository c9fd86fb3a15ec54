//! Detail, profile and category lookups.

use crate::common::{make_startup, make_votes, sample_service};
use starthub_search::{CategoryId, CommentRow, SearchError, StartupId, UserId};

#[test]
fn test_detail_includes_aggregates() {
    let detail = sample_service().get_detail(StartupId(3)).unwrap();
    assert_eq!(detail.name, "EduTech Learning");
    assert_eq!(detail.total_votes, 9);
    assert_eq!(detail.total_comments, 1);
    assert_eq!(detail.category_id, Some(CategoryId(3)));
}

#[test]
fn test_unknown_id_is_not_found() {
    let err = sample_service().get_detail(StartupId(999)).unwrap_err();
    assert!(matches!(err, SearchError::NotFound(StartupId(999))));
    assert!(err.is_client_error());
    assert_eq!(err.to_string(), "startup 999 not found");

    assert!(matches!(
        sample_service().get_profile(StartupId(999)),
        Err(SearchError::NotFound(_))
    ));
}

#[test]
fn test_profile_projection() {
    let profile = sample_service().get_profile(StartupId(2)).unwrap();
    assert_eq!(profile.candidate.name, "FinTech Solutions");
    assert_eq!(profile.category_name.as_deref(), Some("Fintech"));
    assert_eq!(profile.owner_name.as_deref(), Some("Search Tester"));
}

#[test]
fn test_profile_json_is_flat() {
    let profile = sample_service().get_profile(StartupId(1)).unwrap();
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["totalVotes"], 5);
    assert_eq!(json["categoryName"], "Artificial Intelligence");
}

#[test]
fn test_list_categories() {
    let categories = sample_service().list_categories().unwrap();
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Artificial Intelligence", "Fintech", "Education"]);
}

#[test]
fn test_reads_see_latest_writes() {
    let service = sample_service();
    service
        .store()
        .upsert_startup(make_startup(7, "Late Tech", "Arrived after load", Some(2)));
    for vote in make_votes(7, 12, 500) {
        service.store().record_vote(vote);
    }
    service.store().record_comment(CommentRow {
        id: 900,
        startup_id: StartupId(7),
        user_id: UserId(1),
        content: "welcome".to_string(),
    });

    let detail = service.get_detail(StartupId(7)).unwrap();
    assert_eq!(detail.total_votes, 12);
    assert_eq!(detail.total_comments, 1);

    let top = service
        .search_params(&crate::common::sorted("votes_desc"))
        .unwrap();
    assert_eq!(top.results[0].candidate.id, StartupId(7));
    assert_eq!(top.total, 7);
}
