//! Loading catalogs and configs from disk.

use crate::common::sample_snapshot;
use starthub_search::{MemoryCatalog, SearchConfig, SearchService, StartupId, StoreError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_json(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_snapshot_round_trips_through_a_file() {
    let json = serde_json::to_string(&sample_snapshot()).unwrap();
    let file = write_json(&json);

    let catalog = MemoryCatalog::from_path(file.path()).unwrap();
    assert_eq!(catalog.len(), 6);

    let service = SearchService::new(catalog);
    assert_eq!(service.get_detail(StartupId(1)).unwrap().total_votes, 5);
}

#[test]
fn test_camel_case_snapshot() {
    let file = write_json(
        r#"{
            "startups": [
                {"id": 10, "name": "Solar Grid", "description": "Energy", "ownerId": 3, "categoryId": 4}
            ],
            "votes": [{"id": 1, "startupId": 10, "userId": 3}],
            "categories": [{"id": 4, "name": "Energy"}],
            "users": [{"id": 3, "firstName": "Grace", "lastName": "Hopper"}]
        }"#,
    );

    let service = SearchService::new(MemoryCatalog::from_path(file.path()).unwrap());
    let profile = service.get_profile(StartupId(10)).unwrap();
    assert_eq!(profile.candidate.total_votes, 1);
    assert_eq!(profile.category_name.as_deref(), Some("Energy"));
    assert_eq!(profile.owner_name.as_deref(), Some("Grace Hopper"));
}

#[test]
fn test_missing_file_is_snapshot_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(matches!(
        MemoryCatalog::from_path(&missing),
        Err(StoreError::Snapshot(_))
    ));
}

#[test]
fn test_malformed_file_is_snapshot_error() {
    let file = write_json("{\"startups\": [{\"id\": \"one\"}]}");
    assert!(matches!(
        MemoryCatalog::from_path(file.path()),
        Err(StoreError::Snapshot(_))
    ));
}

#[test]
fn test_config_from_json_applies() {
    let config: SearchConfig = serde_json::from_str(r#"{"maxLimit": 3, "defaultLimit": 2}"#).unwrap();
    config.validate().unwrap();

    let service = SearchService::with_config(MemoryCatalog::from_snapshot(sample_snapshot()), config);
    let result = service
        .search_params(&starthub_search::RawSearchParams::default())
        .unwrap();
    assert_eq!(result.results.len(), 2);
    assert_eq!(result.total_pages, 3);
    assert!(service
        .search_params(&starthub_search::RawSearchParams {
            limit: Some(4),
            ..Default::default()
        })
        .is_err());
}

#[test]
fn test_bundled_demo_catalog_loads() {
    let catalog = MemoryCatalog::from_path(std::path::Path::new("data/catalog.json")).unwrap();
    assert_eq!(catalog.len(), 8);

    let service = SearchService::new(catalog);
    let categories = service.list_categories().unwrap();
    assert_eq!(categories.len(), 4);
    assert_eq!(
        service.get_profile(StartupId(7)).unwrap().owner_name.as_deref(),
        Some("Ana Pérez")
    );
}

#[test]
fn test_config_cannot_lift_hard_limits() {
    let config: SearchConfig =
        serde_json::from_str(r#"{"maxLimit": 500, "maxAutocompleteLimit": 80}"#).unwrap();
    assert!(matches!(
        config.validate(),
        Err(starthub_search::ConfigError::AboveCap { field: "maxLimit", .. })
    ));

    // an unvalidated config is still held to the caps
    let service = SearchService::with_config(MemoryCatalog::from_snapshot(sample_snapshot()), config);
    assert!(matches!(
        service.search_params(&starthub_search::RawSearchParams {
            limit: Some(300),
            ..Default::default()
        }),
        Err(starthub_search::SearchError::InvalidPagination { max: 100, .. })
    ));
    assert!(matches!(
        service.autocomplete("tech", Some(60)),
        Err(starthub_search::SearchError::InvalidPagination { max: 20, .. })
    ));
    assert_eq!(service.autocomplete("tech", Some(20)).unwrap().len(), 3);
}
