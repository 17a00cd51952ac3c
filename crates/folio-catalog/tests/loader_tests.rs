//! Loader integration tests: data file shapes and fallback behavior

mod common;

use common::fixtures::{fixture_path, load_fixture};
use folio_catalog::{
    load_from_path, load_or_fallback, parse_catalog_json, sample_publications, Catalog,
    CatalogConfig, LoadError, LoadSource, PublicationKind, PublicationStatus, SortKey,
};

#[test]
fn test_flat_fixture() {
    let pubs = parse_catalog_json(&load_fixture("cv_data_flat.json")).unwrap();

    // The untitled record is dropped
    assert_eq!(pubs.len(), 4);

    let firewall = pubs.iter().find(|p| p.title == "Building an LLM Firewall").unwrap();
    assert_eq!(firewall.status, Some(PublicationStatus::UnderReview));
    assert_eq!(firewall.doi, None);

    let review = pubs.iter().find(|p| p.kind.as_str() == "review").unwrap();
    assert_eq!(review.authors, "Lee, K., Santos, C.D.");
    assert_eq!(review.year, Some(2019));
}

#[test]
fn test_grouped_fixture_uses_group_kinds_in_order() {
    let pubs = load_from_path(fixture_path("cv_data_grouped.json")).unwrap();
    let kinds: Vec<&str> = pubs.iter().map(|p| p.kind.as_str()).collect();
    assert_eq!(kinds, vec!["journal", "conference", "book", "technical"]);

    let tool = &pubs[3];
    assert_eq!(tool.year, None);
    assert_eq!(tool.citations, Some(0));

    let dashboards = &pubs[0];
    assert_eq!(dashboards.url, None);
    assert_eq!(
        dashboards.link().as_deref(),
        Some("https://doi.org/10.3233/IP-220001")
    );
}

#[test]
fn test_grouped_fixture_through_catalog() {
    let mut catalog = Catalog::new(CatalogConfig::default()).unwrap();
    catalog.load(load_from_path(fixture_path("cv_data_grouped.json")).unwrap());

    let view = catalog.set_filter("book_chapters").unwrap();
    assert_eq!(view.len(), 1);
    assert_eq!(view.items[0].title, "Algorithms in the Public Sector");

    catalog.set_filter("all").unwrap();
    let view = catalog.set_sort_key(SortKey::CitationsDesc);
    let top: Vec<Option<u32>> = view.items.iter().map(|p| p.citations).collect();
    assert_eq!(top, vec![Some(11), Some(6), Some(2), Some(0)]);

    let stats = catalog.stats();
    assert_eq!(stats.total_citations, 19);
    assert_eq!(stats.h_index, 2);
}

#[test]
fn test_malformed_record_does_not_discard_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cv_data.json");
    std::fs::write(
        &path,
        r#"[
            {"title": "Good A", "type": "journal", "year": 2021},
            {"title": "Good B", "type": "journal", "year": 2022, "citations": true},
            {"title": 5, "type": "book"},
            {"title": "Good C", "type": "conference", "citations": "4"}
        ]"#,
    )
    .unwrap();

    let outcome = load_or_fallback(&path);
    assert!(!outcome.is_fallback());
    let titles: Vec<&str> = outcome.publications.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Good A", "Good C"]);
    assert_eq!(outcome.publications[1].citations, Some(4));
}

#[test]
fn test_missing_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = load_or_fallback(dir.path().join("cv_data.json"));
    assert!(outcome.is_fallback());
    assert_eq!(outcome.publications, sample_publications());
}

#[test]
fn test_invalid_json_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cv_data.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(load_from_path(&path), Err(LoadError::Parse(_))));
    assert!(load_or_fallback(&path).is_fallback());
}

#[test]
fn test_empty_list_falls_back() {
    let outcome = load_or_fallback(fixture_path("cv_data_empty.json"));
    assert_eq!(outcome.source, LoadSource::Fallback);
    assert_eq!(outcome.publications.len(), 3);
    assert!(outcome
        .publications
        .iter()
        .any(|p| p.kind == PublicationKind::conference()));
}

#[test]
fn test_file_source_is_reported() {
    let path = fixture_path("cv_data_flat.json");
    let outcome = load_or_fallback(&path);
    assert_eq!(outcome.source, LoadSource::File(path));
    assert_eq!(outcome.publications.len(), 4);
}
