//! Test fixture loading utilities

use std::path::PathBuf;

use folio_catalog::{Publication, PublicationKind};

/// Get the path to a fixture file
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Build a publication with the fields the pipeline looks at
#[allow(dead_code)]
pub fn publication(
    title: &str,
    kind: &str,
    year: Option<u32>,
    citations: Option<u32>,
) -> Publication {
    let mut p = Publication::new(title, PublicationKind::new(kind));
    p.year = year;
    p.citations = citations;
    p
}

/// Twelve publications, four of them journal articles
#[allow(dead_code)]
pub fn twelve_with_four_journals() -> Vec<Publication> {
    let kinds = [
        "journal",
        "conference",
        "conference",
        "journal",
        "book",
        "conference",
        "journal",
        "review",
        "conference",
        "technical",
        "journal",
        "conference",
    ];
    kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| publication(&format!("Paper {i}"), kind, Some(2010 + i as u32), None))
        .collect()
}
