//! Free-text search over the publication list.

use folio_domain::Publication;

/// A normalized search query.
///
/// Matching is a case-insensitive substring test against title, authors,
/// venue and the decimal year; any field may match. A blank query matches
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.trim().to_lowercase();
        Self { raw, needle }
    }

    /// The text as typed
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The trimmed, lower-cased text used for matching
    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, publication: &Publication) -> bool {
        if self.is_empty() {
            return true;
        }

        let needle = self.needle.as_str();
        publication.title.to_lowercase().contains(needle)
            || publication.authors.to_lowercase().contains(needle)
            || publication
                .venue
                .as_ref()
                .is_some_and(|v| v.to_lowercase().contains(needle))
            || publication
                .year
                .is_some_and(|y| y.to_string().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::PublicationKind;

    fn sample() -> Publication {
        let mut p = Publication::new(
            "Evaluating and Mitigating Hallucinations in RAG Systems",
            PublicationKind::journal(),
        );
        p.authors = "C.D. Santos, M. Johnson".to_string();
        p.venue = Some("Communications of the ACM".to_string());
        p.year = Some(2024);
        p
    }

    #[test]
    fn blank_query_matches_everything() {
        assert!(SearchQuery::new("").matches(&sample()));
        assert!(SearchQuery::new("   ").matches(&sample()));
        assert!(SearchQuery::new(" \t").is_empty());
    }

    #[test]
    fn trims_and_folds_case() {
        let q = SearchQuery::new(" Santos ");
        assert_eq!(q.needle(), "santos");
        assert_eq!(q.as_str(), " Santos ");
        assert!(q.matches(&sample()));
    }

    #[test]
    fn matches_each_field() {
        assert!(SearchQuery::new("hallucinations").matches(&sample()));
        assert!(SearchQuery::new("johnson").matches(&sample()));
        assert!(SearchQuery::new("acm").matches(&sample()));
        assert!(SearchQuery::new("2024").matches(&sample()));
        assert!(SearchQuery::new("202").matches(&sample()));
        assert!(!SearchQuery::new("2023").matches(&sample()));
    }

    #[test]
    fn missing_optional_fields_do_not_match() {
        let p = Publication::new("Plain", PublicationKind::journal());
        assert!(!SearchQuery::new("acm").matches(&p));
        assert!(!SearchQuery::new("0").matches(&p));
    }
}
