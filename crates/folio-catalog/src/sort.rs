//! Sort orders for the visible publication list.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use folio_domain::Publication;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::CatalogError;

/// Sort key selectable from the sort menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Newest first; missing years last
    #[default]
    YearDesc,
    /// Oldest first; missing years first
    YearAsc,
    /// Most cited first; missing counts last
    CitationsDesc,
    /// Alphabetical by title
    TitleAsc,
    /// Data file order
    Insertion,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::YearDesc,
        SortKey::YearAsc,
        SortKey::CitationsDesc,
        SortKey::TitleAsc,
        SortKey::Insertion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::YearDesc => "year-desc",
            Self::YearAsc => "year-asc",
            Self::CitationsDesc => "citations-desc",
            Self::TitleAsc => "title-asc",
            Self::Insertion => "insertion",
        }
    }

    /// Compare two publications under this key.
    ///
    /// `Insertion` treats everything as equal so a stable sort keeps input order.
    pub fn compare(&self, a: &Publication, b: &Publication) -> Ordering {
        match self {
            Self::YearDesc => b.sort_year().cmp(&a.sort_year()),
            Self::YearAsc => a.sort_year().cmp(&b.sort_year()),
            Self::CitationsDesc => b.sort_citations().cmp(&a.sort_citations()),
            Self::TitleAsc => compare_titles(&a.title, &b.title),
            Self::Insertion => Ordering::Equal,
        }
    }

    /// Stable-sort `indices` (positions into `all`) by this key.
    pub fn sort_indices(&self, indices: &mut [usize], all: &[Publication]) {
        match self {
            Self::Insertion => {}
            Self::TitleAsc => indices
                .sort_by_cached_key(|&i| (collation_key(&all[i].title), all[i].title.clone())),
            _ => indices.sort_by(|&a, &b| self.compare(&all[a], &all[b])),
        }
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| CatalogError::InvalidSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accent- and case-folded form of a title for alphabetical ordering.
///
/// "Écoles" sorts next to "ecoles" rather than after "Zebra".
pub fn collation_key(title: &str) -> String {
    title
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Title comparison: collation keys first, raw text to break ties.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::PublicationKind;
    use rstest::rstest;

    fn publication(title: &str, year: Option<u32>, citations: Option<u32>) -> Publication {
        let mut p = Publication::new(title, PublicationKind::journal());
        p.year = year;
        p.citations = citations;
        p
    }

    fn sorted_titles(key: SortKey, all: &[Publication]) -> Vec<&str> {
        let mut indices: Vec<usize> = (0..all.len()).collect();
        key.sort_indices(&mut indices, all);
        indices.iter().map(|&i| all[i].title.as_str()).collect()
    }

    #[rstest]
    #[case("year-desc", SortKey::YearDesc)]
    #[case("YEAR-ASC", SortKey::YearAsc)]
    #[case(" citations_desc ", SortKey::CitationsDesc)]
    #[case("title-asc", SortKey::TitleAsc)]
    #[case("insertion", SortKey::Insertion)]
    fn parse_sort_key(#[case] raw: &str, #[case] expected: SortKey) {
        assert_eq!(raw.parse::<SortKey>().unwrap(), expected);
    }

    #[test]
    fn parse_unknown_sort_key() {
        assert_eq!(
            "newest".parse::<SortKey>(),
            Err(CatalogError::InvalidSortKey("newest".to_string()))
        );
    }

    #[test]
    fn missing_year_sorts_as_zero() {
        let all = vec![
            publication("none", None, None),
            publication("2020", Some(2020), None),
            publication("2024", Some(2024), None),
        ];
        assert_eq!(sorted_titles(SortKey::YearDesc, &all), vec!["2024", "2020", "none"]);
        assert_eq!(sorted_titles(SortKey::YearAsc, &all), vec!["none", "2020", "2024"]);
    }

    #[test]
    fn citations_desc_is_stable() {
        let all = vec![
            publication("a", None, Some(3)),
            publication("b", None, None),
            publication("c", None, Some(3)),
            publication("d", None, Some(0)),
            publication("e", None, Some(9)),
        ];
        assert_eq!(
            sorted_titles(SortKey::CitationsDesc, &all),
            vec!["e", "a", "c", "b", "d"]
        );
    }

    #[test]
    fn title_sort_folds_case_and_accents() {
        let all = vec![
            publication("zebra", None, None),
            publication("Écoles", None, None),
            publication("apple", None, None),
            publication("ecoles", None, None),
        ];
        assert_eq!(
            sorted_titles(SortKey::TitleAsc, &all),
            vec!["apple", "ecoles", "Écoles", "zebra"]
        );
    }

    #[test]
    fn insertion_keeps_order() {
        let all = vec![
            publication("b", Some(1999), None),
            publication("a", Some(2024), None),
        ];
        assert_eq!(sorted_titles(SortKey::Insertion, &all), vec!["b", "a"]);
    }
}
