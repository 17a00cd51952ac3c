//! Summary metrics over a publication list.
//!
//! These back the count badges on the filter buttons and the headline numbers
//! (publications, citations, h-index) shown next to the list.

use std::collections::BTreeMap;

use folio_domain::{Publication, PublicationKind};
use serde::Serialize;

use crate::filter::Filter;

/// Count of publications behind one filter button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCount {
    /// Button tag (`all`, a kind, or `inprep`)
    pub tag: String,
    pub count: usize,
}

/// Headline numbers for a publication list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub total_citations: u64,
    pub h_index: u32,
    pub in_progress: usize,
    /// Publications per kind tag
    pub by_kind: BTreeMap<String, usize>,
    /// Publications per year, oldest first; undated entries are left out
    pub by_year: BTreeMap<u32, usize>,
}

impl CatalogStats {
    pub fn from_publications(publications: &[Publication]) -> Self {
        let mut stats = Self {
            total: publications.len(),
            ..Self::default()
        };

        for p in publications {
            stats.total_citations += u64::from(p.sort_citations());
            if p.is_in_progress() {
                stats.in_progress += 1;
            }
            *stats.by_kind.entry(p.kind.as_str().to_string()).or_insert(0) += 1;
            if let Some(year) = p.year {
                *stats.by_year.entry(year).or_insert(0) += 1;
            }
        }

        stats.h_index = h_index(publications.iter().map(Publication::sort_citations));
        stats
    }
}

/// Largest `h` such that `h` publications have at least `h` citations each.
pub fn h_index(citations: impl IntoIterator<Item = u32>) -> u32 {
    let mut counts: Vec<u32> = citations.into_iter().filter(|&c| c > 0).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));

    let mut h = 0;
    for (i, &c) in counts.iter().enumerate() {
        let rank = (i + 1) as u32;
        if c >= rank {
            h = rank;
        } else {
            break;
        }
    }
    h
}

/// Counts for every filter offered over `kinds`, in button order.
pub fn filter_counts(publications: &[Publication], kinds: &[PublicationKind]) -> Vec<FilterCount> {
    Filter::available(kinds)
        .into_iter()
        .map(|filter| FilterCount {
            tag: filter.tag().to_string(),
            count: publications.iter().filter(|p| filter.matches(p)).count(),
        })
        .collect()
}
