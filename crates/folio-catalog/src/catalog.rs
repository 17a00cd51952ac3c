//! The publication catalog pipeline.
//!
//! A [`Catalog`] owns the full publication list together with the filter,
//! search, sort and pagination state, and derives the visible subset in a fixed
//! order: filter, then search, then sort, then truncate to the visible count.
//!
//! The visible count is always a positive multiple of the page size. It resets
//! to one page whenever the list, the filter or the search query changes, grows
//! by one page on "load more", and never exceeds the result length rounded up to
//! the next page boundary (or one page for an empty result).

use folio_domain::Publication;
use serde::Serialize;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, ConfigError};
use crate::filter::Filter;
use crate::search::SearchQuery;
use crate::sort::SortKey;
use crate::stats::{filter_counts, CatalogStats, FilterCount};

/// The portion of the result handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibleSlice<'a> {
    /// At most `visible_count` publications, in display order
    pub items: Vec<&'a Publication>,
    /// More results exist beyond `items`
    pub has_more: bool,
    /// Length of the full filtered, searched and sorted result
    pub total: usize,
}

impl VisibleSlice<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Publication list with filter/search/sort/pagination state.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: CatalogConfig,
    all: Vec<Publication>,
    filter: Filter,
    search: SearchQuery,
    sort_key: SortKey,
    visible_count: usize,
    /// Positions into `all` after filter, search and sort
    results: Vec<usize>,
}

impl Catalog {
    /// Create an empty catalog. Fails if the configured page size is zero.
    pub fn new(config: CatalogConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: CatalogConfig) -> Self {
        Self {
            sort_key: config.default_sort,
            visible_count: config.page_size,
            config,
            all: Vec::new(),
            filter: Filter::All,
            search: SearchQuery::default(),
            results: Vec::new(),
        }
    }

    /// Replace the full list and reset filter, search and pagination.
    ///
    /// The sort key is kept. An empty list is valid.
    pub fn load(&mut self, all: Vec<Publication>) -> VisibleSlice<'_> {
        tracing::debug!(count = all.len(), "Loading publications into catalog");
        self.all = all;
        self.filter = Filter::All;
        self.search = SearchQuery::default();
        self.visible_count = self.config.page_size;
        self.recompute();
        self.visible_slice()
    }

    /// Apply a filter-button tag.
    ///
    /// Unknown tags return [`CatalogError::InvalidFilter`] and leave every part
    /// of the state untouched.
    pub fn set_filter(&mut self, tag: &str) -> Result<VisibleSlice<'_>, CatalogError> {
        let filter = Filter::parse(tag, &self.config.kinds)?;
        self.apply_filter(filter)
    }

    /// Apply an already-resolved filter.
    pub fn apply_filter(&mut self, filter: Filter) -> Result<VisibleSlice<'_>, CatalogError> {
        if !filter.is_accepted_by(&self.config) {
            return Err(CatalogError::InvalidFilter(filter.tag().to_string()));
        }
        self.filter = filter;
        self.visible_count = self.config.page_size;
        self.recompute();
        Ok(self.visible_slice())
    }

    /// Set the search text. Blank text clears the search.
    pub fn set_search_query(&mut self, text: &str) -> VisibleSlice<'_> {
        self.search = SearchQuery::new(text);
        self.visible_count = self.config.page_size;
        self.recompute();
        self.visible_slice()
    }

    /// Reorder the result. Pagination is kept.
    pub fn set_sort_key(&mut self, key: SortKey) -> VisibleSlice<'_> {
        self.sort_key = key;
        self.recompute();
        self.visible_slice()
    }

    /// Reveal one more page.
    ///
    /// Returns `false` without changing anything when the whole result is
    /// already visible.
    pub fn load_more(&mut self) -> bool {
        if self.visible_count >= self.results.len() {
            return false;
        }
        self.visible_count += self.config.page_size;
        true
    }

    /// The first `visible_count` results and whether more remain.
    pub fn visible_slice(&self) -> VisibleSlice<'_> {
        let shown = self.visible_count.min(self.results.len());
        VisibleSlice {
            items: self.results[..shown].iter().map(|&i| &self.all[i]).collect(),
            has_more: self.visible_count < self.results.len(),
            total: self.results.len(),
        }
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn search_query(&self) -> &str {
        self.search.as_str()
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// The full list as loaded
    pub fn publications(&self) -> &[Publication] {
        &self.all
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Publication count behind each filter button (ignores the search text)
    pub fn counts(&self) -> Vec<FilterCount> {
        filter_counts(&self.all, &self.config.kinds)
    }

    /// Summary metrics over the full list
    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_publications(&self.all)
    }

    fn recompute(&mut self) {
        let mut results: Vec<usize> = self
            .all
            .iter()
            .enumerate()
            .filter(|(_, p)| self.filter.matches(p))
            .filter(|(_, p)| self.search.matches(p))
            .map(|(i, _)| i)
            .collect();
        self.sort_key.sort_indices(&mut results, &self.all);

        tracing::debug!(
            filter = %self.filter,
            search = self.search.needle(),
            sort = %self.sort_key,
            matched = results.len(),
            "Recomputed catalog view"
        );
        self.results = results;
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_valid_config(CatalogConfig::default())
    }
}
