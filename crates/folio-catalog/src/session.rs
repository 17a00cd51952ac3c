//! UI glue: one catalog, one renderer, redraw after every change.
//!
//! A [`CatalogSession`] is what event handlers talk to. Filter buttons map to
//! [`CatalogSession::set_filter`], the sort menu to [`CatalogSession::set_sort`],
//! the "load more" button to [`CatalogSession::load_more`], and keystrokes in
//! the search box to [`CatalogSession::type_search`] followed by periodic
//! [`CatalogSession::tick`] calls that apply the query once typing pauses.

use std::time::Instant;

use folio_domain::Publication;

use crate::catalog::Catalog;
use crate::debounce::SearchDebouncer;
use crate::error::Result;
use crate::loader::{LoadSequencer, LoadTicket};
use crate::render::CatalogRenderer;
use crate::sort::SortKey;

pub struct CatalogSession<R: CatalogRenderer> {
    catalog: Catalog,
    renderer: R,
    debouncer: SearchDebouncer,
    loads: LoadSequencer,
}

impl<R: CatalogRenderer> CatalogSession<R> {
    /// Pair a catalog with a renderer. The debounce window comes from the
    /// catalog's config.
    pub fn new(catalog: Catalog, renderer: R) -> Self {
        let debouncer = SearchDebouncer::new(catalog.config().search_debounce());
        Self {
            catalog,
            renderer,
            debouncer,
            loads: LoadSequencer::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_parts(self) -> (Catalog, R) {
        (self.catalog, self.renderer)
    }

    /// Load a list right away and redraw.
    ///
    /// Any load still in flight is superseded.
    pub fn load(&mut self, publications: Vec<Publication>) -> Result<()> {
        self.loads.begin();
        self.debouncer.cancel();
        self.catalog.load(publications);
        self.redraw()
    }

    /// Start an asynchronous load; pass the ticket to [`Self::finish_load`].
    pub fn begin_load(&mut self) -> LoadTicket {
        self.loads.begin()
    }

    /// Complete a load started with [`Self::begin_load`].
    ///
    /// Returns `false` (and draws nothing) when a newer load has started since.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        publications: Vec<Publication>,
    ) -> Result<bool> {
        if !self.loads.deliver(ticket, &mut self.catalog, publications) {
            return Ok(false);
        }
        self.debouncer.cancel();
        self.redraw()?;
        Ok(true)
    }

    /// Apply a filter-button tag. An unknown tag is an error and nothing is redrawn.
    pub fn set_filter(&mut self, tag: &str) -> Result<()> {
        self.catalog.set_filter(tag)?;
        self.redraw()
    }

    /// Apply search text immediately, dropping any debounced input.
    pub fn set_search_query(&mut self, text: &str) -> Result<()> {
        self.debouncer.cancel();
        self.catalog.set_search_query(text);
        self.redraw()
    }

    /// Record a keystroke's worth of search text without applying it yet.
    pub fn type_search(&mut self, text: impl Into<String>, now: Instant) {
        self.debouncer.input(text, now);
    }

    /// Apply debounced search text if typing has paused. Returns whether it did.
    pub fn tick(&mut self, now: Instant) -> Result<bool> {
        match self.debouncer.poll(now) {
            Some(text) => self.apply_search(&text),
            None => Ok(false),
        }
    }

    /// Apply any pending search text without waiting.
    pub fn flush_search(&mut self) -> Result<bool> {
        match self.debouncer.flush() {
            Some(text) => self.apply_search(&text),
            None => Ok(false),
        }
    }

    /// When pending search text becomes due
    pub fn search_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn set_sort_key(&mut self, key: SortKey) -> Result<()> {
        self.catalog.set_sort_key(key);
        self.redraw()
    }

    /// Apply a sort-menu value such as `citations-desc`.
    pub fn set_sort(&mut self, key: &str) -> Result<()> {
        let key: SortKey = key.parse()?;
        self.set_sort_key(key)
    }

    /// Reveal one more page. Redraws only when something was added.
    pub fn load_more(&mut self) -> Result<bool> {
        if !self.catalog.load_more() {
            return Ok(false);
        }
        self.redraw()?;
        Ok(true)
    }

    pub fn redraw(&mut self) -> Result<()> {
        let view = self.catalog.visible_slice();
        self.renderer.render(&view)?;
        Ok(())
    }

    fn apply_search(&mut self, text: &str) -> Result<bool> {
        self.catalog.set_search_query(text);
        self.redraw()?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VisibleSlice;
    use crate::config::CatalogConfig;
    use crate::error::{CatalogError, FolioError, RenderError};
    use folio_domain::PublicationKind;
    use std::time::Duration;

    /// Records (titles, has_more) of every render
    #[derive(Default)]
    struct Recorder {
        frames: Vec<(Vec<String>, bool)>,
    }

    impl CatalogRenderer for Recorder {
        fn render(&mut self, view: &VisibleSlice<'_>) -> std::result::Result<(), RenderError> {
            self.frames.push((
                view.items.iter().map(|p| p.title.clone()).collect(),
                view.has_more,
            ));
            Ok(())
        }
    }

    fn publications(n: usize) -> Vec<Publication> {
        (0..n)
            .map(|i| {
                let mut p = Publication::new(format!("Paper {i}"), PublicationKind::journal());
                p.year = Some(2000 + i as u32);
                p
            })
            .collect()
    }

    fn session(page_size: usize) -> CatalogSession<Recorder> {
        let catalog = Catalog::new(CatalogConfig::with_page_size(page_size)).unwrap();
        CatalogSession::new(catalog, Recorder::default())
    }

    #[test]
    fn every_change_redraws() {
        let mut s = session(2);
        s.load(publications(3)).unwrap();
        s.set_sort("year-asc").unwrap();
        assert!(s.load_more().unwrap());
        assert!(!s.load_more().unwrap());

        let frames = &s.renderer().frames;
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].0, vec!["Paper 2", "Paper 1"]);
        assert_eq!(frames[1].0, vec!["Paper 0", "Paper 1"]);
        assert!(frames[1].1);
        assert_eq!(frames[2].0.len(), 3);
        assert!(!frames[2].1);
    }

    #[test]
    fn invalid_filter_does_not_redraw() {
        let mut s = session(10);
        s.load(publications(1)).unwrap();
        let err = s.set_filter("poster").unwrap_err();
        assert!(matches!(
            err,
            FolioError::Catalog(CatalogError::InvalidFilter(_))
        ));
        assert_eq!(s.renderer().frames.len(), 1);
    }

    #[test]
    fn debounced_search_applies_after_pause() {
        let mut s = session(10);
        s.load(publications(12)).unwrap();

        let start = Instant::now();
        s.type_search("Paper 1", start);
        s.type_search("Paper 11", start + Duration::from_millis(100));
        assert!(!s.tick(start + Duration::from_millis(350)).unwrap());
        assert!(s.tick(start + Duration::from_millis(400)).unwrap());

        assert_eq!(s.catalog().search_query(), "Paper 11");
        let last = s.renderer().frames.last().unwrap();
        assert_eq!(last.0, vec!["Paper 11"]);
        assert_eq!(s.search_deadline(), None);
    }

    #[test]
    fn superseded_load_is_ignored() {
        let mut s = session(10);
        let slow = s.begin_load();
        let fast = s.begin_load();
        assert!(s.finish_load(fast, publications(2)).unwrap());
        assert!(!s.finish_load(slow, publications(5)).unwrap());
        assert_eq!(s.catalog().len(), 2);
        assert_eq!(s.renderer().frames.len(), 1);
    }

    #[test]
    fn direct_load_supersedes_pending_fetch() {
        let mut s = session(10);
        let pending = s.begin_load();
        s.load(publications(1)).unwrap();

        assert!(!s.finish_load(pending, publications(4)).unwrap());
        assert_eq!(s.catalog().len(), 1);
        assert_eq!(s.catalog().publications()[0].title, "Paper 0");
        assert_eq!(s.renderer().frames.len(), 1);
    }
}
