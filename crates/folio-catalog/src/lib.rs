//! folio-catalog: the publication list pipeline behind a portfolio page.
//!
//! This library provides:
//! - Catalog: filter, search, sort and "load more" pagination over a publication list
//! - Loader: data file parsing with a sample-list fallback and superseded-load discarding
//! - Rendering collaborators: plain-text and JSON renderers, badge labels
//! - Session glue: redraw-on-change and debounced search input
//! - Statistics: filter counts, citation totals, h-index
//!
//! Presentation stays outside the catalog: it only ever hands a
//! [`VisibleSlice`] (items plus a "more remain" flag) to a [`CatalogRenderer`].

pub mod catalog;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod loader;
pub mod render;
pub mod search;
pub mod session;
pub mod sort;
pub mod stats;

pub use catalog::{Catalog, VisibleSlice};
pub use config::CatalogConfig;
pub use debounce::SearchDebouncer;
pub use error::{CatalogError, ConfigError, FolioError, LoadError, RenderError, Result};
pub use filter::{Filter, IN_PROGRESS_TAG};
pub use loader::{
    load_from_path, load_or_fallback, parse_catalog_json, sample_publications, LoadOutcome,
    LoadSequencer, LoadSource, LoadTicket,
};
pub use render::{badge_class, badge_label, CatalogRenderer, JsonRenderer, TextRenderer};
pub use search::SearchQuery;
pub use session::CatalogSession;
pub use sort::SortKey;
pub use stats::{h_index, CatalogStats, FilterCount};

// Domain types travel with the catalog API
pub use folio_domain::{Publication, PublicationKind, PublicationStatus};
