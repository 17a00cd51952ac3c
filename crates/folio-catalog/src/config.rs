//! Catalog configuration
//!
//! Page size, the accepted publication kinds, the initial sort order and the
//! search debounce window. Loaded from TOML:
//!
//! ```toml
//! page_size = 10
//! kinds = ["journal", "conference", "book", "review"]
//! default_sort = "year-desc"
//! search_debounce_ms = 300
//! ```
//!
//! Every key is optional; a missing file means defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use folio_domain::PublicationKind;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sort::SortKey;

/// Catalog pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Publications revealed per page ("load more" step)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Kinds accepted by the filter, in button order
    #[serde(default = "default_kinds")]
    pub kinds: Vec<PublicationKind>,
    /// Sort key applied when a catalog is created
    #[serde(default)]
    pub default_sort: SortKey,
    /// Idle window before a typed search is applied
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_page_size() -> usize {
    10
}

fn default_kinds() -> Vec<PublicationKind> {
    vec![
        PublicationKind::journal(),
        PublicationKind::conference(),
        PublicationKind::book(),
        PublicationKind::review(),
        PublicationKind::technical(),
    ]
}

fn default_search_debounce_ms() -> u64 {
    300
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            kinds: default_kinds(),
            default_sort: SortKey::default(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

impl CatalogConfig {
    /// Default config with a different page size
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing default file yields defaults; a missing explicit path is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => match Self::default_path() {
                Some(p) if p.exists() => {
                    tracing::debug!("Loading catalog config from {:?}", p);
                    Self::load(p)
                }
                _ => Ok(Self::default()),
            },
        }
    }

    /// `<config dir>/folio/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        Ok(())
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Whether `kind` is one of the configured kinds
    pub fn accepts_kind(&self, kind: &PublicationKind) -> bool {
        self.kinds.iter().any(|k| k == kind)
    }
}
