//! Category filter for the publication list.
//!
//! Filter buttons carry a tag: `all`, one of the configured kinds, or the
//! synthetic `inprep` tag (also `in-progress`) selecting publications that are
//! under review or in preparation.

use std::fmt;

use folio_domain::{Publication, PublicationKind};

use crate::config::CatalogConfig;
use crate::error::CatalogError;

/// Tag of the synthetic in-progress filter as it appears on filter buttons
pub const IN_PROGRESS_TAG: &str = "inprep";

/// Active category filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    /// Every publication
    #[default]
    All,
    /// Status is under review or in preparation
    InProgress,
    /// Publications of one configured kind
    Kind(PublicationKind),
}

impl Filter {
    /// Resolve a filter-button tag against the configured kinds.
    ///
    /// Unknown tags are rejected rather than matching nothing.
    pub fn parse(tag: &str, kinds: &[PublicationKind]) -> Result<Self, CatalogError> {
        let normalized = tag.trim().to_lowercase();
        match normalized.as_str() {
            "all" => return Ok(Self::All),
            IN_PROGRESS_TAG | "in-progress" | "in_progress" => return Ok(Self::InProgress),
            "" => return Err(CatalogError::InvalidFilter(tag.to_string())),
            _ => {}
        }

        let kind = PublicationKind::new(&normalized);
        if kinds.contains(&kind) {
            Ok(Self::Kind(kind))
        } else {
            Err(CatalogError::InvalidFilter(tag.to_string()))
        }
    }

    /// Whether this filter is valid under `config`
    pub fn is_accepted_by(&self, config: &CatalogConfig) -> bool {
        match self {
            Self::All | Self::InProgress => true,
            Self::Kind(kind) => config.accepts_kind(kind),
        }
    }

    pub fn matches(&self, publication: &Publication) -> bool {
        match self {
            Self::All => true,
            Self::InProgress => publication.is_in_progress(),
            Self::Kind(kind) => &publication.kind == kind,
        }
    }

    /// Button tag for this filter
    pub fn tag(&self) -> &str {
        match self {
            Self::All => "all",
            Self::InProgress => IN_PROGRESS_TAG,
            Self::Kind(kind) => kind.as_str(),
        }
    }

    /// All filters offered for a set of kinds, in button order
    pub fn available(kinds: &[PublicationKind]) -> Vec<Filter> {
        std::iter::once(Self::All)
            .chain(kinds.iter().cloned().map(Self::Kind))
            .chain(std::iter::once(Self::InProgress))
            .collect()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
