//! Publication data loading.
//!
//! Accepts the data file shapes portfolio pages have used:
//!
//! ```text
//! [ {...}, {...} ]                                   bare list
//! { "publications": [ {...} ] }                      flat list under a key
//! { "publications": { "journal_articles": [...],     grouped by category;
//!                     "conference_papers": [...] } } the group key is the kind
//! ```
//!
//! Any failure (missing file, bad JSON, unknown shape, empty list) falls back
//! to a fixed sample list so a catalog is never left uninitialized.

use std::path::{Path, PathBuf};

use folio_domain::{
    validate_publication, Publication, PublicationKind, PublicationStatus, ValidationSeverity,
};
use serde_json::{Map, Value};

use crate::catalog::Catalog;
use crate::error::LoadError;

/// Group keys of the grouped shape, in display order
const GROUP_ORDER: &[&str] = &[
    "journal_articles",
    "conference_papers",
    "book_chapters",
    "technical",
];

/// Where a loaded list came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    File(PathBuf),
    Fallback,
}

/// Publications plus their origin
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub publications: Vec<Publication>,
    pub source: LoadSource,
}

impl LoadOutcome {
    pub fn is_fallback(&self) -> bool {
        self.source == LoadSource::Fallback
    }
}

/// Parse a data file body into publications.
///
/// Records that cannot be read (for example `"citations": true`) or that fail
/// validation (for example an empty title) are dropped with a warning; only
/// an unreadable file or an unknown top-level shape is an error.
pub fn parse_catalog_json(input: &str) -> Result<Vec<Publication>, LoadError> {
    let value: Value = serde_json::from_str(input)?;

    let publications = match value {
        Value::Array(items) => parse_list(items),
        Value::Object(mut root) => match root.remove("publications") {
            Some(Value::Array(items)) => parse_list(items),
            Some(Value::Object(groups)) => parse_groups(groups)?,
            Some(other) => {
                return Err(LoadError::UnsupportedShape(format!(
                    "\"publications\" must be a list or an object of lists, found {}",
                    json_type(&other)
                )))
            }
            None => {
                return Err(LoadError::UnsupportedShape(
                    "object has no \"publications\" key".to_string(),
                ))
            }
        },
        other => {
            return Err(LoadError::UnsupportedShape(format!(
                "expected a list or an object, found {}",
                json_type(&other)
            )))
        }
    };

    Ok(retain_valid(publications))
}

/// Read and parse a data file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<Publication>, LoadError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_catalog_json(&content)
}

/// Read a data file, falling back to [`sample_publications`] on any failure
/// or when the file holds no publications.
pub fn load_or_fallback(path: impl AsRef<Path>) -> LoadOutcome {
    let path = path.as_ref();
    match load_from_path(path) {
        Ok(publications) if !publications.is_empty() => {
            tracing::info!("Loaded {} publications from {:?}", publications.len(), path);
            LoadOutcome {
                publications,
                source: LoadSource::File(path.to_path_buf()),
            }
        }
        Ok(_) => {
            tracing::info!("No publications in {:?}, using sample publications", path);
            fallback()
        }
        Err(e) => {
            tracing::warn!("Failed to load {:?}: {}, using sample publications", path, e);
            fallback()
        }
    }
}

fn fallback() -> LoadOutcome {
    LoadOutcome {
        publications: sample_publications(),
        source: LoadSource::Fallback,
    }
}

/// Fixed list shown when no data file can be used.
pub fn sample_publications() -> Vec<Publication> {
    let sample = |title: &str,
                  authors: &str,
                  venue: &str,
                  year: u32,
                  kind: PublicationKind,
                  status: PublicationStatus| {
        let mut p = Publication::new(title, kind);
        p.authors = authors.to_string();
        p.venue = Some(venue.to_string());
        p.year = Some(year);
        p.status = Some(status);
        p
    };

    vec![
        sample(
            "Building an LLM Firewall: Multi-Phase Defense Against Prompt Injection Attacks",
            "Santos, C.D., et al.",
            "Communications of the ACM",
            2024,
            PublicationKind::journal(),
            PublicationStatus::UnderReview,
        ),
        sample(
            "Evaluating and Mitigating Hallucinations in RAG Systems",
            "Santos, C.D., Johnson, M., Lee, K.",
            "In Preparation",
            2025,
            PublicationKind::journal(),
            PublicationStatus::InPreparation,
        ),
        sample(
            "The AI Recommendation System of Jooay.com: Enhancing Digital Inclusion",
            "Santos, C.D., Research Team",
            "In Preparation",
            2025,
            PublicationKind::conference(),
            PublicationStatus::InPreparation,
        ),
    ]
}

fn parse_list(items: Vec<Value>) -> Vec<Publication> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value(item) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!("Skipping unreadable publication #{}: {}", i, e);
                None
            }
        })
        .collect()
}

fn parse_groups(mut groups: Map<String, Value>) -> Result<Vec<Publication>, LoadError> {
    let mut keys: Vec<String> = GROUP_ORDER
        .iter()
        .filter(|k| groups.contains_key(**k))
        .map(|k| k.to_string())
        .collect();
    let mut rest: Vec<String> = groups
        .keys()
        .filter(|k| !GROUP_ORDER.contains(&k.as_str()))
        .cloned()
        .collect();
    rest.sort();
    keys.extend(rest);

    let mut publications = Vec::new();
    for key in keys {
        let Some(value) = groups.remove(&key) else {
            continue;
        };
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(LoadError::UnsupportedShape(format!(
                    "group {:?} must be a list, found {}",
                    key,
                    json_type(&other)
                )))
            }
        };
        let kind = PublicationKind::new(&key);
        for mut p in parse_list(items) {
            p.kind = kind.clone();
            publications.push(p);
        }
    }
    Ok(publications)
}

fn retain_valid(publications: Vec<Publication>) -> Vec<Publication> {
    publications
        .into_iter()
        .enumerate()
        .filter_map(|(i, p)| {
            let findings = validate_publication(&p);
            if let Some(error) = findings
                .iter()
                .find(|f| f.severity == ValidationSeverity::Error)
            {
                tracing::warn!("Dropping publication #{}: {}", i, error.message);
                return None;
            }
            for warning in &findings {
                tracing::debug!("Publication {:?}: {}", p.title, warning.message);
            }
            Some(p)
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Ticket identifying one load request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

/// Orders overlapping load requests so only the newest one reaches a catalog.
///
/// Call [`LoadSequencer::begin`] when a fetch starts and hand its result to
/// [`LoadSequencer::deliver`] when it completes; results of superseded
/// requests are discarded.
#[derive(Debug, Default)]
pub struct LoadSequencer {
    latest: u64,
}

impl LoadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket.
    pub fn begin(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Load `publications` into `catalog` if `ticket` is still the newest.
    ///
    /// Returns whether the catalog was updated.
    pub fn deliver(
        &self,
        ticket: LoadTicket,
        catalog: &mut Catalog,
        publications: Vec<Publication>,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                "Discarding superseded load {:?} (latest is {})",
                ticket,
                self.latest
            );
            return false;
        }
        catalog.load(publications);
        true
    }
}
