//! Publication domain model

use super::{PublicationKind, PublicationStatus};
use serde::{Deserialize, Serialize};

/// A publication listed on the portfolio page.
///
/// Deserialization is lenient about the shapes found in portfolio data files:
/// the category may be called `type` or `category`, authors may be a string or
/// a list of names, years and citation counts may be numbers or numeric strings,
/// and empty strings count as absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPublication")]
pub struct Publication {
    pub title: String,
    pub authors: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(rename = "type")]
    pub kind: PublicationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PublicationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<u32>,
}

impl Publication {
    /// Create a publication with only the required fields set
    pub fn new(title: impl Into<String>, kind: PublicationKind) -> Self {
        Self {
            title: title.into(),
            authors: String::new(),
            venue: None,
            year: None,
            kind,
            status: None,
            doi: None,
            url: None,
            citations: None,
        }
    }

    /// Whether the status marks this as under review or in preparation
    pub fn is_in_progress(&self) -> bool {
        self.status
            .as_ref()
            .is_some_and(PublicationStatus::is_in_progress)
    }

    /// Year used for ordering; missing years order as 0
    pub fn sort_year(&self) -> u32 {
        self.year.unwrap_or(0)
    }

    /// Citation count used for ordering; missing counts order as 0
    pub fn sort_citations(&self) -> u32 {
        self.citations.unwrap_or(0)
    }

    /// Outbound link: the DOI resolver when a DOI exists, otherwise the URL.
    pub fn link(&self) -> Option<String> {
        if let Some(doi) = &self.doi {
            if doi.starts_with("http://") || doi.starts_with("https://") {
                return Some(doi.clone());
            }
            return Some(format!("https://doi.org/{}", doi));
        }
        self.url.clone()
    }
}

/// Wire shape accepted from data files before normalization.
#[derive(Debug, Default, Deserialize)]
struct RawPublication {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    authors: Option<RawAuthors>,
    #[serde(default)]
    venue: Option<String>,
    #[serde(default)]
    year: Option<RawNumber>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    doi: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    citations: Option<RawNumber>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAuthors {
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawNumber {
    fn as_i64(&self) -> Option<i64> {
        match self {
            RawNumber::Int(n) => Some(*n),
            RawNumber::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            RawNumber::Float(_) => None,
            RawNumber::Text(s) => s.trim().parse().ok(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<RawPublication> for Publication {
    fn from(raw: RawPublication) -> Self {
        let authors = match raw.authors {
            Some(RawAuthors::Text(text)) => text.trim().to_string(),
            Some(RawAuthors::List(names)) => names
                .iter()
                .map(|n| n.trim())
                .filter(|n| !n.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
            None => String::new(),
        };

        // `category` is the pipeline field in grouped data; `type` may hold the
        // raw upstream type there, so it only counts when `category` is absent.
        let kind = non_empty(raw.category)
            .or_else(|| non_empty(raw.kind))
            .map(|k| PublicationKind::new(&k))
            .unwrap_or_default();

        let year = raw
            .year
            .as_ref()
            .and_then(RawNumber::as_i64)
            .filter(|y| *y > 0)
            .and_then(|y| u32::try_from(y).ok());

        let citations = raw
            .citations
            .as_ref()
            .and_then(RawNumber::as_i64)
            .filter(|c| *c >= 0)
            .and_then(|c| u32::try_from(c).ok());

        Self {
            title: raw.title.map(|t| t.trim().to_string()).unwrap_or_default(),
            authors,
            venue: non_empty(raw.venue),
            year,
            kind,
            status: non_empty(raw.status).map(|s| PublicationStatus::parse(&s)),
            doi: non_empty(raw.doi),
            url: non_empty(raw.url),
            citations,
        }
    }
}
