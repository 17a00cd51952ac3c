//! Publication category and workflow status tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tag of a publication (`journal`, `conference`, `book`, ...).
///
/// The set of accepted kinds is configuration, so this is an open newtype
/// rather than a closed enum. Values are stored trimmed and lower-cased, and
/// the plural group names used by grouped data files collapse onto their
/// short form (`journal_articles` becomes `journal`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PublicationKind(String);

impl PublicationKind {
    pub const JOURNAL: &'static str = "journal";
    pub const CONFERENCE: &'static str = "conference";
    pub const BOOK: &'static str = "book";
    pub const REVIEW: &'static str = "review";
    pub const TECHNICAL: &'static str = "technical";

    /// Normalize a raw tag into a kind.
    pub fn new(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        let canonical = match lowered.as_str() {
            "journal_articles" | "journal-article" | "journal_article" | "article" => {
                Self::JOURNAL
            }
            "conference_papers" | "conference-paper" | "conference_paper" | "proceedings" => {
                Self::CONFERENCE
            }
            "book_chapters" | "book-chapter" | "book_chapter" | "chapter" => Self::BOOK,
            other => return Self(other.to_string()),
        };
        Self(canonical.to_string())
    }

    pub fn journal() -> Self {
        Self(Self::JOURNAL.to_string())
    }

    pub fn conference() -> Self {
        Self(Self::CONFERENCE.to_string())
    }

    pub fn book() -> Self {
        Self(Self::BOOK.to_string())
    }

    pub fn review() -> Self {
        Self(Self::REVIEW.to_string())
    }

    pub fn technical() -> Self {
        Self(Self::TECHNICAL.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the tag is empty (no category was supplied).
    pub fn is_unspecified(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for PublicationKind {
    fn default() -> Self {
        Self(String::new())
    }
}

impl From<String> for PublicationKind {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for PublicationKind {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<PublicationKind> for String {
    fn from(kind: PublicationKind) -> Self {
        kind.0
    }
}

impl fmt::Display for PublicationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Workflow status of a publication that is not yet out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PublicationStatus {
    UnderReview,
    InPreparation,
    /// Any other tag, preserved verbatim
    Other(String),
}

impl PublicationStatus {
    /// Parse a status tag. Case and `_`/space separators are ignored.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "under-review" => Self::UnderReview,
            "in-preparation" | "in-prep" | "inprep" => Self::InPreparation,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    /// Kebab-case tag as written in data files.
    pub fn as_str(&self) -> &str {
        match self {
            Self::UnderReview => "under-review",
            Self::InPreparation => "in-preparation",
            Self::Other(tag) => tag,
        }
    }

    /// Under review or in preparation.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::UnderReview | Self::InPreparation)
    }
}

impl From<String> for PublicationStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<PublicationStatus> for String {
    fn from(status: PublicationStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("journal", "journal")]
    #[case("  Journal ", "journal")]
    #[case("journal_articles", "journal")]
    #[case("conference_papers", "conference")]
    #[case("book_chapters", "book")]
    #[case("technical", "technical")]
    #[case("dataset", "dataset")]
    fn kind_normalization(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(PublicationKind::new(raw).as_str(), expected);
    }

    #[rstest]
    #[case("under-review", PublicationStatus::UnderReview)]
    #[case("Under Review", PublicationStatus::UnderReview)]
    #[case("in-preparation", PublicationStatus::InPreparation)]
    #[case("in_preparation", PublicationStatus::InPreparation)]
    fn status_parse(#[case] raw: &str, #[case] expected: PublicationStatus) {
        assert_eq!(PublicationStatus::parse(raw), expected);
        assert!(expected.is_in_progress());
    }

    #[test]
    fn other_status_is_preserved() {
        let status = PublicationStatus::parse("accepted");
        assert_eq!(status, PublicationStatus::Other("accepted".to_string()));
        assert!(!status.is_in_progress());
        assert_eq!(status.as_str(), "accepted");
    }

    #[test]
    fn kind_serde_roundtrip_uses_plain_string() {
        let kind = PublicationKind::conference();
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, "\"conference\"");
        let back: PublicationKind = serde_json::from_str("\"conference_papers\"").unwrap();
        assert_eq!(back, kind);
    }
}
