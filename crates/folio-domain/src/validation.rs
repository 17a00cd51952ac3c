//! Validation for publications

use super::Publication;
use serde::{Deserialize, Serialize};

/// Severity of a validation error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

/// A validation error or warning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

/// Validate a publication and return errors/warnings.
///
/// A publication with any `Error` entry must not enter a catalog.
pub fn validate_publication(publication: &Publication) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if publication.title.trim().is_empty() {
        errors.push(ValidationError {
            field: "title".to_string(),
            message: "Title is required".to_string(),
            severity: ValidationSeverity::Error,
        });
    }

    if publication.kind.is_unspecified() {
        errors.push(ValidationError {
            field: "type".to_string(),
            message: "Publication type is missing; it will only match the 'all' filter"
                .to_string(),
            severity: ValidationSeverity::Warning,
        });
    }

    if publication.authors.is_empty() {
        errors.push(ValidationError {
            field: "authors".to_string(),
            message: "Authors are recommended".to_string(),
            severity: ValidationSeverity::Warning,
        });
    }

    if let Some(year) = publication.year {
        if !(1900..=2100).contains(&year) {
            errors.push(ValidationError {
                field: "year".to_string(),
                message: format!("Year {} seems unlikely", year),
                severity: ValidationSeverity::Warning,
            });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PublicationKind;

    #[test]
    fn test_empty_title_is_error() {
        let p = Publication::new("   ", PublicationKind::journal());
        let errors = validate_publication(&p);
        assert!(errors
            .iter()
            .any(|e| e.field == "title" && e.severity == ValidationSeverity::Error));
    }

    #[test]
    fn test_missing_authors_is_only_warning() {
        let p = Publication::new("A Title", PublicationKind::journal());
        let errors = validate_publication(&p);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "authors");
        assert_eq!(errors[0].severity, ValidationSeverity::Warning);
    }

    #[test]
    fn test_unlikely_year_warns() {
        let mut p = Publication::new("A Title", PublicationKind::default());
        p.authors = "X".to_string();
        p.year = Some(3024);
        let fields: Vec<_> = validate_publication(&p).into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["type", "year"]);
    }
}
