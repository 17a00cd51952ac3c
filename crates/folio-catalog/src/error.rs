//! Error types for folio-catalog

use thiserror::Error;

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

/// Main error type for folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Catalog operation errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Data loading errors
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Rendering errors
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Errors raised by catalog operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Filter tag not among the configured kinds
    #[error("Unknown publication filter: {0:?}")]
    InvalidFilter(String),

    /// Sort key string not recognized
    #[error("Unknown sort key: {0:?}")]
    InvalidSortKey(String),
}

/// Errors reading or parsing a publication data file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported data shape: {0}")]
    UnsupportedShape(String),
}

/// Errors loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Page size must be positive")]
    InvalidPageSize,
}

/// Errors writing rendered output
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
