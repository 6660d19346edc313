//! Error types for the ttH multilepton selection core

use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error (duplicate table associations, bad thresholds, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Ingestion error (capacity bound violated, inconsistent column block)
    #[error("Ingestion error: {0}")]
    Ingestion(String),

    /// Validation error (malformed lookup tables, non-monotonic bin edges)
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
