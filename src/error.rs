//! Error types for cinedash.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cinedash.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("catalog API key not configured. Set the OMDB_API_KEY environment variable")]
    ApiKeyMissing,

    #[error("unknown catalog provider: {0}")]
    UnknownProvider(String),

    // Catalog errors
    #[error("catalog request failed: {0}")]
    Upstream(String),

    #[error("movie not found: {0}")]
    NotFound(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error means the service is misconfigured.
    ///
    /// Configuration errors are global: retrying other keywords or
    /// categories cannot succeed, so callers propagate them immediately.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::ApiKeyMissing | Error::UnknownProvider(_))
    }

    /// Whether this error means the requested record or category does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::UnknownCategory(_))
    }
}
