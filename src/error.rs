//! Error types for SimilarWeb API operations.

use thiserror::Error;

/// Errors that can occur during SimilarWeb API operations.
///
/// Domain-level failures (invalid user key, malformed site URL, rejected
/// field values) are *not* represented here: the API reports them as a
/// `{"Error": <message>}` JSON body, which the client returns to the caller
/// like any other payload.
#[derive(Debug, Error)]
pub enum SimilarwebError {
    /// Configuration is missing or incomplete.
    #[error("SimilarWeb configuration required: {0}")]
    ConfigMissing(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

/// Result type alias for SimilarWeb operations.
pub type Result<T> = core::result::Result<T, SimilarwebError>;
