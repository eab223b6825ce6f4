//! Error types for songbook operations.

use thiserror::Error;

/// Main error type for all songbook operations.
#[derive(Debug, Error)]
pub enum SongbookError {
    /// The target element was not found in the page.
    #[error("Element not found: #{0}")]
    ElementNotFound(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// HTTP request failed before a response arrived.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Base URL or page location could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for songbook operations.
pub type Result<T> = std::result::Result<T, SongbookError>;
