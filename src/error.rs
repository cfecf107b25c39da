//! Error types for series-tally
//!
//! Failures in the retrieval pipeline are converted to typed errors at the
//! lowest applicable layer. Nothing here escapes a run: enumeration failures
//! collapse to an empty listing and per-post failures collapse to a
//! zero-count result. The variants exist so the layers in between stay honest
//! about what went wrong, and so retry classification has something to
//! inspect.

use thiserror::Error;

/// Result type alias for series-tally operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for series-tally
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "user_agent")
        key: Option<String>,
    },

    /// Transport-level HTTP failure (connect, timeout, body read, decode)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status from an endpoint
    #[error("HTTP status {status} for {url}")]
    HttpStatus {
        /// The status code returned by the server
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A structured response was missing an expected field
    #[error("missing content field: {0}")]
    MissingContent(String),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid matching pattern
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
