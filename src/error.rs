//! Error types for endpoint URL parsing.

use thiserror::Error;

/// Result type for URL parsing operations.
pub type UrlResult<T> = Result<T, UrlError>;

/// Errors that can occur while parsing a Snowflake endpoint URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// The input does not match the accepted endpoint grammar.
    #[error("invalid Snowflake URL: {0}")]
    Invalid(String),
}

impl UrlError {
    /// Create an invalid-URL error naming the offending input.
    pub fn invalid(raw: impl Into<String>) -> Self {
        Self::Invalid(raw.into())
    }
}
