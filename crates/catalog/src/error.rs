//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure of the one-shot catalog load.
///
/// `Clone` because a failed load is held in UI state for the rest of the
/// mount's lifetime.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Transport-level failure (DNS, TLS, connection reset, no network).
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("catalog endpoint returned {0}: {1}")]
    Api(u16, String),

    /// The response body was not a well-formed product listing.
    #[error("parse error: {0}")]
    Parse(String),
}

impl CatalogError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn api(status: u16, text: impl Into<String>) -> Self {
        Self::Api(status, text.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
