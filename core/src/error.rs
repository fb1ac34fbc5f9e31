use thiserror::Error;

#[derive(Debug, Error)]
pub enum FluentQueryError {
    /// Failure reported by the backend while executing a query page
    #[error("Backend error: {0}")]
    Backend(String),

    /// Failure reported by the cache collaborator
    #[error("Cache error: {0}")]
    Cache(String),

    /// An operation was called in a way that can never succeed
    #[error("Misuse: {0}")]
    Misuse(String),

    /// Error converting a record into the requested record type
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Error serializing a query expression for fingerprinting
    #[error("Fingerprint error: {0}")]
    Fingerprint(String),
}

impl FluentQueryError {
    /// Wraps any displayable backend failure.
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }

    /// Wraps any displayable cache failure.
    pub fn cache(err: impl std::fmt::Display) -> Self {
        Self::Cache(err.to_string())
    }
}

/// Result type for query operations
pub type Result<T> = std::result::Result<T, FluentQueryError>;
