//! Error types for memlens

use thiserror::Error;

/// Result type alias using MemlensError
pub type Result<T> = std::result::Result<T, MemlensError>;

/// Error type alias for convenience
pub type Error = MemlensError;

/// Main error type for memlens
#[derive(Debug, Error)]
pub enum MemlensError {
    #[error("vector store error: {0}")]
    Store(#[from] lancedb::Error),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow_schema::ArrowError),

    #[error("collection '{name}' not found")]
    CollectionNotFound {
        name: String,
        #[source]
        source: lancedb::Error,
    },

    #[error("embedding error: {0}")]
    Embedding(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
