//! Error types for the Shroud engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Restore was called with a missing or empty context. The masked input
    /// is left untouched; this is a caller error, not data corruption.
    #[error("restore context is invalid or empty")]
    InvalidContext,

    #[error("invalid custom pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
