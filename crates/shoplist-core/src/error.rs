//! Error types for Shoplist Core
//!
//! Validation failures (duplicate add, unknown name, nothing to mark) are not
//! errors: operations report them as `Ok(false)`. The types here cover hard
//! failures only.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors raised by the durable store
#[derive(Error, Debug)]
pub enum StoreError {
    /// The persisted file exists but could not be read or decoded
    #[error("corrupt data in {path:?}: {reason}")]
    Corrupt {
        /// File that failed to load
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// A loaded record broke a collection invariant
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// Writing the collection failed
    #[error("failed to write {path:?}: {source}")]
    Write {
        /// Target file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Encoding the collection failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors not tied to a single path
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the list service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Item names must be non-empty
    #[error("item name must not be empty")]
    InvalidName,

    /// Amounts must be finite; JSON has no encoding for NaN or infinity
    #[error("value must be a finite number, got {0}")]
    InvalidValue(f64),

    /// The store failed. When returned from a mutation the in-memory state
    /// already holds the change and no longer matches storage.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// True for failures caused by the caller's input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ServiceError::InvalidName | ServiceError::InvalidValue(_))
    }
}
