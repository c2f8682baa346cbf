//! Error types for lexidb
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Absence is not an error: a missing key or a word that is not in the
//! index produces an empty result, never an `Error`.

use std::io;
use thiserror::Error;

/// Result type alias for lexidb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the lexidb store and index
#[derive(Debug, Error)]
pub enum Error {
    /// Search query is empty
    #[error("invalid query: query must not be empty")]
    InvalidQuery,

    /// Result limit below the minimum of 1
    #[error("invalid limit: limit must be at least 1, got {0}")]
    InvalidLimit(usize),

    /// Record key is empty
    #[error("invalid key: key must not be empty")]
    InvalidKey,

    /// Field name for a scoped search is empty
    #[error("invalid field: field name must not be empty")]
    InvalidField,

    /// Key already present on `set` (the store is insert-only per key)
    #[error("key already exists: {0:?} (delete it before setting it again)")]
    KeyExists(String),

    /// Full-text index attached twice
    #[error("full-text index already initialized")]
    AlreadyInitialized,

    /// Full-text operation invoked without an attached index
    #[error("full-text index not initialized")]
    NotInitialized,

    /// Word-count budget exceeded during insertion
    #[error("full-text word budget exceeded ({current}/{max} words)")]
    WordBudget {
        /// Word-token count at the time of the breach
        current: usize,
        /// Configured maximum number of word tokens
        max: usize,
    },

    /// Byte-size budget exceeded during insertion
    #[error("full-text byte budget exceeded ({current}/{max} bytes)")]
    ByteBudget {
        /// Estimated posting-store size at the time of the breach
        current: u64,
        /// Configured maximum size in bytes
        max: u64,
    },

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the record loader
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether this is a capacity error (budget breach, safe to retry with
    /// a smaller payload or a larger budget; the triggering mutation was
    /// fully rolled back).
    pub fn is_capacity(&self) -> bool {
        matches!(self, Error::WordBudget { .. } | Error::ByteBudget { .. })
    }
}
