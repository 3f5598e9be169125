//! # StoreError
//!
//! Centralized error handling for the tribuna data core.
//! Maps storage-level failures to actionable error types.
//!
//! Deliberately absent: a "not found" variant (removing or fetching an
//! unknown id is a no-op, not a failure) and an "unauthorized" variant
//! (the session guard answers with a redirect value, never an error).

use thiserror::Error;

/// The primary error type for all store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing key-value medium cannot be read or written
    /// (disk full, directory missing, storage disabled).
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Non-JSON or wrong-shape data found under a collection key.
    /// Read paths recover from this by treating the collection as empty.
    #[error("collection '{key}' is malformed: {reason}")]
    MalformedCollection { key: String, reason: String },

    /// A collection could not be serialized for writing.
    #[error("could not encode collection '{key}': {reason}")]
    Encode { key: String, reason: String },
}

/// A specialized Result type for tribuna store logic.
pub type Result<T> = std::result::Result<T, StoreError>;
