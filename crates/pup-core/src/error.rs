//! Unified error type for the pupgallery crates.
//!
//! All crates funnel their failures into [`Error`]. Storage failures are
//! split into "could not reach the store" and "an operation against the
//! store failed" so callers can decide between retry and abort.

use std::fmt;

/// Unified error type covering all failure modes in pupgallery.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested entity could not be found.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity (e.g. "image", "vote record").
        entity: String,
        /// The identifier that was looked up.
        id: String,
    },

    /// Input data failed validation or conversion.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backing store could not be opened or a connection could not be
    /// obtained.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A storage operation (prepare, execute, transaction) failed.
    #[error("Storage error [{op}]: {message}")]
    Storage {
        /// The operation that failed (e.g. "bulk_upsert", "load_by_ids").
        op: String,
        /// Human-readable error description.
        message: String,
    },

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Convenience constructor for [`Error::NotFound`].
    pub fn not_found(entity: impl Into<String>, id: impl fmt::Display) -> Self {
        Error::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Convenience constructor for [`Error::StorageUnavailable`].
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Error::StorageUnavailable(message.into())
    }

    /// Convenience constructor for [`Error::Storage`].
    pub fn storage(op: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Storage {
            op: op.into(),
            message: message.into(),
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
