//! Error types for store operations.

use std::io;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations.
///
/// A missing key is **not** an error; [`crate::StateStore::get`] resolves
/// to `None` for keys that were never written.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O error occurred while reading or writing a value.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A value could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The platform denied access to the store (storage disabled,
    /// quota exceeded, directory not writable).
    #[error("store unavailable: {message}")]
    Unavailable {
        /// Description of why the store cannot be used.
        message: String,
    },

    /// The on-disk store was written by a newer schema version.
    #[error("unsupported store version: found {found}, supported up to {supported}")]
    Version {
        /// The version recorded in the store manifest.
        found: u32,
        /// The highest version this build understands.
        supported: u32,
    },
}

impl StoreError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
