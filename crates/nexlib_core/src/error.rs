//! Error types for NexLib core.

use std::io;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in NexLib core operations.
///
/// Expected outcomes - validation failures, natural-key misses, failed
/// persists after a successful in-memory mutation - are **not** errors;
/// they surface as [`crate::MutationOutcome`] variants so the UI
/// collaborator can react without catching anything. Errors are reserved
/// for genuinely unexpected platform failures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Durable store error.
    #[error("store error: {0}")]
    Store(#[from] nexlib_store::StoreError),

    /// I/O error (file-to-data-URI conversion).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
