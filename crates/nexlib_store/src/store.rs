//! State store trait definition.

use crate::error::StoreResult;
use async_trait::async_trait;
use serde_json::Value;

/// An asynchronous key-value store for application state.
///
/// A state store is a single untyped mapping from string key to JSON
/// value. Reads and writes are whole-value: `put` replaces any prior
/// value for the key entirely, and callers merge in memory before
/// persisting.
///
/// # Invariants
///
/// - `get` for a never-written key resolves to `Ok(None)`, not an error
/// - after `put(key, v)` resolves, `get(key)` resolves to `Some(v)` until
///   the next `put` for the same key
/// - the store itself does **not** serialize concurrent writes to the
///   same key; callers that need write ordering must issue their puts
///   sequentially
///
/// # Implementors
///
/// - [`crate::FileStore`] - For durable storage
/// - [`crate::MemoryStore`] - For testing and degraded sessions
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Resolves to `None` if the key was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable or the stored bytes
    /// cannot be read.
    async fn get(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Writes `value` under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable or the write fails.
    async fn put(&self, key: &str, value: &Value) -> StoreResult<()>;
}
