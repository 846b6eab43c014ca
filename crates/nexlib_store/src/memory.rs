//! In-memory store for testing and degraded sessions.

use crate::error::{StoreError, StoreResult};
use crate::store::StateStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// An in-memory state store.
///
/// This store keeps all values in a map and is suitable for:
/// - Unit and integration tests
/// - Degraded sessions where the durable store could not be opened
///
/// # Offline Mode
///
/// An offline `MemoryStore` fails every operation with
/// [`StoreError::Unavailable`]. This models a platform that denies
/// storage access, so degraded-mode and failed-persist paths can be
/// exercised deterministically.
///
/// # Example
///
/// ```rust,ignore
/// use nexlib_store::{MemoryStore, StateStore};
/// use serde_json::json;
///
/// let store = MemoryStore::new();
/// store.put("greeting", &json!("hello")).await?;
/// assert_eq!(store.get("greeting").await?, Some(json!("hello")));
/// assert_eq!(store.get("missing").await?, None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
    offline: AtomicBool,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that starts in offline mode.
    #[must_use]
    pub fn offline() -> Self {
        let store = Self::default();
        store.offline.store(true, Ordering::Relaxed);
        store
    }

    /// Creates a store pre-populated with entries.
    ///
    /// Useful for testing migration scenarios.
    #[must_use]
    pub fn with_entries(entries: HashMap<String, Value>) -> Self {
        Self {
            entries: RwLock::new(entries),
            offline: AtomicBool::new(false),
        }
    }

    /// Switches the store on or off line.
    ///
    /// While offline, every `get` and `put` fails with
    /// [`StoreError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Relaxed);
    }

    /// Returns whether the store is currently offline.
    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::Relaxed)
    }

    /// Returns a snapshot of all entries.
    ///
    /// Useful for asserting on persisted state in tests. Works even while
    /// offline, since it inspects memory rather than going through the
    /// store contract.
    #[must_use]
    pub fn entries(&self) -> HashMap<String, Value> {
        self.entries.read().clone()
    }

    fn check_online(&self) -> StoreResult<()> {
        if self.is_offline() {
            return Err(StoreError::unavailable("store is offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        self.check_online()?;
        Ok(self.entries.read().get(key).cloned())
    }

    async fn put(&self, key: &str, value: &Value) -> StoreResult<()> {
        self.check_online()?;
        self.entries.write().insert(key.to_string(), value.clone());
        Ok(())
    }
}
