//! Read-only view of the legacy flat storage.

use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// The legacy flat key-value storage.
///
/// Older NexLib builds persisted each logical key as one plain-text
/// file containing a JSON string. This store is synchronous,
/// string-only, and consulted exactly once per key during migration.
/// It is **never written** by the state layer.
///
/// A missing directory or file simply means "no legacy value"; the
/// migration controller then falls back to compiled-in defaults.
#[derive(Debug, Clone)]
pub struct LegacyStore {
    root: PathBuf,
}

impl LegacyStore {
    /// Creates a view over a legacy storage directory.
    ///
    /// No I/O happens here; a nonexistent directory yields `None` for
    /// every key.
    #[must_use]
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Reads the raw string stored under `key`, if any.
    ///
    /// Unreadable files are treated as absent; the migration fallback
    /// chain handles the rest.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.root.join(key)) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                debug!(key, error = %e, "legacy value unreadable; treating as absent");
                None
            }
        }
    }
}
