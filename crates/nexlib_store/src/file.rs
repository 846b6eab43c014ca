//! Directory-backed durable store.
//!
//! This module handles the file system layout for a NexLib store:
//!
//! ```text
//! <root>/<name>/
//! ├─ MANIFEST            # Metadata (name, schema version)
//! └─ <collection>/       # One file per logical key
//!    ├─ nexlib_books.json
//!    ├─ nexlib_users.json
//!    └─ nexlib_admin.json
//! ```
//!
//! The MANIFEST file records the schema version so that opening an older
//! store performs a one-time upgrade, and a store written by a newer
//! build is rejected rather than misread.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::store::StateStore;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the store manifest.
const MANIFEST_FILE: &str = "MANIFEST";
/// Temporary file for atomic manifest writes.
const MANIFEST_TEMP: &str = "MANIFEST.tmp";

/// Manifest persisted at the store root.
#[derive(Debug, Serialize, Deserialize)]
struct Manifest {
    name: String,
    version: u32,
}

/// A durable, directory-backed state store.
///
/// Each logical key is stored as one JSON file inside the collection
/// directory. Writes go through a temporary file and an atomic rename,
/// so a crash mid-write can never leave a half-written value behind.
///
/// Keys are used as file names verbatim and must be simple names
/// (no path separators); the NexLib state layer only ever uses fixed
/// `nexlib_*` keys.
///
/// # Example
///
/// ```rust,ignore
/// use nexlib_store::{FileStore, StateStore, StoreConfig};
///
/// let store = FileStore::open(StoreConfig::default(), data_dir)?;
/// store.put("nexlib_books", &books_json).await?;
/// ```
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    collection_dir: PathBuf,
}

impl FileStore {
    /// Opens or creates a store under `parent`.
    ///
    /// Opening is idempotent: the first open creates the directory
    /// layout and writes the manifest; later opens verify the recorded
    /// version. If the recorded version is older than
    /// `config.version`, the manifest is rewritten and the collection
    /// directory is (re)created - existing keyed records are kept.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Unavailable`] if the layout cannot be created or
    ///   the manifest cannot be read or written
    /// - [`StoreError::Version`] if the recorded version is newer than
    ///   `config.version`
    pub fn open(config: StoreConfig, parent: &Path) -> StoreResult<Self> {
        let root = parent.join(&config.name);
        fs::create_dir_all(&root).map_err(|e| {
            StoreError::unavailable(format!("cannot create store directory {root:?}: {e}"))
        })?;

        let manifest_path = root.join(MANIFEST_FILE);
        let recorded = match fs::read_to_string(&manifest_path) {
            Ok(raw) => Some(serde_json::from_str::<Manifest>(&raw).map_err(|e| {
                StoreError::unavailable(format!("manifest at {manifest_path:?} is corrupt: {e}"))
            })?),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                return Err(StoreError::unavailable(format!(
                    "cannot read manifest at {manifest_path:?}: {e}"
                )))
            }
        };

        if let Some(manifest) = &recorded {
            if manifest.version > config.version {
                return Err(StoreError::Version {
                    found: manifest.version,
                    supported: config.version,
                });
            }
        }

        let collection_dir = root.join(&config.collection);
        fs::create_dir_all(&collection_dir).map_err(|e| {
            StoreError::unavailable(format!(
                "cannot create collection directory {collection_dir:?}: {e}"
            ))
        })?;

        let needs_manifest = match &recorded {
            Some(manifest) => manifest.version < config.version,
            None => true,
        };
        if needs_manifest {
            info!(
                name = %config.name,
                version = config.version,
                "initializing store schema"
            );
            let manifest = Manifest {
                name: config.name.clone(),
                version: config.version,
            };
            let raw = serde_json::to_string_pretty(&manifest)?;
            let temp_path = root.join(MANIFEST_TEMP);
            fs::write(&temp_path, raw).map_err(|e| {
                StoreError::unavailable(format!("cannot write manifest: {e}"))
            })?;
            fs::rename(&temp_path, &manifest_path).map_err(|e| {
                StoreError::unavailable(format!("cannot commit manifest: {e}"))
            })?;
        }

        Ok(Self {
            root,
            collection_dir,
        })
    }

    /// Returns the store's root directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.root
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.collection_dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl StateStore for FileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        match tokio::fs::read(self.value_path(key)).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn put(&self, key: &str, value: &Value) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        let final_path = self.value_path(key);
        let temp_path = self.collection_dir.join(format!("{key}.json.tmp"));

        tokio::fs::write(&temp_path, bytes).await?;
        tokio::fs::rename(&temp_path, &final_path).await?;
        Ok(())
    }
}
