//! Migration and seeding controller.
//!
//! Guarantees that after initialization every logical key has a
//! well-defined value in both the in-memory catalog and the durable
//! store, regardless of prior state. Each key is resolved through a
//! linear fallback chain:
//!
//! 1. durable store - accepted verbatim when present
//! 2. legacy flat storage - parsed, adopted, and written back
//! 3. compiled-in default - written back
//!
//! so a second load always resolves at step 1 (idempotent migration).
//! If the durable store fails outright the session degrades to
//! in-memory defaults with a logged warning; later persists keep
//! failing audibly but never crash the application.

use crate::catalog::Catalog;
use crate::defaults::{default_admin, default_books, default_users};
use crate::keys;
use nexlib_store::{
    FileStore, LegacyStore, MemoryStore, StateStore, StoreConfig, StoreResult,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Users removed from the roster once after load (one-time data
/// hygiene carried over from the previous generation).
pub const USER_DENYLIST: [&str; 2] = ["Bapan", "Anuran"];

/// Where a key's value came from during initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOrigin {
    /// Already present in the durable store; adopted verbatim.
    Durable,
    /// Migrated from the legacy flat storage and written back.
    Legacy,
    /// Seeded from the compiled-in default and written back.
    Seeded,
}

/// Outcome of one initialization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Where the Books collection came from.
    pub books: ValueOrigin,
    /// Where the Users collection came from.
    pub users: ValueOrigin,
    /// Where the admin profile came from.
    pub admin: ValueOrigin,
    /// Whether the durable store failed and the session runs on
    /// in-memory defaults only.
    pub degraded: bool,
    /// Number of denylisted users removed after load.
    pub removed_users: usize,
}

/// Opens the durable store at `data_dir`, propagating failures.
///
/// # Errors
///
/// Returns [`crate::CoreError::Store`] when the platform denies access
/// or the on-disk store was written by a newer build.
pub fn open_durable_store(
    config: StoreConfig,
    data_dir: &Path,
) -> crate::CoreResult<Arc<dyn StateStore>> {
    Ok(Arc::new(FileStore::open(config, data_dir)?))
}

/// Opens the durable store at `data_dir`, falling back to an offline
/// in-memory store when the platform denies access.
///
/// The offline fallback keeps the session alive: [`load`] will seed
/// defaults and report `degraded`, and every later persist fails with a
/// logged warning instead of crashing.
#[must_use]
pub fn open_store(config: StoreConfig, data_dir: &Path) -> Arc<dyn StateStore> {
    match open_durable_store(config, data_dir) {
        Ok(store) => store,
        Err(e) => {
            warn!(error = %e, "cannot open durable store; session will not persist");
            Arc::new(MemoryStore::offline())
        }
    }
}

/// Initializes the catalog from the store, the legacy storage, and the
/// compiled-in defaults.
///
/// Resolves each of the three keys through the fallback chain, writes
/// migrated or seeded values back to the store, removes denylisted
/// users, and returns the live catalog together with a [`LoadReport`]
/// describing what happened.
pub async fn load(store: Arc<dyn StateStore>, legacy: Option<&LegacyStore>) -> (Catalog, LoadReport) {
    match resolve_all(&store, legacy).await {
        Ok(((books, books_origin), (users, users_origin), (admin, admin_origin))) => {
            info!(
                books = ?books_origin,
                users = ?users_origin,
                admin = ?admin_origin,
                "state initialized"
            );
            let catalog = Catalog::new(store, books, users, admin);
            let removed_users = catalog.remove_users_named(&USER_DENYLIST).await;
            if removed_users > 0 {
                info!(removed_users, "removed denylisted users");
            }
            let report = LoadReport {
                books: books_origin,
                users: users_origin,
                admin: admin_origin,
                degraded: false,
                removed_users,
            };
            (catalog, report)
        }
        Err(e) => {
            warn!(error = %e, "durable store unavailable; running in-memory with defaults");
            let catalog = Catalog::new(store, default_books(), default_users(), default_admin());
            let removed_users = catalog.remove_users_named(&USER_DENYLIST).await;
            let report = LoadReport {
                books: ValueOrigin::Seeded,
                users: ValueOrigin::Seeded,
                admin: ValueOrigin::Seeded,
                degraded: true,
                removed_users,
            };
            (catalog, report)
        }
    }
}

type Resolved<T> = (T, ValueOrigin);

async fn resolve_all(
    store: &Arc<dyn StateStore>,
    legacy: Option<&LegacyStore>,
) -> StoreResult<(
    Resolved<Vec<crate::Book>>,
    Resolved<Vec<crate::User>>,
    Resolved<crate::AdminProfile>,
)> {
    let books = resolve(store, legacy, keys::BOOKS, default_books).await?;
    let users = resolve(store, legacy, keys::USERS, default_users).await?;
    let admin = resolve(store, legacy, keys::ADMIN, default_admin).await?;
    Ok((books, users, admin))
}

/// Resolves one key through the durable -> legacy -> default chain.
///
/// Values resolved past step 1 are written back before returning, so
/// the next load short-circuits at the durable store. Store failures
/// propagate; parse failures fall through to the next step.
async fn resolve<T>(
    store: &Arc<dyn StateStore>,
    legacy: Option<&LegacyStore>,
    key: &str,
    default: impl FnOnce() -> T,
) -> StoreResult<Resolved<T>>
where
    T: Serialize + DeserializeOwned,
{
    if let Some(value) = store.get(key).await? {
        match serde_json::from_value(value) {
            Ok(resolved) => return Ok((resolved, ValueOrigin::Durable)),
            Err(e) => {
                debug!(key, error = %e, "stored value does not decode; falling through");
            }
        }
    }

    if let Some(raw) = legacy.and_then(|l| l.get(key)) {
        match serde_json::from_str::<T>(&raw) {
            Ok(resolved) => {
                store.put(key, &serde_json::to_value(&resolved)?).await?;
                return Ok((resolved, ValueOrigin::Legacy));
            }
            Err(e) => {
                debug!(key, error = %e, "legacy value is not valid JSON; seeding default");
            }
        }
    }

    let resolved = default();
    store.put(key, &serde_json::to_value(&resolved)?).await?;
    Ok((resolved, ValueOrigin::Seeded))
}
