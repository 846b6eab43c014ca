//! End-to-end initialization scenarios: seeding, legacy migration,
//! denylist cleanup, degraded mode, and persist ordering.

use async_trait::async_trait;
use nexlib_core::{
    default_users, keys, load, open_store, BookDraft, Catalog, LoadReport, MutationOutcome,
    UserDraft, ValueOrigin,
};
use nexlib_store::{
    FileStore, LegacyStore, MemoryStore, StateStore, StoreConfig, StoreResult,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn users_value(names: &[&str]) -> Value {
    Value::Array(
        names
            .iter()
            .map(|name| {
                json!({
                    "name": name,
                    "role": "Member",
                    "date": "01/01/2026",
                    "status": "Active",
                    "img": "img.jpg"
                })
            })
            .collect(),
    )
}

#[tokio::test]
async fn first_load_seeds_defaults_and_persists_them() {
    let store = Arc::new(MemoryStore::new());
    let (catalog, report) = load(store.clone(), None).await;

    assert_eq!(report.books, ValueOrigin::Seeded);
    assert_eq!(report.users, ValueOrigin::Seeded);
    assert_eq!(report.admin, ValueOrigin::Seeded);
    assert!(!report.degraded);
    assert_eq!(catalog.books().len(), 5);

    // Defaults were written back, so all three keys are durable now
    let entries = store.entries();
    assert!(entries.contains_key(keys::BOOKS));
    assert!(entries.contains_key(keys::USERS));
    assert!(entries.contains_key(keys::ADMIN));
}

#[tokio::test]
async fn second_load_resolves_from_durable_store() {
    let store = Arc::new(MemoryStore::new());
    load(store.clone(), None).await;

    let (_, report) = load(store, None).await;
    assert_eq!(report.books, ValueOrigin::Durable);
    assert_eq!(report.users, ValueOrigin::Durable);
    assert_eq!(report.admin, ValueOrigin::Durable);
}

#[tokio::test]
async fn first_load_against_file_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let store: Arc<dyn StateStore> =
            Arc::new(FileStore::open(StoreConfig::default(), dir.path()).unwrap());
        let (_, report) = load(store, None).await;
        assert_eq!(report.books, ValueOrigin::Seeded);
    }
    // Reopen without any legacy data present: defaults were durably
    // persisted by the first load
    let store: Arc<dyn StateStore> =
        Arc::new(FileStore::open(StoreConfig::default(), dir.path()).unwrap());
    let (catalog, report) = load(store, None).await;
    assert_eq!(report.books, ValueOrigin::Durable);
    assert_eq!(catalog.books().len(), 5);
}

#[tokio::test]
async fn legacy_values_are_adopted_verbatim_and_written_back() {
    let legacy_dir = TempDir::new().unwrap();
    std::fs::write(
        legacy_dir.path().join(keys::USERS),
        users_value(&["Legacy Person"]).to_string(),
    )
    .unwrap();
    let legacy = LegacyStore::open(legacy_dir.path());

    let store = Arc::new(MemoryStore::new());
    let (catalog, report) = load(store.clone(), Some(&legacy)).await;

    assert_eq!(report.users, ValueOrigin::Legacy);
    assert_eq!(report.books, ValueOrigin::Seeded);
    assert_eq!(catalog.users().len(), 1);
    assert_eq!(catalog.users()[0].name, "Legacy Person");

    // Written back under the new key before initialization completed
    let persisted = store.entries().get(keys::USERS).cloned().unwrap();
    assert_eq!(persisted.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn migration_is_idempotent_and_ignores_legacy_after_first_load() {
    let legacy_dir = TempDir::new().unwrap();
    std::fs::write(
        legacy_dir.path().join(keys::USERS),
        users_value(&["Legacy Person"]).to_string(),
    )
    .unwrap();
    let legacy = LegacyStore::open(legacy_dir.path());

    let store = Arc::new(MemoryStore::new());
    load(store.clone(), Some(&legacy)).await;

    // Mutate the legacy value between loads; it must not matter
    std::fs::write(
        legacy_dir.path().join(keys::USERS),
        users_value(&["Imposter"]).to_string(),
    )
    .unwrap();

    let (catalog, report) = load(store, Some(&legacy)).await;
    assert_eq!(report.users, ValueOrigin::Durable);
    assert_eq!(catalog.users()[0].name, "Legacy Person");
}

#[tokio::test]
async fn unparseable_legacy_value_falls_through_to_defaults() {
    let legacy_dir = TempDir::new().unwrap();
    std::fs::write(legacy_dir.path().join(keys::BOOKS), "{not json").unwrap();
    let legacy = LegacyStore::open(legacy_dir.path());

    let store = Arc::new(MemoryStore::new());
    let (catalog, report) = load(store, Some(&legacy)).await;

    assert_eq!(report.books, ValueOrigin::Seeded);
    assert_eq!(catalog.books().len(), 5);
}

#[tokio::test]
async fn denylisted_users_are_removed_once() {
    let mut entries = HashMap::new();
    entries.insert(
        keys::USERS.to_string(),
        users_value(&["Alice", "Bapan", "Bob", "Anuran"]),
    );
    let store = Arc::new(MemoryStore::with_entries(entries));

    let (catalog, report) = load(store.clone(), None).await;
    assert_eq!(report.removed_users, 2);

    let names: Vec<String> = catalog.users().into_iter().map(|u| u.name).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);

    // The filtered roster was persisted
    let persisted = store.entries().get(keys::USERS).cloned().unwrap();
    assert_eq!(persisted.as_array().unwrap().len(), 2);

    // Running initialization again produces no further changes
    let (_, report) = load(store, None).await;
    assert_eq!(report.removed_users, 0);
}

#[tokio::test]
async fn unavailable_store_degrades_to_in_memory_defaults() {
    let store = Arc::new(MemoryStore::offline());
    let (catalog, report) = load(store, None).await;

    assert!(report.degraded);
    assert_eq!(report.books, ValueOrigin::Seeded);
    assert_eq!(catalog.books().len(), 5);
    assert_eq!(catalog.users().len(), default_users().len());

    // Mutations still work; their persists fail audibly but silently
    let outcome = catalog
        .add_book(BookDraft {
            title: "Degraded".to_string(),
            author: "a".to_string(),
            genre: "g".to_string(),
            rating: 1.0,
            cover: Some("c".to_string()),
            pdf: None,
        })
        .await;
    assert_eq!(outcome, MutationOutcome::MemoryOnly);
    assert!(catalog.find_book_by_title("Degraded").is_some());
}

#[test]
fn open_durable_store_propagates_failures() {
    let dir = TempDir::new().unwrap();
    nexlib_core::open_durable_store(StoreConfig::default().version(2), dir.path()).unwrap();

    // Store written by a newer build must be rejected, not misread
    let result = nexlib_core::open_durable_store(StoreConfig::default().version(1), dir.path());
    assert!(result.is_err());
}

#[tokio::test]
async fn open_store_falls_back_when_path_is_unusable() {
    // A file where the data directory should be denies the open
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocked");
    std::fs::write(&blocker, b"").unwrap();

    let store = open_store(StoreConfig::default(), &blocker);
    let (_, report) = load(store, None).await;
    assert!(report.degraded);
}

/// Store wrapper that delays every write, for observing persist
/// ordering under overlap.
struct SlowStore {
    inner: MemoryStore,
    write_delay: Duration,
}

#[async_trait]
impl StateStore for SlowStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: &Value) -> StoreResult<()> {
        tokio::time::sleep(self.write_delay).await;
        self.inner.put(key, value).await
    }
}

#[tokio::test(start_paused = true)]
async fn overlapping_edits_to_one_user_both_reach_the_store() {
    let slow = Arc::new(SlowStore {
        inner: MemoryStore::new(),
        write_delay: Duration::from_millis(50),
    });
    let catalog = Catalog::new(
        slow.clone(),
        Vec::new(),
        default_users(),
        nexlib_core::default_admin(),
    );

    let alice = catalog.find_user_by_name("Alice Johnson").unwrap();
    let role_edit = UserDraft {
        name: alice.name.clone(),
        role: "Editor".to_string(),
        date: alice.date.clone(),
        status: None,
        img: None,
    };
    let status_edit = UserDraft {
        name: alice.name.clone(),
        role: "Editor".to_string(),
        date: alice.date.clone(),
        status: Some("Inactive".to_string()),
        img: None,
    };

    // Second edit is issued before the first persist resolves; the
    // per-key flush mutex must serialize the writes so the final
    // durable record reflects both edits
    let (first, second) = tokio::join!(
        catalog.update_user(alice.id, role_edit),
        catalog.update_user(alice.id, status_edit),
    );
    assert_eq!(first, MutationOutcome::Persisted);
    assert_eq!(second, MutationOutcome::Persisted);

    let persisted = slow.inner.entries().get(keys::USERS).cloned().unwrap();
    let record = persisted
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["name"] == "Alice Johnson")
        .cloned()
        .unwrap();
    assert_eq!(record["role"], "Editor");
    assert_eq!(record["status"], "Inactive");
}

#[tokio::test]
async fn uniqueness_holds_after_mixed_operations() {
    let store = Arc::new(MemoryStore::new());
    let (catalog, _) = load(store, None).await;

    catalog
        .add_user(UserDraft {
            name: "Fresh User".to_string(),
            role: "Member".to_string(),
            date: "02/02/2026".to_string(),
            status: None,
            img: Some("img".to_string()),
        })
        .await;
    catalog.delete_user_named("Bob Smith").await;
    let emma = catalog.find_user_by_name("Emma Watson").unwrap();
    catalog
        .update_user(
            emma.id,
            UserDraft {
                name: "Emma W.".to_string(),
                role: emma.role.clone(),
                date: emma.date.clone(),
                status: None,
                img: None,
            },
        )
        .await;
    // A duplicate add is rejected
    assert_eq!(
        catalog
            .add_user(UserDraft {
                name: "Fresh User".to_string(),
                role: "Guest".to_string(),
                date: "03/03/2026".to_string(),
                status: None,
                img: Some("other".to_string()),
            })
            .await,
        MutationOutcome::DuplicateKey
    );

    let users = catalog.users();
    for (i, a) in users.iter().enumerate() {
        assert!(
            !users[i + 1..].iter().any(|b| b.name == a.name),
            "duplicate name {}",
            a.name
        );
    }
}

#[tokio::test]
async fn load_report_is_plain_data() {
    // LoadReport is a small copyable summary the UI can stash
    let store = Arc::new(MemoryStore::new());
    let (_, report) = load(store, None).await;
    let copy: LoadReport = report;
    assert_eq!(copy, report);
}
