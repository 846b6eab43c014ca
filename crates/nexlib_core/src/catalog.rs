//! In-memory entity cache with write-through persistence.

use crate::id::RecordId;
use crate::keys;
use crate::model::{AdminProfile, AdminUpdate, Book, BookDraft, User, UserDraft};
use nexlib_store::StateStore;
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

/// Result of a catalog mutation.
///
/// Mutations never return `Err`: validation failures and natural-key
/// misses are expected outcomes the UI reacts to, and a failed persist
/// after a successful in-memory mutation is logged and reported, not
/// thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Applied in memory and durably persisted.
    Persisted,
    /// Applied in memory; the durable write failed and was logged. The
    /// store now lags the cache until the next successful persist of
    /// the same collection.
    MemoryOnly,
    /// Rejected: a required image/cover was missing on add.
    MissingImage,
    /// Rejected: another record already uses this title/name.
    DuplicateKey,
    /// No record matched the given ID (or natural key); nothing changed.
    NotFound,
}

impl MutationOutcome {
    /// Whether the mutation was applied to the in-memory collections.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Persisted | Self::MemoryOnly)
    }

    fn applied(persisted: bool) -> Self {
        if persisted {
            Self::Persisted
        } else {
            Self::MemoryOnly
        }
    }
}

/// The live application state: three collections and their store.
///
/// The catalog exclusively owns the in-memory collections for the
/// lifetime of a session; the store owns the authoritative durable
/// copy. Reads are synchronous and never block on persistence.
/// Mutations apply to memory first, then persist the whole owning
/// collection in a single write, so a reader always observes its own
/// latest mutation even while the persist is still in flight.
///
/// Persists for the same key are serialized through a per-collection
/// async mutex: the store contract does not order concurrent writes to
/// one key, so the catalog never starts a second write for a key before
/// the first one resolves. The snapshot to persist is taken while
/// holding that mutex, after the in-memory mutation, which closes the
/// lost-update window between two back-to-back edits.
pub struct Catalog {
    store: Arc<dyn StateStore>,
    books: RwLock<Vec<Book>>,
    users: RwLock<Vec<User>>,
    admin: RwLock<AdminProfile>,
    books_flush: Mutex<()>,
    users_flush: Mutex<()>,
    admin_flush: Mutex<()>,
}

impl Catalog {
    /// Creates a catalog over already-resolved collections.
    ///
    /// Normal construction goes through [`crate::load`], which resolves
    /// each collection through the durable/legacy/default fallback
    /// chain first.
    #[must_use]
    pub fn new(
        store: Arc<dyn StateStore>,
        books: Vec<Book>,
        users: Vec<User>,
        admin: AdminProfile,
    ) -> Self {
        Self {
            store,
            books: RwLock::new(books),
            users: RwLock::new(users),
            admin: RwLock::new(admin),
            books_flush: Mutex::new(()),
            users_flush: Mutex::new(()),
            admin_flush: Mutex::new(()),
        }
    }

    /// Returns the store this catalog persists through.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn StateStore> {
        &self.store
    }

    // ---- Synchronous reads (renderer boundary) ----

    /// Returns the current Books collection.
    #[must_use]
    pub fn books(&self) -> Vec<Book> {
        self.books.read().clone()
    }

    /// Returns the current Users collection.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.users.read().clone()
    }

    /// Returns the current admin profile.
    #[must_use]
    pub fn admin(&self) -> AdminProfile {
        self.admin.read().clone()
    }

    /// Looks up a book by title (first match).
    ///
    /// The UI calls this when editing begins and holds on to the
    /// returned record's `id`; the later update is keyed on that ID, so
    /// a title change cannot orphan the edit.
    #[must_use]
    pub fn find_book_by_title(&self, title: &str) -> Option<Book> {
        self.books.read().iter().find(|b| b.title == title).cloned()
    }

    /// Looks up a user by name (first match).
    #[must_use]
    pub fn find_user_by_name(&self, name: &str) -> Option<User> {
        self.users.read().iter().find(|u| u.name == name).cloned()
    }

    // ---- Book mutations ----

    /// Adds a new book.
    ///
    /// Rejects with [`MutationOutcome::MissingImage`] when no cover was
    /// supplied, and [`MutationOutcome::DuplicateKey`] when the title is
    /// already taken.
    pub async fn add_book(&self, draft: BookDraft) -> MutationOutcome {
        let Some(cover) = draft.cover else {
            return MutationOutcome::MissingImage;
        };
        {
            let mut books = self.books.write();
            if books.iter().any(|b| b.title == draft.title) {
                return MutationOutcome::DuplicateKey;
            }
            books.push(Book {
                id: RecordId::new(),
                title: draft.title,
                author: draft.author,
                genre: draft.genre,
                rating: draft.rating,
                cover,
                pdf: draft.pdf,
            });
        }
        MutationOutcome::applied(self.persist_books().await)
    }

    /// Updates the book identified by `id`.
    ///
    /// Fields with no replacement in the draft (`cover`, `pdf`) keep
    /// their old values.
    pub async fn update_book(&self, id: RecordId, draft: BookDraft) -> MutationOutcome {
        {
            let mut books = self.books.write();
            if books.iter().any(|b| b.id != id && b.title == draft.title) {
                return MutationOutcome::DuplicateKey;
            }
            let Some(book) = books.iter_mut().find(|b| b.id == id) else {
                return MutationOutcome::NotFound;
            };
            book.title = draft.title;
            book.author = draft.author;
            book.genre = draft.genre;
            book.rating = draft.rating;
            if let Some(cover) = draft.cover {
                book.cover = cover;
            }
            if let Some(pdf) = draft.pdf {
                book.pdf = Some(pdf);
            }
        }
        MutationOutcome::applied(self.persist_books().await)
    }

    /// Deletes the book identified by `id`.
    pub async fn delete_book(&self, id: RecordId) -> MutationOutcome {
        let removed = {
            let mut books = self.books.write();
            let before = books.len();
            books.retain(|b| b.id != id);
            before - books.len()
        };
        if removed == 0 {
            return MutationOutcome::NotFound;
        }
        MutationOutcome::applied(self.persist_books().await)
    }

    /// Deletes every book whose title matches.
    ///
    /// Natural-key deletion for UI rows that only know the displayed
    /// title. When a data-integrity anomaly has produced duplicates,
    /// all matches are removed rather than an arbitrary one.
    pub async fn delete_book_titled(&self, title: &str) -> MutationOutcome {
        let removed = {
            let mut books = self.books.write();
            let before = books.len();
            books.retain(|b| b.title != title);
            before - books.len()
        };
        if removed == 0 {
            return MutationOutcome::NotFound;
        }
        MutationOutcome::applied(self.persist_books().await)
    }

    // ---- User mutations ----

    /// Adds a new user with `Active` status unless the draft says
    /// otherwise.
    ///
    /// Rejects a missing profile image and a duplicate name.
    pub async fn add_user(&self, draft: UserDraft) -> MutationOutcome {
        let Some(img) = draft.img else {
            return MutationOutcome::MissingImage;
        };
        {
            let mut users = self.users.write();
            if users.iter().any(|u| u.name == draft.name) {
                return MutationOutcome::DuplicateKey;
            }
            users.push(User {
                id: RecordId::new(),
                name: draft.name,
                role: draft.role,
                date: draft.date,
                status: draft.status.unwrap_or_else(|| "Active".to_string()),
                badge: None,
                img,
                email: None,
                password: None,
            });
        }
        MutationOutcome::applied(self.persist_users().await)
    }

    /// Updates the user identified by `id`.
    ///
    /// `img` and `status` keep their old values when the draft does not
    /// supply replacements; so do fields the draft never carries
    /// (`badge`, `email`, `password`).
    pub async fn update_user(&self, id: RecordId, draft: UserDraft) -> MutationOutcome {
        {
            let mut users = self.users.write();
            if users.iter().any(|u| u.id != id && u.name == draft.name) {
                return MutationOutcome::DuplicateKey;
            }
            let Some(user) = users.iter_mut().find(|u| u.id == id) else {
                return MutationOutcome::NotFound;
            };
            user.name = draft.name;
            user.role = draft.role;
            user.date = draft.date;
            if let Some(status) = draft.status {
                user.status = status;
            }
            if let Some(img) = draft.img {
                user.img = img;
            }
        }
        MutationOutcome::applied(self.persist_users().await)
    }

    /// Deletes the user identified by `id`.
    pub async fn delete_user(&self, id: RecordId) -> MutationOutcome {
        let removed = {
            let mut users = self.users.write();
            let before = users.len();
            users.retain(|u| u.id != id);
            before - users.len()
        };
        if removed == 0 {
            return MutationOutcome::NotFound;
        }
        MutationOutcome::applied(self.persist_users().await)
    }

    /// Deletes every user whose name matches.
    pub async fn delete_user_named(&self, name: &str) -> MutationOutcome {
        let removed = {
            let mut users = self.users.write();
            let before = users.len();
            users.retain(|u| u.name != name);
            before - users.len()
        };
        if removed == 0 {
            return MutationOutcome::NotFound;
        }
        MutationOutcome::applied(self.persist_users().await)
    }

    /// Removes every user whose name is on the denylist.
    ///
    /// Persists only if something was removed, so running it twice
    /// produces no further changes. Returns the number of removed
    /// records.
    pub async fn remove_users_named(&self, denylist: &[&str]) -> usize {
        let removed = {
            let mut users = self.users.write();
            let before = users.len();
            users.retain(|u| !denylist.contains(&u.name.as_str()));
            before - users.len()
        };
        if removed > 0 {
            self.persist_users().await;
        }
        removed
    }

    /// Appends a fully-formed user record (sign-up path).
    pub(crate) async fn push_user(&self, user: User) -> MutationOutcome {
        {
            let mut users = self.users.write();
            if users.iter().any(|u| u.name == user.name) {
                return MutationOutcome::DuplicateKey;
            }
            users.push(user);
        }
        MutationOutcome::applied(self.persist_users().await)
    }

    // ---- Admin mutations ----

    /// Replaces the admin profile's form fields, keeping the image.
    pub async fn update_admin(&self, update: AdminUpdate) -> MutationOutcome {
        {
            let mut admin = self.admin.write();
            admin.username = update.username;
            admin.fullname = update.fullname;
            admin.email = update.email;
            admin.role = update.role;
            admin.contact = update.contact;
            admin.password = update.password;
        }
        MutationOutcome::applied(self.persist_admin().await)
    }

    /// Replaces only the admin profile image.
    pub async fn update_admin_image(&self, img: String) -> MutationOutcome {
        self.admin.write().img = img;
        MutationOutcome::applied(self.persist_admin().await)
    }

    // ---- Write-through persistence ----

    async fn persist<T: Serialize>(
        &self,
        flush: &Mutex<()>,
        key: &str,
        collection: &RwLock<T>,
    ) -> bool {
        let _ordering = flush.lock().await;
        // Snapshot under the flush lock, after the in-memory mutation:
        // whatever lands in the store is at least as new as the mutation
        // that triggered this persist.
        let snapshot: Value = {
            let guard = collection.read();
            match serde_json::to_value(&*guard) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key, error = %e, "failed to serialize collection; skipping persist");
                    return false;
                }
            }
        };
        match self.store.put(key, &snapshot).await {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "durable write failed; in-memory state is ahead of the store");
                false
            }
        }
    }

    async fn persist_books(&self) -> bool {
        self.persist(&self.books_flush, keys::BOOKS, &self.books).await
    }

    async fn persist_users(&self) -> bool {
        self.persist(&self.users_flush, keys::USERS, &self.users).await
    }

    async fn persist_admin(&self) -> bool {
        self.persist(&self.admin_flush, keys::ADMIN, &self.admin).await
    }
}
