//! Logical keys under which the collections are persisted.
//!
//! The key strings are carried over from the previous generation of the
//! application so that existing durable and legacy data migrates cleanly.

/// Key holding the Books collection.
pub const BOOKS: &str = "nexlib_books";

/// Key holding the Users collection.
pub const USERS: &str = "nexlib_users";

/// Key holding the singleton admin profile.
pub const ADMIN: &str = "nexlib_admin";
