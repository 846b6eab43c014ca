//! # NexLib Core
//!
//! Local persistent state layer for the NexLib library manager.
//!
//! This crate provides:
//! - Entity types for the three collections (Books, Users, Admin)
//! - The [`Catalog`]: an in-memory cache with write-through CRUD
//! - The bootstrap controller: durable-store / legacy / default
//!   fallback resolution, with one-time write-back and denylist cleanup
//! - Placeholder sign-up / sign-in helpers recovered from the original
//!   application (plain-text comparison, **not** a security model)
//!
//! Rendering and event wiring are external collaborators: they read the
//! catalog synchronously and invoke its async mutation operations, which
//! apply in memory first and then persist the whole owning collection in
//! one write.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod bootstrap;
mod catalog;
mod defaults;
mod error;
mod id;
pub mod keys;
mod media;
mod model;

pub use auth::{sign_in, sign_up, SignInOutcome, SignUpOutcome, FALLBACK_ADMIN_EMAIL};
pub use bootstrap::{
    load, open_durable_store, open_store, LoadReport, ValueOrigin, USER_DENYLIST,
};
pub use catalog::{Catalog, MutationOutcome};
pub use defaults::{default_admin, default_books, default_users};
pub use error::{CoreError, CoreResult};
pub use id::RecordId;
pub use media::file_to_data_uri;
pub use model::{AdminProfile, AdminUpdate, Book, BookDraft, User, UserDraft};
