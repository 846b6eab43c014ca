//! # NexLib Store
//!
//! Key-value persistence for the NexLib state layer.
//!
//! This crate provides the lowest-level storage abstraction for NexLib.
//! Stores are **untyped JSON mappings** - one string key to one
//! `serde_json::Value`, with no secondary indexes. All interpretation of
//! the values lives in `nexlib_core`.
//!
//! ## Design Principles
//!
//! - `get` resolves to `None` for a never-written key, never an error
//! - `put` replaces the prior value entirely; merges happen in memory
//!   before the call
//! - Stores must be `Send + Sync` so a single handle can be shared
//!
//! ## Available Stores
//!
//! - [`FileStore`] - Versioned, durable, directory-backed storage
//! - [`MemoryStore`] - For testing and degraded in-memory sessions
//! - [`LegacyStore`] - Read-only view of the old flat string storage,
//!   consulted only during migration

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod file;
mod legacy;
mod memory;
mod store;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use legacy::LegacyStore;
pub use memory::MemoryStore;
pub use store::StateStore;
