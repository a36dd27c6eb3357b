//! SQLite-backed session store.
//!
//! Result sets live in a single table keyed by session identifier, accessed
//! asynchronously via tokio-rusqlite. It supports:
//!
//! - Per-entry expiry, reset on every write
//! - Automatic schema migrations
//! - WAL mode so several server processes can share the file
//! - Purging of expired entries

pub mod connection;
pub mod migrations;
pub mod sessions;

pub use crate::Error;

pub use connection::CacheDb;
