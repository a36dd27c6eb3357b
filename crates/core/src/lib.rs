//! Core types and shared functionality for searcher.
//!
//! This crate provides:
//! - The result model and download document
//! - Session identifiers and cookie instructions
//! - Fetcher and store traits, with a SQLite store implementation
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod results;
pub mod session;
pub mod store;

pub use cache::CacheDb;
pub use config::{AppConfig, ConfigError, GoogleCredentials};
pub use error::Error;
pub use fetcher::{FetchOutcome, ResultFetcher};
pub use results::{ResultRecord, ResultSet};
pub use session::{ResolvedSession, SESSION_COOKIE_NAME, SESSION_TTL, SessionCookie, SessionId};
pub use store::SessionStore;
