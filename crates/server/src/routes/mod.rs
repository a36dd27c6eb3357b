//! HTTP route handlers.
//!
//! Each session-aware route resolves the session first and wraps its result in
//! `WithSession`, so a new cookie is set whether the handler succeeds or not.

pub mod download;
pub mod index;
pub mod search;

pub use download::download;
pub use index::index;
pub use search::search;
