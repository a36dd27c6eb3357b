//! Client code for searcher.
//!
//! This crate provides the outbound search-provider client used by the server.

pub mod google;

pub use google::{GoogleClient, GoogleConfig, GoogleError, SearchRequest};
