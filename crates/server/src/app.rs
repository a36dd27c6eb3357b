//! Router assembly and shared handler state.

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, routing::get};
use searcher_core::{CacheDb, ResultFetcher, SessionStore};
use tokio::task::JoinHandle;

use crate::routes;

/// Dependencies injected into every handler.
///
/// Built once at start-up; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SessionStore>,
    pub fetcher: Arc<dyn ResultFetcher>,
}

impl AppState {
    pub fn new(store: Arc<dyn SessionStore>, fetcher: Arc<dyn ResultFetcher>) -> Self {
        Self { store, fetcher }
    }
}

/// Build the HTTP router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/search", get(routes::search))
        .route("/download", get(routes::download))
        .with_state(state)
}

/// Periodically delete expired session entries.
///
/// Reads already skip expired rows; this only keeps the file small.
pub fn spawn_purge_task(db: CacheDb, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match db.purge_expired_sessions().await {
                Ok(0) => {}
                Ok(count) => tracing::debug!(count, "purged expired sessions"),
                Err(e) => tracing::warn!("failed to purge expired sessions: {}", e),
            }
        }
    })
}
