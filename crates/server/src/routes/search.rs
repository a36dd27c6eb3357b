//! Search route: fetch, cache under the session, render.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::HeaderMap,
    response::Html,
};
use searcher_core::{FetchOutcome, SESSION_TTL, SessionId};
use serde::Deserialize;

use crate::app::AppState;
use crate::error::WebError;
use crate::render;
use crate::session::{self, WithSession};

/// Query string of `/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Search phrase (required, at least one character).
    #[serde(default)]
    pub query: Option<String>,
}

/// Extract a non-empty query or fail with a validation error.
pub fn validate_query(params: Result<Query<SearchParams>, QueryRejection>) -> Result<String, WebError> {
    let Query(params) = params.map_err(|e| WebError::InvalidInput(e.body_text()))?;
    match params.query {
        Some(query) if !query.is_empty() => Ok(query),
        Some(_) => Err(WebError::InvalidInput("query must be at least 1 character".into())),
        None => Err(WebError::InvalidInput("query parameter is required".into())),
    }
}

/// Run `query`, cache the results under `session_id`, and render them.
///
/// Whatever the fetcher returns is canonical: a provider failure is logged
/// and shown as an empty result list. A failed cache write is logged and
/// does not fail the page.
pub async fn handle_search(state: &AppState, query: &str, session_id: &SessionId) -> Result<Html<String>, WebError> {
    tracing::info!(session_id = %session_id, query, "search");

    let outcome = state.fetcher.fetch(query).await;
    if let FetchOutcome::Unavailable { reason } = &outcome {
        tracing::warn!(session_id = %session_id, reason = %reason, "search provider unavailable; showing no results");
    }
    let results = outcome.into_results();

    if let Err(e) = state.store.put(session_id, &results, SESSION_TTL).await {
        tracing::warn!(session_id = %session_id, "failed to cache search results: {}", e);
    }

    Ok(Html(render::results_page(query, &results)))
}

/// GET /search?query=...
pub async fn search(
    State(state): State<AppState>, headers: HeaderMap, params: Result<Query<SearchParams>, QueryRejection>,
) -> WithSession<Result<Html<String>, WebError>> {
    let session = session::resolve(&headers);

    let result = match validate_query(params) {
        Ok(query) => handle_search(&state, &query, &session.id).await,
        Err(e) => Err(e),
    };

    WithSession::new(session.cookie(), result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{StubFetcher, state_with};
    use searcher_core::{CacheDb, ResultRecord, SessionStore};

    fn params(query: Option<&str>) -> Result<Query<SearchParams>, QueryRejection> {
        Ok(Query(SearchParams { query: query.map(str::to_string) }))
    }

    #[test]
    fn test_validate_query() {
        assert_eq!(validate_query(params(Some("rust"))).unwrap(), "rust");
        assert!(matches!(validate_query(params(Some(""))), Err(WebError::InvalidInput(_))));
        assert!(matches!(validate_query(params(None)), Err(WebError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_handle_search_caches_results() {
        let db = CacheDb::open_in_memory().await.unwrap();
        let records = vec![ResultRecord::new("Rust", "https://rust-lang.org", "A language")];
        let state = state_with(db.clone(), StubFetcher::always(FetchOutcome::Results(records.clone())));
        let id = SessionId::from("s1");

        let Html(page) = handle_search(&state, "rust", &id).await.unwrap();

        assert!(page.contains("https://rust-lang.org"));
        assert_eq!(db.get(&id).await.unwrap(), Some(records));
    }

    #[tokio::test]
    async fn test_handle_search_stores_empty_set_when_provider_fails() {
        let db = CacheDb::open_in_memory().await.unwrap();
        let state = state_with(db.clone(), StubFetcher::always(FetchOutcome::unavailable("HTTP 500")));
        let id = SessionId::from("s2");

        db.put(&id, &vec![ResultRecord::new("old", "https://old", "")], SESSION_TTL)
            .await
            .unwrap();

        let Html(page) = handle_search(&state, "rust", &id).await.unwrap();

        assert!(page.contains("No results found."));
        assert_eq!(db.get(&id).await.unwrap(), Some(Vec::new()));
    }
}
