//! Download route: re-serve the session's cached results as a JSON file.

use axum::{
    extract::State,
    http::{
        HeaderMap,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use searcher_core::{SessionId, results};

use crate::app::AppState;
use crate::error::{NO_RESULTS_DETAIL, WebError};
use crate::session::{self, WithSession};

/// Filename offered to the browser.
pub const DOWNLOAD_FILENAME: &str = "search_results.json";

/// Build the attachment for `session_id`.
///
/// A missing entry and an empty result set are both "not found".
pub async fn handle_download(state: &AppState, session_id: &SessionId) -> Result<Response, WebError> {
    tracing::info!(session_id = %session_id, "download");

    let cached = state.store.get(session_id).await?.unwrap_or_default();
    if cached.is_empty() {
        return Err(WebError::NotFound(NO_RESULTS_DETAIL.into()));
    }

    let body = results::download_document(&cached)?;
    let disposition = format!("attachment; filename={DOWNLOAD_FILENAME}");

    Ok(([(CONTENT_TYPE, "application/json".to_string()), (CONTENT_DISPOSITION, disposition)], body).into_response())
}

/// GET /download
pub async fn download(State(state): State<AppState>, headers: HeaderMap) -> WithSession<Result<Response, WebError>> {
    let session = session::resolve(&headers);
    let result = handle_download(&state, &session.id).await;
    WithSession::new(session.cookie(), result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{StubFetcher, state_with};
    use axum::http::StatusCode;
    use searcher_core::{CacheDb, ResultRecord, SESSION_TTL, SessionStore};

    #[tokio::test]
    async fn test_download_missing_session_is_not_found() {
        let db = CacheDb::open_in_memory().await.unwrap();
        let state = state_with(db, StubFetcher::empty());

        let err = handle_download(&state, &SessionId::from("unknown")).await.unwrap_err();
        assert!(matches!(err, WebError::NotFound(ref msg) if msg == NO_RESULTS_DETAIL));
    }

    #[tokio::test]
    async fn test_download_empty_set_is_not_found() {
        let db = CacheDb::open_in_memory().await.unwrap();
        let id = SessionId::from("empty");
        db.put(&id, &Vec::new(), SESSION_TTL).await.unwrap();
        let state = state_with(db, StubFetcher::empty());

        assert!(matches!(handle_download(&state, &id).await, Err(WebError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_download_headers() {
        let db = CacheDb::open_in_memory().await.unwrap();
        let id = SessionId::from("full");
        db.put(&id, &vec![ResultRecord::new("a", "https://a", "s")], SESSION_TTL)
            .await
            .unwrap();
        let state = state_with(db, StubFetcher::empty());

        let response = handle_download(&state, &id).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(response.headers()[CONTENT_DISPOSITION], "attachment; filename=search_results.json");
    }
}
