//! Structured errors for the searcher HTTP server.
//!
//! Every error reaches the client as a JSON body `{"detail": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Detail returned when a session has nothing to download.
pub const NO_RESULTS_DETAIL: &str = "Session expired or no search results available";

/// Structured errors for the searcher server.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Request parameters failed validation.
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Nothing cached for this session.
    #[error("NOT_FOUND: {0}")]
    NotFound(String),

    /// Store or encoding fault; the message is logged, not returned.
    #[error("INTERNAL: {0}")]
    Internal(String),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<searcher_core::Error> for WebError {
    fn from(err: searcher_core::Error) -> Self {
        match err {
            searcher_core::Error::InvalidInput(msg) => WebError::InvalidInput(msg),
            other => WebError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            WebError::InvalidInput(msg) | WebError::NotFound(msg) => msg,
            WebError::Internal(msg) => {
                tracing::error!("request failed: {}", msg);
                "Internal server error".to_string()
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
