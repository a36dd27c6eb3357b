//! Google Custom Search client error types.

use std::sync::Arc;

/// Errors from the Google Custom Search client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GoogleError {
    /// API key or search engine id not configured.
    #[error("missing credentials: {0} not set")]
    MissingCredentials(&'static str),

    /// Invalid search query.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid num parameter (must be 1-10).
    #[error("invalid num: must be 1-10")]
    InvalidNum,

    /// Non-success HTTP status from the provider.
    #[error("HTTP error: {status}")]
    HttpError { status: u16, body: String },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for GoogleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { GoogleError::Timeout } else { GoogleError::Network(Arc::new(err)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GoogleError::MissingCredentials("GOOGLE_API_KEY");
        assert!(err.to_string().contains("GOOGLE_API_KEY"));

        let err = GoogleError::HttpError { status: 403, body: "quota".into() };
        assert_eq!(err.to_string(), "HTTP error: 403");
    }
}
