//! Google Custom Search client.
//!
//! ### Specification
//!
//! - **Endpoint**: `https://www.googleapis.com/customsearch/v1`
//! - **Authentication**: `key` (API key) and `cx` (search engine id) query parameters.
//! - **Normalization**: each item becomes a `ResultRecord` of title, link and snippet.
//! - **Failure policy**: as a `ResultFetcher`, every error is logged and reported as
//!   `FetchOutcome::Unavailable`; callers show it as an empty result list.

pub mod error;
pub mod request;
pub mod response;

pub use error::GoogleError;
pub use request::SearchRequest;
pub use response::{GoogleApiResponse, GoogleItem};

use reqwest::header;
use searcher_core::{AppConfig, FetchOutcome, ResultFetcher, ResultSet};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default base URL for the Custom Search API.
const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "searcher/0.1";

/// Provider error bodies are cut to this many characters in logs.
const MAX_LOGGED_BODY: usize = 512;

/// Google client configuration.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// API key (GOOGLE_API_KEY).
    pub api_key: String,
    /// Programmable Search Engine id (GOOGLE_CSE_ID).
    pub cse_id: String,
    /// Base URL (default: https://www.googleapis.com).
    pub base_url: String,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string (default: searcher/0.1).
    pub user_agent: String,
    /// Results requested per search (default: 10).
    pub num: u8,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            cse_id: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            num: request::MAX_NUM,
        }
    }
}

impl GoogleConfig {
    /// Build client configuration from the application config.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, GoogleError> {
        Ok(Self {
            api_key: config
                .google_api_key
                .clone()
                .ok_or(GoogleError::MissingCredentials("GOOGLE_API_KEY"))?,
            cse_id: config
                .google_cse_id
                .clone()
                .ok_or(GoogleError::MissingCredentials("GOOGLE_CSE_ID"))?,
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
            num: config.result_count,
            ..Default::default()
        })
    }
}

/// Google Custom Search API client.
#[derive(Debug, Clone)]
pub struct GoogleClient {
    http: reqwest::Client,
    config: GoogleConfig,
}

impl GoogleClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GoogleConfig) -> Result<Self, GoogleError> {
        if config.api_key.is_empty() {
            return Err(GoogleError::MissingCredentials("GOOGLE_API_KEY"));
        }
        if config.cse_id.is_empty() {
            return Err(GoogleError::MissingCredentials("GOOGLE_CSE_ID"));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| GoogleError::Network(Arc::new(e)))?;

        Ok(Self { http, config })
    }

    /// Execute a search query.
    ///
    /// Validates the request, performs one GET, and normalizes the items.
    pub async fn search(&self, req: SearchRequest) -> Result<ResultSet, GoogleError> {
        req.validate()?;

        let start = Instant::now();
        let url = format!("{}/customsearch/v1", self.config.base_url.trim_end_matches('/'));

        tracing::debug!("searching Google Custom Search: query={}", req.q);

        let http_response = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .query(&req)
            .query(&[("key", self.config.api_key.as_str()), ("cx", self.config.cse_id.as_str())])
            .send()
            .await?;

        let status = http_response.status();
        tracing::debug!("Google Custom Search response status: {}", status);

        if !status.is_success() {
            let body = http_response.text().await.unwrap_or_default();
            return Err(GoogleError::HttpError { status: status.as_u16(), body });
        }

        let bytes = http_response.bytes().await?;
        let api_response: GoogleApiResponse =
            serde_json::from_slice(&bytes).map_err(|e| GoogleError::Parse(e.to_string()))?;

        let results = api_response.into_results();
        tracing::debug!("search completed in {:?}, {} results", start.elapsed(), results.len());

        Ok(results)
    }
}

#[async_trait::async_trait]
impl ResultFetcher for GoogleClient {
    async fn fetch(&self, query: &str) -> FetchOutcome {
        let req = SearchRequest { q: query.to_string(), num: Some(self.config.num) };

        match self.search(req).await {
            Ok(results) => FetchOutcome::Results(results),
            Err(GoogleError::HttpError { status, body }) => {
                let body: String = body.chars().take(MAX_LOGGED_BODY).collect();
                tracing::error!(status, body = %body, "Google API error");
                FetchOutcome::unavailable(format!("HTTP {status}"))
            }
            Err(e) => {
                tracing::error!("exception calling Google Search API: {}", e);
                FetchOutcome::unavailable(e.to_string())
            }
        }
    }
}
