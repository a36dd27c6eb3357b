//! Google Custom Search request types and validation.

use serde::Serialize;

use crate::google::GoogleError;

/// Largest page Google Custom Search returns per request.
pub const MAX_NUM: u8 = 10;

/// Search request parameters for the Custom Search JSON API.
///
/// Credentials (`key`, `cx`) are attached by the client, not carried here.
#[derive(Debug, Clone, Serialize, Default)]
pub struct SearchRequest {
    /// Search query (required, max 2048 chars).
    pub q: String,

    /// Number of results (1-10, default 10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num: Option<u8>,
}

impl SearchRequest {
    pub fn new(q: impl Into<String>) -> Self {
        Self { q: q.into(), num: None }
    }

    /// Validate the search request parameters.
    pub fn validate(&self) -> Result<(), GoogleError> {
        if self.q.is_empty() {
            return Err(GoogleError::InvalidQuery("query cannot be empty".to_string()));
        }

        if self.q.len() > 2048 {
            return Err(GoogleError::InvalidQuery(format!("query too long: {} chars (max 2048)", self.q.len())));
        }

        if let Some(num) = self.num
            && !(1..=MAX_NUM).contains(&num)
        {
            return Err(GoogleError::InvalidNum);
        }

        Ok(())
    }

    /// Get the effective num (default 10).
    pub fn get_num(&self) -> u8 {
        self.num.unwrap_or(MAX_NUM)
    }
}
