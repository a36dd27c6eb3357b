//! Google Custom Search response types and normalization.

use serde::Deserialize;

use searcher_core::{ResultRecord, ResultSet};

/// Raw response from the Custom Search JSON API.
///
/// `items` is absent when the query matched nothing.
#[derive(Debug, Deserialize)]
pub struct GoogleApiResponse {
    #[serde(default)]
    pub items: Vec<GoogleItem>,
}

/// Individual item from Google. Every field is optional upstream.
#[derive(Debug, Deserialize)]
pub struct GoogleItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

impl From<GoogleItem> for ResultRecord {
    fn from(item: GoogleItem) -> Self {
        ResultRecord {
            title: item.title.unwrap_or_default(),
            link: item.link.unwrap_or_default(),
            snippet: item.snippet.unwrap_or_default(),
        }
    }
}

impl GoogleApiResponse {
    /// Normalize into a result set, keeping provider order.
    pub fn into_results(self) -> ResultSet {
        self.items.into_iter().map(ResultRecord::from).collect()
    }
}
