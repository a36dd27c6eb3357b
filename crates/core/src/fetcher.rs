//! Result fetcher abstraction.
//!
//! A fetcher performs one outbound search and never fails past its boundary:
//! provider and transport faults come back as [`FetchOutcome::Unavailable`],
//! which callers log and then treat as an empty result set.

use crate::results::ResultSet;

/// Outcome of a single search against the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The provider answered; the set may be empty.
    Results(ResultSet),
    /// The provider could not be reached or answered with an error.
    Unavailable { reason: String },
}

impl FetchOutcome {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable { reason: reason.into() }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// Collapse to the client-visible result set.
    pub fn into_results(self) -> ResultSet {
        match self {
            Self::Results(results) => results,
            Self::Unavailable { .. } => Vec::new(),
        }
    }
}

/// Stable fetcher trait so handlers do not depend on a concrete provider.
#[async_trait::async_trait]
pub trait ResultFetcher: Send + Sync {
    /// Run `query` against the provider.
    async fn fetch(&self, query: &str) -> FetchOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ResultRecord;

    #[test]
    fn test_unavailable_collapses_to_empty() {
        let outcome = FetchOutcome::unavailable("HTTP 500");
        assert!(outcome.is_unavailable());
        assert!(outcome.into_results().is_empty());
    }

    #[test]
    fn test_results_pass_through_in_order() {
        let records = vec![ResultRecord::new("a", "https://a", ""), ResultRecord::new("b", "https://b", "")];
        let outcome = FetchOutcome::Results(records.clone());
        assert!(!outcome.is_unavailable());
        assert_eq!(outcome.into_results(), records);
    }
}
