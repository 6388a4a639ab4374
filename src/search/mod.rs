//! Search provider
//!
//! Turns a free-text query into a ranked list of candidate URLs. Errors from
//! the provider never reach the orchestration loop: [`search_or_empty`]
//! degrades them to an empty result list.

mod duckduckgo;

pub use duckduckgo::{
    parse_next_page, parse_results, resolve_result_link, DuckDuckGoSearch, NextPage,
};

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a search provider
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid search endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Search returned HTTP {status}")]
    Status { status: u16 },

    #[error("Search request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// A single ranked search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub url: String,
    pub title: Option<String>,
    pub snippet: Option<String>,
    /// 1-based results page the hit came from
    pub page_number: usize,
    /// 1-based rank of the hit on its page
    pub position: usize,
}

impl SearchHit {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            snippet: None,
            page_number: 1,
            position: 1,
        }
    }

    /// Sets where the hit appeared in the result pages
    pub fn at(mut self, page_number: usize, position: usize) -> Self {
        self.page_number = page_number;
        self.position = position;
        self
    }
}

/// Produces ranked candidate URLs for a query
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Runs one search; an empty vector means nothing was found
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError>;
}

/// Runs a search, logging and swallowing any provider error
///
/// Hits are returned in rank order and untrimmed; capping happens after
/// duplicates are dropped in [`crate::CandidateList`].
pub async fn search_or_empty<S>(provider: &S, query: &str) -> Vec<SearchHit>
where
    S: SearchProvider + ?Sized,
{
    match provider.search(query).await {
        Ok(hits) => hits,
        Err(e) => {
            tracing::warn!(query, error = %e, "Search failed, continuing with no candidates");
            Vec::new()
        }
    }
}
