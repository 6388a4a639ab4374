//! Content fetching
//!
//! This module contains the content-fetcher collaborator used by the
//! orchestration loop:
//! - The `ContentFetcher` trait the loop drives, one URL at a time
//! - An HTTP implementation backed by reqwest
//! - HTML to Markdown rendering

mod http;
mod render;

pub use http::{build_http_client, HttpFetcher};
pub use render::{extract_title, render_markdown};

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while fetching a candidate's content
///
/// The orchestration loop treats every variant the same way: the candidate
/// is recorded as inaccessible and the loop moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}")]
    Connect { url: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("No readable content at {url}")]
    EmptyBody { url: String },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },
}

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Retrieves textual content for a URL
///
/// Implementations own any timeout or cancellation policy; the caller only
/// sees success or failure. A failed fetch must not leave partial state behind.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// One-time environment setup, called before the first fetch
    ///
    /// Must be idempotent, and `fetch` must still work if it was skipped.
    /// The default does nothing.
    async fn prepare(&mut self) -> FetchResult<()> {
        Ok(())
    }

    /// Fetches the content at `url`
    async fn fetch(&self, url: &str) -> FetchResult<String>;
}
