//! HTTP fetcher implementation
//!
//! Fetches a page with reqwest and renders HTML responses to Markdown.
//! Non-HTML text responses are returned as-is.

use crate::config::FetcherConfig;
use crate::fetcher::render::render_markdown;
use crate::fetcher::{ContentFetcher, FetchError, FetchResult};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client from the fetcher configuration
///
/// # Example
///
/// ```no_run
/// use scrapion::config::FetcherConfig;
/// use scrapion::fetcher::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Content fetcher over plain HTTP(S)
#[derive(Debug)]
pub struct HttpFetcher {
    config: FetcherConfig,
    client: Option<Client>,
}

impl HttpFetcher {
    /// Creates an unprepared fetcher
    ///
    /// [`ContentFetcher::prepare`] builds one shared client. Without it every
    /// fetch builds its own client.
    pub fn new(config: FetcherConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }

    /// Returns true once the HTTP client has been built
    pub fn is_prepared(&self) -> bool {
        self.client.is_some()
    }

    fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else if error.is_connect() {
            FetchError::Connect {
                url: url.to_string(),
            }
        } else {
            FetchError::Http {
                url: url.to_string(),
                source: error,
            }
        }
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn prepare(&mut self) -> FetchResult<()> {
        if self.client.is_none() {
            let client = build_http_client(&self.config).map_err(|e| FetchError::Http {
                url: String::new(),
                source: e,
            })?;
            self.client = Some(client);
            tracing::debug!("HTTP client ready");
        }
        Ok(())
    }

    async fn fetch(&self, url: &str) -> FetchResult<String> {
        let client = match &self.client {
            Some(client) => client.clone(),
            None => build_http_client(&self.config).map_err(|e| FetchError::Http {
                url: url.to_string(),
                source: e,
            })?,
        };

        let parsed = url::Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let response = client
            .get(parsed)
            .send()
            .await
            .map_err(|e| Self::classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();

        let body = response
            .text()
            .await
            .map_err(|e| Self::classify_error(url, e))?;

        let content = if content_type.is_empty() || content_type.contains("html") {
            render_markdown(&body)
        } else {
            body.trim().to_string()
        };

        if content.is_empty() {
            return Err(FetchError::EmptyBody {
                url: url.to_string(),
            });
        }

        Ok(content)
    }
}
