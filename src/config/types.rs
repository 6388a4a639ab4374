use serde::Deserialize;

/// Default browser-like user agent sent with every request
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// Default search endpoint (DuckDuckGo's HTML interface)
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Upper bound on result pages read per search
pub const MAX_SEARCH_PAGES: usize = 5;

/// Main configuration structure for Scrapion
///
/// Every section is optional; a missing file or section yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Content fetcher configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// User agent sent with page requests
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total time allowed for one page fetch (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Time allowed to establish a connection (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Skip the one-time fetcher preparation step
    #[serde(rename = "skip-prepare")]
    pub skip_prepare: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 90,
            connect_timeout_secs: 10,
            skip_prepare: false,
        }
    }
}

/// Search provider configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search endpoint URL
    pub endpoint: String,

    /// Maximum number of results to keep (1-10)
    #[serde(rename = "max-results")]
    pub max_results: usize,

    /// Number of result pages to read per search (1-5)
    pub pages: usize,

    /// User agent sent with search requests
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total time allowed for one search request (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            max_results: crate::candidates::MAX_CANDIDATES,
            pages: 1,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 60,
        }
    }
}
