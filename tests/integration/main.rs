//! Integration tests for Scrapion
//!
//! These tests use wiremock to stand up mock pages and a mock search
//! endpoint, then drive the real HTTP fetcher, search provider, and client.

mod client_tests;
mod fetcher_tests;
mod search_tests;

use scrapion::config::Config;

/// Builds a configuration whose search endpoint points at the mock server
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.fetcher.timeout_secs = 5;
    config.fetcher.connect_timeout_secs = 2;
    config.search.endpoint = format!("{}/html/", base_url);
    config.search.timeout_secs = 5;
    config
}

/// Renders a DuckDuckGo-style results page linking to the given URLs
pub fn results_page(urls: &[String]) -> String {
    let mut html = String::from("<html><body>");
    for (i, url) in urls.iter().enumerate() {
        html.push_str(&format!(
            r#"<div class="result"><div class="result__body">
                <h2 class="result__title"><a class="result__a" href="{}">Result {}</a></h2>
                <a class="result__snippet" href="{}">Snippet {}</a>
            </div></div>"#,
            url,
            i + 1,
            url,
            i + 1
        ));
    }
    html.push_str("</body></html>");
    html
}
