//! DuckDuckGo HTML search
//!
//! Queries the script-free DuckDuckGo interface and scrapes the result list.
//! Result links on that page point at a `/l/?uddg=<target>` redirector, which
//! is unwrapped to the real target URL.
//!
//! Further result pages are reached by submitting the page's "Next" form,
//! up to the configured page count.

use crate::config::SearchConfig;
use crate::search::{SearchError, SearchHit, SearchProvider};
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

/// CSS selector for one result container
const RESULT_SELECTOR: &str = ".result__body";

/// CSS selector for the title link inside a result
const TITLE_SELECTOR: &str = "a.result__a";

/// CSS selector for the snippet inside a result
const SNIPPET_SELECTOR: &str = ".result__snippet";

/// CSS selector for the pagination forms
const NAV_FORM_SELECTOR: &str = ".nav-link form";

/// Form submission that loads the next results page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPage {
    pub action: Url,
    pub fields: Vec<(String, String)>,
}

/// Search provider backed by DuckDuckGo's HTML endpoint
#[derive(Debug, Clone)]
pub struct DuckDuckGoSearch {
    client: Client,
    endpoint: Url,
    pages: usize,
}

impl DuckDuckGoSearch {
    /// Creates a provider from the search configuration
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| SearchError::InvalidEndpoint(format!("{}: {}", config.endpoint, e)))?;

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            pages: config.pages.max(1),
        })
    }

    /// Number of result pages read per search
    pub fn pages(&self) -> usize {
        self.pages
    }

    fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }

    async fn read_page(&self, request: reqwest::RequestBuilder) -> Result<String, SearchError> {
        let response = request
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        let url = self.search_url(query);
        tracing::info!(query, pages = self.pages, "Executing search");

        let mut body = self.read_page(self.client.get(url)).await?;
        let mut hits = parse_results(&body, &self.endpoint, 1);

        for page_number in 2..=self.pages {
            let Some(next) = parse_next_page(&body, &self.endpoint) else {
                tracing::debug!(page_number, "No further result pages");
                break;
            };

            let request = self.client.post(next.action).form(&next.fields);
            body = match self.read_page(request).await {
                Ok(body) => body,
                Err(e) => {
                    // Earlier pages are still usable
                    tracing::warn!(page_number, error = %e, "Failed to load result page");
                    break;
                }
            };
            hits.extend(parse_results(&body, &self.endpoint, page_number));
        }

        tracing::debug!("Extracted {} search results", hits.len());
        Ok(hits)
    }
}

/// Extracts search hits from a DuckDuckGo HTML results page
///
/// Results without a title or without a usable http(s) link are skipped.
/// Each hit records `page_number` and its 1-based position among the page's
/// result containers.
pub fn parse_results(html: &str, base: &Url, page_number: usize) -> Vec<SearchHit> {
    let document = Html::parse_document(html);

    let (Ok(result_sel), Ok(title_sel), Ok(snippet_sel)) = (
        Selector::parse(RESULT_SELECTOR),
        Selector::parse(TITLE_SELECTOR),
        Selector::parse(SNIPPET_SELECTOR),
    ) else {
        return Vec::new();
    };

    let mut hits = Vec::new();

    for (index, container) in document.select(&result_sel).enumerate() {
        let Some(title_link) = container.select(&title_sel).next() else {
            continue;
        };

        let title = normalize_text(&title_link.text().collect::<String>());
        if title.is_empty() {
            continue;
        }

        let Some(url) = title_link
            .value()
            .attr("href")
            .and_then(|href| resolve_result_link(href, base))
        else {
            continue;
        };

        let snippet = container
            .select(&snippet_sel)
            .next()
            .map(|s| normalize_text(&s.text().collect::<String>()))
            .filter(|s| !s.is_empty());

        hits.push(SearchHit {
            url,
            title: Some(title),
            snippet,
            page_number,
            position: index + 1,
        });
    }

    hits
}

/// Finds the "Next" pagination form on a results page
///
/// A form counts as "Next" when its submit button's value contains "next"
/// (any case) or ">". Its hidden inputs are the fields to post.
pub fn parse_next_page(html: &str, base: &Url) -> Option<NextPage> {
    let document = Html::parse_document(html);
    let form_sel = Selector::parse(NAV_FORM_SELECTOR).ok()?;
    let submit_sel = Selector::parse("input[type='submit']").ok()?;
    let hidden_sel = Selector::parse("input[type='hidden']").ok()?;

    let form = document.select(&form_sel).find(|form| {
        form.select(&submit_sel).any(|submit| {
            submit
                .value()
                .attr("value")
                .map(|v| v.to_lowercase().contains("next") || v.contains('>'))
                .unwrap_or(false)
        })
    })?;

    let action = match form.value().attr("action").map(str::trim) {
        Some(action) if !action.is_empty() => base.join(action).ok()?,
        _ => base.clone(),
    };

    let fields = form
        .select(&hidden_sel)
        .filter_map(|input| {
            let name = input.value().attr("name")?;
            let value = input.value().attr("value").unwrap_or_default();
            Some((name.to_string(), value.to_string()))
        })
        .collect();

    Some(NextPage { action, fields })
}

/// Resolves a result href to the absolute target URL
///
/// Returns None for ad-tracking links, non-http(s) schemes and unparsable hrefs.
pub fn resolve_result_link(href: &str, base: &Url) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let absolute = base.join(href).ok()?;

    let target = if absolute.path().starts_with("/l/") {
        let (_, encoded) = absolute.query_pairs().find(|(key, _)| key == "uddg")?;
        Url::parse(&encoded).ok()?
    } else {
        absolute
    };

    if target.scheme() != "http" && target.scheme() != "https" {
        return None;
    }

    // Sponsored results route through y.js on the search host itself
    if target.path().ends_with("/y.js") {
        return None;
    }

    Some(target.to_string())
}

fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
