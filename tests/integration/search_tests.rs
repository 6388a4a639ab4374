use crate::{results_page, test_config};
use scrapion::search::{DuckDuckGoSearch, SearchError, SearchProvider};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_search_returns_ranked_hits() {
    let mock_server = MockServer::start().await;
    let urls: Vec<String> = (1..=3)
        .map(|i| format!("https://site{}.example.com/", i))
        .collect();

    Mock::given(method("GET"))
        .and(path("/html/"))
        .and(query_param("q", "rust async"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(results_page(&urls))
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let provider = DuckDuckGoSearch::new(&config.search).unwrap();
    let hits = provider.search("rust async").await.unwrap();

    let found: Vec<_> = hits.iter().map(|h| h.url.clone()).collect();
    assert_eq!(found, urls);
    assert_eq!(hits[0].title.as_deref(), Some("Result 1"));
    assert_eq!(hits[2].snippet.as_deref(), Some("Snippet 3"));
    assert_eq!(hits[2].page_number, 1);
    assert_eq!(hits[2].position, 3);
}

/// Appends a "Next" pagination form to a results page
fn with_next_form(page: String, query: &str, offset: usize) -> String {
    let form = format!(
        r#"<div class="nav-link"><form action="/html/" method="post">
            <input type="submit" class="btn" value="Next">
            <input type="hidden" name="q" value="{}">
            <input type="hidden" name="s" value="{}">
        </form></div></body></html>"#,
        query, offset
    );
    page.replace("</body></html>", &form)
}

#[tokio::test]
async fn test_search_follows_result_pages() {
    let mock_server = MockServer::start().await;
    let first: Vec<String> = (1..=2)
        .map(|i| format!("https://first{}.example.com/", i))
        .collect();
    let second: Vec<String> = (1..=2)
        .map(|i| format!("https://second{}.example.com/", i))
        .collect();

    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(with_next_form(results_page(&first), "paged", 10)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/html/"))
        .and(body_string_contains("s=10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(&second)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = test_config(&mock_server.uri());
    config.search.pages = 3;
    let provider = DuckDuckGoSearch::new(&config.search).unwrap();
    let hits = provider.search("paged").await.unwrap();

    // The second page has no "Next" form, so the third is never requested
    assert_eq!(hits.len(), 4);
    assert_eq!(hits[1].url, first[1]);
    assert_eq!(hits[2].url, second[0]);
    assert_eq!(hits[2].page_number, 2);
    assert_eq!(hits[2].position, 1);
}

#[tokio::test]
async fn test_search_keeps_earlier_pages_when_next_fails() {
    let mock_server = MockServer::start().await;
    let first = vec!["https://only.example.com/".to_string()];

    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(with_next_form(results_page(&first), "broken", 10)),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut config = test_config(&mock_server.uri());
    config.search.pages = 2;
    let provider = DuckDuckGoSearch::new(&config.search).unwrap();
    let hits = provider.search("broken").await.unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].url, first[0]);
}

#[tokio::test]
async fn test_search_unwraps_redirect_links() {
    let mock_server = MockServer::start().await;
    let redirect = "/l/?uddg=https%3A%2F%2Fdocs.example.org%2Fguide".to_string();

    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(&[redirect])))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let provider = DuckDuckGoSearch::new(&config.search).unwrap();
    let hits = provider.search("guide").await.unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].url, "https://docs.example.org/guide");
}

#[tokio::test]
async fn test_search_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let provider = DuckDuckGoSearch::new(&config.search).unwrap();
    let result = provider.search("anything").await;

    assert!(matches!(result, Err(SearchError::Status { status: 503 })));
}
