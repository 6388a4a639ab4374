use scrapion::config::FetcherConfig;
use scrapion::fetcher::{ContentFetcher, FetchError, HttpFetcher};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn prepared_fetcher() -> HttpFetcher {
    let mut fetcher = HttpFetcher::new(FetcherConfig {
        timeout_secs: 1,
        connect_timeout_secs: 1,
        ..FetcherConfig::default()
    });
    fetcher.prepare().await.expect("Failed to prepare fetcher");
    fetcher
}

#[tokio::test]
async fn test_fetch_html_page_as_markdown() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(
                    r#"<html><head><title>Article</title><script>track()</script></head>
                    <body><h2>Sub</h2><p>see <a href="/x">docs</a></p><ul><li>a</li></ul></body></html>"#,
                )
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(&mock_server)
        .await;

    let fetcher = prepared_fetcher().await;
    let content = fetcher
        .fetch(&format!("{}/article", mock_server.uri()))
        .await
        .expect("Fetch should succeed");

    assert!(content.starts_with("# Article\n\n"));
    assert!(content.contains("## Sub"));
    assert!(content.contains("[docs](/x)"));
    assert!(!content.contains("track()"));
}

#[tokio::test]
async fn test_fetch_without_prepare() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<p>Unprepared</p>")
                .insert_header("content-type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::new(FetcherConfig::default());
    let content = fetcher
        .fetch(&format!("{}/page", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(content, "Unprepared");
}

#[tokio::test]
async fn test_fetch_plain_text_is_returned_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/notes.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("  plain <b>notes</b>\n")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&mock_server)
        .await;

    let fetcher = prepared_fetcher().await;
    let content = fetcher
        .fetch(&format!("{}/notes.txt", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(content, "plain <b>notes</b>");
}

#[tokio::test]
async fn test_fetch_http_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let fetcher = prepared_fetcher().await;
    let result = fetcher
        .fetch(&format!("{}/missing", mock_server.uri()))
        .await;

    assert!(matches!(result, Err(FetchError::Status { status: 404, .. })));
}

#[tokio::test]
async fn test_fetch_empty_page_is_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blank"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body>  </body></html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let fetcher = prepared_fetcher().await;
    let result = fetcher.fetch(&format!("{}/blank", mock_server.uri())).await;

    assert!(matches!(result, Err(FetchError::EmptyBody { .. })));
}

#[tokio::test]
async fn test_fetch_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<p>late</p>")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let fetcher = prepared_fetcher().await;
    let result = fetcher.fetch(&format!("{}/slow", mock_server.uri())).await;

    assert!(matches!(result, Err(FetchError::Timeout { .. })));
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let fetcher = prepared_fetcher().await;

    // Port 9 (discard) is essentially never listening on test hosts
    let result = fetcher.fetch("http://127.0.0.1:9/").await;

    assert!(result.is_err());
}
