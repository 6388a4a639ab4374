use crate::{results_page, test_config};
use scrapion::candidates::Origin;
use scrapion::report::{Report, ReportDestination, ReportMode, ScrapeStatus};
use scrapion::{Client, TerminationReason};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, page_path: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn mount_results(server: &MockServer, urls: &[String]) {
    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(results_page(urls))
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_direct_url_success() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", 200, "<html><body><p>Welcome</p></body></html>").await;

    let mut client = Client::from_config(&test_config(&mock_server.uri())).unwrap();
    let input = format!("{}/", mock_server.uri());
    let report = client.run(&input).await;

    assert_eq!(report.mode, ReportMode::SingleUrl);
    assert_eq!(report.total_urls_attempted, 1);
    assert_eq!(report.successful_scrapes, 1);
    assert_eq!(report.results[0].source, Origin::Direct);
    assert_eq!(report.results[0].content.as_deref(), Some("Welcome"));
    assert_eq!(report.termination_reason, Some(TerminationReason::PrimaryListHit));
}

#[tokio::test]
async fn test_query_falls_back_past_failures() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    let urls: Vec<String> = (1..=7).map(|i| format!("{}/page{}", base, i)).collect();
    mount_results(&mock_server, &urls).await;

    mount_page(&mock_server, "/page1", 500, "").await;
    mount_page(&mock_server, "/page2", 404, "").await;
    mount_page(&mock_server, "/page3", 200, "<p>Third page</p>").await;
    mount_page(&mock_server, "/page4", 200, "<p>Never fetched</p>").await;

    let mut client = Client::from_config(&test_config(&base)).unwrap();
    let report = client.run("fallback query").await;

    assert_eq!(report.mode, ReportMode::MultiUrl);
    assert_eq!(report.total_urls_attempted, 10);
    assert_eq!(report.failed_scrapes, 2);
    assert_eq!(report.successful_scrapes, 1);
    assert_eq!(report.failed_urls, vec![urls[0].clone(), urls[1].clone()]);
    assert_eq!(report.results[2].status, ScrapeStatus::Success);
    assert_eq!(report.results[2].content.as_deref(), Some("Third page"));
    assert_eq!(report.termination_reason, Some(TerminationReason::PrimaryListHit));
}

#[tokio::test]
async fn test_query_all_candidates_fail() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    let urls: Vec<String> = (1..=12).map(|i| format!("{}/dead{}", base, i)).collect();
    mount_results(&mock_server, &urls).await;

    let mut client = Client::from_config(&test_config(&base)).unwrap();
    let report = client.run("dead links").await;

    assert_eq!(report.failed_scrapes, 10);
    assert_eq!(report.successful_scrapes, 0);
    assert_eq!(report.failed_urls, urls[..10].to_vec());
    assert_eq!(report.termination_reason, Some(TerminationReason::AllExhausted));
}

#[tokio::test]
async fn test_query_without_results() {
    let mock_server = MockServer::start().await;
    mount_results(&mock_server, &[]).await;

    let mut client = Client::from_config(&test_config(&mock_server.uri())).unwrap();
    let report = client.run("no hits at all").await;

    assert!(report.results.is_empty());
    assert_eq!(report.termination_reason, Some(TerminationReason::NoCandidates));
}

#[tokio::test]
async fn test_report_written_to_file() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/doc", 200, "<p>Saved</p>").await;

    let dir = tempfile::TempDir::new().unwrap();
    let report_path = dir.path().join("reports/run.json");

    let mut client = Client::from_config(&test_config(&mock_server.uri())).unwrap();
    let report = client.run(&format!("{}/doc", mock_server.uri())).await;
    client
        .output_report(&ReportDestination::File(report_path.clone()))
        .unwrap();

    let written = std::fs::read_to_string(&report_path).unwrap();
    let parsed = Report::from_json(&written).unwrap();
    assert_eq!(parsed, report);
    assert_eq!(parsed.successful_scrapes, 1);
}
