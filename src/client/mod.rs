//! Client facade
//!
//! Composes the pieces of a run in a fixed order:
//! 1. Classify the input
//! 2. Build candidates (directly, or through one search)
//! 3. Prepare the fetcher once per client lifetime, unless skipped through
//!    `skip-prepare` in the config or `SCRAPION_SKIP_PREPARE=1`
//! 4. Run the orchestration loop
//! 5. Keep the report for output

use crate::candidates::{CandidateList, MAX_CANDIDATES};
use crate::config::Config;
use crate::fetcher::{ContentFetcher, HttpFetcher};
use crate::input::{classify, InputKind};
use crate::orchestrator::{run_loop, TerminationReason};
use crate::report::{write_report, Report, ReportAccumulator, ReportDestination, ReportMode};
use crate::search::{search_or_empty, DuckDuckGoSearch, SearchProvider};
use crate::ScrapionError;

/// Environment variable that disables fetcher preparation when set to "1"
pub const SKIP_PREPARE_ENV: &str = "SCRAPION_SKIP_PREPARE";

/// Runs inputs through search, fallback fetching, and reporting
pub struct Client<F, S> {
    fetcher: F,
    search: S,
    max_results: usize,
    skip_prepare: bool,
    prepared: bool,
    report: Option<Report>,
}

impl Client<HttpFetcher, DuckDuckGoSearch> {
    /// Builds a client with the HTTP fetcher and DuckDuckGo search
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        let search = DuckDuckGoSearch::new(&config.search)?;
        let fetcher = HttpFetcher::new(config.fetcher.clone());
        let skip = config.fetcher.skip_prepare
            || skip_prepare_requested(std::env::var(SKIP_PREPARE_ENV).ok().as_deref());

        Ok(Self::new(fetcher, search)
            .with_max_results(config.search.max_results)
            .skip_prepare(skip))
    }
}

/// Returns true if the environment value asks to skip preparation
fn skip_prepare_requested(value: Option<&str>) -> bool {
    value.map(str::trim) == Some("1")
}

impl<F, S> Client<F, S>
where
    F: ContentFetcher,
    S: SearchProvider,
{
    pub fn new(fetcher: F, search: S) -> Self {
        Self {
            fetcher,
            search,
            max_results: MAX_CANDIDATES,
            skip_prepare: false,
            prepared: false,
            report: None,
        }
    }

    /// Caps the number of search results used as candidates (at most 10)
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.min(MAX_CANDIDATES);
        self
    }

    /// Skips the one-time fetcher preparation
    ///
    /// Fetches then run against an unprepared fetcher, which must cope.
    pub fn skip_prepare(mut self, skip: bool) -> Self {
        self.skip_prepare = skip;
        self
    }

    /// Runs one input to completion and returns its report
    ///
    /// Never fails: unreachable candidates and search failures show up in
    /// the report, not as errors. Each call starts from empty state.
    pub async fn run(&mut self, input: &str) -> Report {
        let report = match classify(input) {
            InputKind::DirectUrl(url) => self.process_single_url(url).await,
            InputKind::SearchQuery(query) => self.process_search_query(query).await,
        };

        tracing::info!(
            successes = report.successful_scrapes,
            failures = report.failed_scrapes,
            "Report generated"
        );

        self.report = Some(report.clone());
        report
    }

    async fn process_single_url(&mut self, url: String) -> Report {
        tracing::info!(%url, "Single URL mode");

        let mut report = ReportAccumulator::new(url.clone(), ReportMode::SingleUrl);
        let mut list = CandidateList::from_direct(url);

        self.scrape(&mut list, &mut report).await;
        report.into_report()
    }

    async fn process_search_query(&mut self, query: String) -> Report {
        tracing::info!(%query, "Multi-URL mode");

        let mut report = ReportAccumulator::new(query.clone(), ReportMode::MultiUrl);

        let hits = search_or_empty(&self.search, &query).await;
        if hits.is_empty() {
            tracing::info!("No search results found");
            report.set_termination(TerminationReason::NoCandidates);
            return report.into_report();
        }
        tracing::info!("Found {} URLs", hits.len());

        let mut list = CandidateList::from_candidates_with_limit(
            hits.into_iter().map(|hit| hit.url),
            self.max_results,
        );
        let stats = list.stats();
        tracing::info!(
            "Main list: {}, Backup list: {}",
            stats.primary_size,
            stats.backup_size
        );

        self.scrape(&mut list, &mut report).await;
        report.into_report()
    }

    async fn scrape(&mut self, list: &mut CandidateList, report: &mut ReportAccumulator) {
        if !list.is_empty() {
            self.ensure_prepared().await;
        }
        run_loop(list, &self.fetcher, report).await;
    }

    /// Prepares the fetcher before its first use
    ///
    /// A failed preparation is logged; the run goes on and its fetches are
    /// recorded as failures. Preparation is retried on the next run.
    async fn ensure_prepared(&mut self) {
        if self.prepared {
            return;
        }

        if self.skip_prepare {
            tracing::debug!("Skipping fetcher preparation");
            return;
        }

        match self.fetcher.prepare().await {
            Ok(()) => self.prepared = true,
            Err(e) => tracing::error!(error = %e, "Fetcher preparation failed"),
        }
    }

    /// Returns true once the fetcher has been prepared
    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// The report of the most recent run
    pub fn last_report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    /// Writes the most recent report to `destination`
    pub fn output_report(&self, destination: &ReportDestination) -> crate::Result<()> {
        let report = self.report.as_ref().ok_or(ScrapionError::NoReport)?;
        write_report(report, destination)
    }
}
