//! Report accumulation during a run

use crate::candidates::Origin;
use crate::orchestrator::TerminationReason;
use crate::report::types::{Report, ReportMode, ScrapeResult};

/// Append-only recorder of attempt outcomes
///
/// Only the orchestration loop writes to it; anyone may take a snapshot with
/// [`ReportAccumulator::finalize`] at any time.
#[derive(Debug, Clone)]
pub struct ReportAccumulator {
    report: Report,
}

impl ReportAccumulator {
    pub fn new(query: impl Into<String>, mode: ReportMode) -> Self {
        Self {
            report: Report::new(query, mode),
        }
    }

    /// Records a successful fetch
    pub fn record_success(&mut self, url: &str, content: &str, origin: Origin) {
        self.report.successful_scrapes += 1;
        self.report
            .results
            .push(ScrapeResult::success(url, content, origin));
    }

    /// Records a failed fetch and remembers the URL in the failed list
    pub fn record_failure(&mut self, url: &str, origin: Origin) {
        self.report.failed_scrapes += 1;
        self.report.failed_urls.push(url.to_string());
        self.report.results.push(ScrapeResult::failure(url, origin));
    }

    /// Stamps the reason the run stopped
    pub fn set_termination(&mut self, reason: TerminationReason) {
        self.report.termination_reason = Some(reason);
    }

    /// Returns a read-only snapshot of the current state
    pub fn finalize(&self) -> Report {
        self.report.clone()
    }

    /// Consumes the accumulator, yielding the report
    pub fn into_report(self) -> Report {
        self.report
    }
}
