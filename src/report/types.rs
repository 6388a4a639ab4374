//! Report document types
//!
//! The field names here are the report's document format; they serialize
//! one-to-one into the JSON emitted on stdout or written to disk.

use crate::candidates::Origin;
use crate::orchestrator::TerminationReason;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the run's candidates were obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// The input was a URL, fetched on its own
    SingleUrl,

    /// The input was a query, expanded into candidates by the search provider
    MultiUrl,
}

impl ReportMode {
    /// Declared ceiling on attempts for this mode
    ///
    /// This is a fixed figure (1 or 10), not the number of candidates found.
    pub fn declared_total(&self) -> usize {
        match self {
            Self::SingleUrl => 1,
            Self::MultiUrl => crate::candidates::MAX_CANDIDATES,
        }
    }
}

/// Outcome status of a single fetch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeStatus {
    Success,
    Failed,
}

/// One entry in the report's ordered attempt list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub url: String,
    pub status: ScrapeStatus,
    pub accessible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub source: Origin,
    pub timestamp: DateTime<Utc>,
}

impl ScrapeResult {
    pub fn success(url: impl Into<String>, content: impl Into<String>, source: Origin) -> Self {
        Self {
            url: url.into(),
            status: ScrapeStatus::Success,
            accessible: true,
            content: Some(content.into()),
            source,
            timestamp: Utc::now(),
        }
    }

    pub fn failure(url: impl Into<String>, source: Origin) -> Self {
        Self {
            url: url.into(),
            status: ScrapeStatus::Failed,
            accessible: false,
            content: None,
            source,
            timestamp: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ScrapeStatus::Success
    }
}

/// Structured account of a run: what was attempted and what succeeded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The original (trimmed) input
    pub query: String,

    pub mode: ReportMode,

    /// Declared ceiling on attempts, see [`ReportMode::declared_total`]
    pub total_urls_attempted: usize,

    pub successful_scrapes: usize,

    pub failed_scrapes: usize,

    /// Every attempt in the order it was made
    pub results: Vec<ScrapeResult>,

    pub failed_urls: Vec<String>,

    /// Why the run stopped; absent while the run is still in progress
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination_reason: Option<TerminationReason>,

    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Creates an empty report for the given input and mode
    pub fn new(query: impl Into<String>, mode: ReportMode) -> Self {
        Self {
            query: query.into(),
            mode,
            total_urls_attempted: mode.declared_total(),
            successful_scrapes: 0,
            failed_scrapes: 0,
            results: Vec::new(),
            failed_urls: Vec::new(),
            termination_reason: None,
            generated_at: Utc::now(),
        }
    }

    /// Serializes the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a report back from its JSON document form
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
