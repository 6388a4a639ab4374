//! Scrapion: web content retrieval with candidate fallback
//!
//! This crate takes a single input (a URL or a free-text query), builds a ranked
//! set of candidate URLs, tries them one at a time under a fixed fallback policy,
//! and produces a structured report of every attempt.

pub mod candidates;
pub mod client;
pub mod config;
pub mod fetcher;
pub mod input;
pub mod orchestrator;
pub mod report;
pub mod search;

use thiserror::Error;

/// Main error type for Scrapion operations
#[derive(Debug, Error)]
pub enum ScrapionError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Search error: {0}")]
    Search(#[from] search::SearchError),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No report has been generated yet")]
    NoReport,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("An output path is required when the report destination is 'file'")]
    MissingOutputPath,

    #[error("Unknown report destination '{0}' (expected 'stdio' or 'file')")]
    UnknownDestination(String),
}

/// Result type alias for Scrapion operations
pub type Result<T> = std::result::Result<T, ScrapionError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use candidates::{Candidate, CandidateList, Origin};
pub use client::Client;
pub use config::Config;
pub use input::{classify, InputKind};
pub use orchestrator::TerminationReason;
pub use report::{Report, ReportDestination};
