//! Configuration module for Scrapion
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! All sections are optional and fall back to defaults.
//!
//! # Example
//!
//! ```no_run
//! use scrapion::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scrapion.toml")).unwrap();
//! println!("Fetch timeout: {}s", config.fetcher.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetcherConfig, SearchConfig, DEFAULT_SEARCH_ENDPOINT, DEFAULT_USER_AGENT,
    MAX_SEARCH_PAGES,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
