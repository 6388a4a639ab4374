use crate::candidates::MAX_CANDIDATES;
use crate::config::types::{Config, FetcherConfig, SearchConfig, MAX_SEARCH_PAGES};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_search_config(&config.search)?;
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "fetcher user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "fetcher timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "fetcher connect_timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "fetcher connect_timeout_secs ({}) cannot exceed timeout_secs ({})",
            config.connect_timeout_secs, config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates search configuration
fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    let endpoint = Url::parse(&config.endpoint).map_err(|e| {
        ConfigError::Validation(format!("Invalid search endpoint '{}': {}", config.endpoint, e))
    })?;

    if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "Search endpoint '{}' must use http or https",
            config.endpoint
        )));
    }

    if config.max_results < 1 || config.max_results > MAX_CANDIDATES {
        return Err(ConfigError::Validation(format!(
            "search max_results must be between 1 and {}, got {}",
            MAX_CANDIDATES, config.max_results
        )));
    }

    if config.pages < 1 || config.pages > MAX_SEARCH_PAGES {
        return Err(ConfigError::Validation(format!(
            "search pages must be between 1 and {}, got {}",
            MAX_SEARCH_PAGES, config.pages
        )));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "search timeout_secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}
