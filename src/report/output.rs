//! Report output destinations

use crate::report::types::Report;
use crate::{ConfigError, ConfigResult};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where a finished report is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    /// Print the JSON document to standard output
    Stdout,

    /// Write the JSON document to a file, creating parent directories
    File(PathBuf),
}

impl ReportDestination {
    /// Builds a destination from a mode name (`stdio` or `file`) and optional path
    ///
    /// File mode without a non-empty path is a configuration error.
    pub fn from_parts(kind: &str, path: Option<&Path>) -> ConfigResult<Self> {
        match kind {
            "stdio" => Ok(Self::Stdout),
            "file" => match path {
                Some(p) if !p.as_os_str().is_empty() => Ok(Self::File(p.to_path_buf())),
                _ => Err(ConfigError::MissingOutputPath),
            },
            other => Err(ConfigError::UnknownDestination(other.to_string())),
        }
    }
}

/// Writes the report to the given destination
///
/// # Returns
///
/// * `Ok(())` - The document was written
/// * `Err(ScrapionError)` - Serialization or IO failed
pub fn write_report(report: &Report, destination: &ReportDestination) -> crate::Result<()> {
    let json = report.to_json()?;

    match destination {
        ReportDestination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
            stdout.flush()?;
        }
        ReportDestination::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, json.as_bytes())?;
            tracing::info!("Report saved to: {}", path.display());
        }
    }

    Ok(())
}
