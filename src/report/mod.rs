//! Run reports
//!
//! This module handles:
//! - Accumulating the outcome of every fetch attempt during a run
//! - The report document and its JSON form
//! - Writing the finished document to stdout or a file

mod accumulator;
mod output;
mod types;

pub use accumulator::ReportAccumulator;
pub use output::{write_report, ReportDestination};
pub use types::{Report, ReportMode, ScrapeResult, ScrapeStatus};
