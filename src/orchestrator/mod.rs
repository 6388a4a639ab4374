//! Orchestration loop
//!
//! This module contains the state machine that walks a candidate list:
//! - Which candidate to try next after each fetch outcome
//! - When to stop, and why
//! - Recording every outcome into the run's report
//!
//! Candidates are tried strictly one at a time, each at most once.

mod machine;
mod state;

pub use machine::{run_loop, start, transition};
pub use state::{LoopState, TerminationReason};
