//! Transition function and driver for the orchestration loop
//!
//! # Transitions
//!
//! | Fetch   | Origin  | Action |
//! |---------|---------|--------|
//! | success | primary | record success, stop (`primary_list_hit`) |
//! | success | direct  | record success, stop (`primary_list_hit`) |
//! | success | backup  | record success, next backup or stop (`backup_exhausted_after_backup_hit`) |
//! | failure | direct  | record failure, stop (`direct_failed`) |
//! | failure | primary | record failure, next primary, else next backup, else stop (`all_exhausted`) |
//! | failure | backup  | record failure, next backup or stop (`all_exhausted`) |

use crate::candidates::{Candidate, CandidateList, Origin};
use crate::fetcher::{ContentFetcher, FetchResult};
use crate::orchestrator::state::{LoopState, TerminationReason};
use crate::report::ReportAccumulator;

/// Enters the loop: the first primary candidate, or `no_candidates`
pub fn start(list: &mut CandidateList) -> LoopState {
    match list.next_primary() {
        Some(candidate) => LoopState::Running(candidate),
        None => LoopState::Terminated(TerminationReason::NoCandidates),
    }
}

/// Applies one fetch outcome for `candidate` and decides what happens next
///
/// Records the outcome in `report` and advances `list` cursors as needed.
pub fn transition(
    list: &mut CandidateList,
    report: &mut ReportAccumulator,
    candidate: &Candidate,
    outcome: &FetchResult<String>,
) -> LoopState {
    match (outcome, candidate.origin) {
        (Ok(content), Origin::Primary | Origin::Direct) => {
            report.record_success(&candidate.url, content, candidate.origin);
            LoopState::Terminated(TerminationReason::PrimaryListHit)
        }
        (Ok(content), Origin::Backup) => {
            report.record_success(&candidate.url, content, Origin::Backup);
            next_or(
                list.next_backup(),
                TerminationReason::BackupExhaustedAfterBackupHit,
            )
        }
        (Err(_), Origin::Direct) => {
            report.record_failure(&candidate.url, Origin::Direct);
            LoopState::Terminated(TerminationReason::DirectFailed)
        }
        (Err(_), Origin::Primary) => {
            report.record_failure(&candidate.url, Origin::Primary);
            let next = list.next_primary().or_else(|| list.next_backup());
            next_or(next, TerminationReason::AllExhausted)
        }
        (Err(_), Origin::Backup) => {
            report.record_failure(&candidate.url, Origin::Backup);
            next_or(list.next_backup(), TerminationReason::AllExhausted)
        }
    }
}

fn next_or(next: Option<Candidate>, reason: TerminationReason) -> LoopState {
    match next {
        Some(candidate) => LoopState::Running(candidate),
        None => LoopState::Terminated(reason),
    }
}

/// Runs the loop to completion
///
/// Fetch errors are recorded and never propagated. The termination reason is
/// stamped on the report before returning.
pub async fn run_loop<F>(
    list: &mut CandidateList,
    fetcher: &F,
    report: &mut ReportAccumulator,
) -> TerminationReason
where
    F: ContentFetcher + ?Sized,
{
    let mut state = start(list);
    let mut attempts = 0usize;

    let reason = loop {
        let candidate = match state {
            LoopState::Running(candidate) => candidate,
            LoopState::Terminated(reason) => break reason,
        };

        attempts += 1;
        tracing::info!(url = %candidate.url, origin = %candidate.origin, attempt = attempts, "Attempting fetch");

        let outcome = fetcher.fetch(&candidate.url).await;
        match &outcome {
            Ok(content) => {
                tracing::info!(url = %candidate.url, bytes = content.len(), "Fetch succeeded")
            }
            Err(e) => tracing::warn!(url = %candidate.url, error = %e, "Fetch failed"),
        }

        state = transition(list, report, &candidate, &outcome);
        tracing::debug!(?state, "Transition");
    };

    tracing::info!(%reason, attempts, "Scraping loop finished");
    report.set_termination(reason);
    reason
}
