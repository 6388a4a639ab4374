//! Loop state definitions

use crate::candidates::Candidate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why the orchestration loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// A primary or direct candidate was fetched successfully
    PrimaryListHit,

    /// The backup list ran out while the last backup fetch succeeded
    BackupExhaustedAfterBackupHit,

    /// Every candidate was tried and the last one failed
    AllExhausted,

    /// The single direct URL could not be fetched
    DirectFailed,

    /// There was nothing to try
    NoCandidates,
}

impl TerminationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrimaryListHit => "primary_list_hit",
            Self::BackupExhaustedAfterBackupHit => "backup_exhausted_after_backup_hit",
            Self::AllExhausted => "all_exhausted",
            Self::DirectFailed => "direct_failed",
            Self::NoCandidates => "no_candidates",
        }
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of the orchestration loop between fetches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopState {
    /// The candidate to fetch next
    Running(Candidate),

    /// The loop has stopped
    Terminated(TerminationReason),
}

impl LoopState {
    pub fn is_terminated(&self) -> bool {
        matches!(self, Self::Terminated(_))
    }
}
