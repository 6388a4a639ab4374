//! Candidate URL lists
//!
//! Holds the ordered candidate URLs for a run, split into a primary list and a
//! backup list, each consumed through its own forward-only cursor. The lists are
//! built once and never mutated afterwards; only the cursors move.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Maximum number of candidates held by each of the primary and backup lists
pub const LIST_CAPACITY: usize = 5;

/// Maximum number of candidates accepted from a search
pub const MAX_CANDIDATES: usize = LIST_CAPACITY * 2;

/// Where a candidate URL came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// One of the first five search results
    Primary,

    /// One of search results six through ten
    Backup,

    /// The single URL supplied directly as input
    Direct,
}

impl Origin {
    /// Returns the report string for this origin
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Backup => "backup",
            Self::Direct => "direct",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A URL eligible for one fetch attempt, tagged with the list it was taken from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub url: String,
    pub origin: Origin,
}

impl Candidate {
    pub fn new(url: impl Into<String>, origin: Origin) -> Self {
        Self {
            url: url.into(),
            origin,
        }
    }
}

/// Size and consumption snapshot of a candidate list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStats {
    pub primary_size: usize,
    pub backup_size: usize,
    pub primary_remaining: usize,
    pub backup_remaining: usize,
}

/// Primary and backup candidate sequences with their read cursors
#[derive(Debug, Clone)]
pub struct CandidateList {
    primary: Vec<String>,
    backup: Vec<String>,
    primary_index: usize,
    backup_index: usize,
    direct: bool,
}

impl CandidateList {
    /// Builds a list for direct-URL mode: the URL is the only primary entry
    pub fn from_direct(url: impl Into<String>) -> Self {
        Self {
            primary: vec![url.into()],
            backup: Vec::new(),
            primary_index: 0,
            backup_index: 0,
            direct: true,
        }
    }

    /// Builds a list from ranked search candidates
    ///
    /// Empty and repeated URLs are dropped (first occurrence wins) so the two
    /// lists stay disjoint. The remainder is truncated to [`MAX_CANDIDATES`];
    /// up to [`LIST_CAPACITY`] go to the primary list and the rest to backup.
    pub fn from_candidates<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_candidates_with_limit(urls, MAX_CANDIDATES)
    }

    /// Like [`from_candidates`](Self::from_candidates), keeping at most
    /// `limit` unique URLs (never more than [`MAX_CANDIDATES`])
    pub fn from_candidates_with_limit<I, S>(urls: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut unique: Vec<String> = urls
            .into_iter()
            .map(Into::into)
            .filter(|url| !url.trim().is_empty())
            .filter(|url| seen.insert(url.clone()))
            .take(limit.min(MAX_CANDIDATES))
            .collect();

        let backup = if unique.len() > LIST_CAPACITY {
            unique.split_off(LIST_CAPACITY)
        } else {
            Vec::new()
        };

        Self {
            primary: unique,
            backup,
            primary_index: 0,
            backup_index: 0,
            direct: false,
        }
    }

    /// Returns true if this list was built from a single direct URL
    pub fn is_direct(&self) -> bool {
        self.direct
    }

    /// Takes the next primary candidate, or `None` once the primary list is exhausted
    ///
    /// In direct mode the sole entry is tagged [`Origin::Direct`].
    pub fn next_primary(&mut self) -> Option<Candidate> {
        let url = self.primary.get(self.primary_index)?.clone();
        self.primary_index += 1;

        let origin = if self.direct {
            Origin::Direct
        } else {
            Origin::Primary
        };
        Some(Candidate::new(url, origin))
    }

    /// Takes the next backup candidate, or `None` once the backup list is exhausted
    pub fn next_backup(&mut self) -> Option<Candidate> {
        let url = self.backup.get(self.backup_index)?.clone();
        self.backup_index += 1;
        Some(Candidate::new(url, Origin::Backup))
    }

    /// Looks up the origin of a URL held by this list
    ///
    /// In direct mode the direct URL is [`Origin::Direct`] and anything else
    /// defaults to [`Origin::Primary`]. In list mode a URL found in the backup
    /// list is [`Origin::Backup`]; everything else is [`Origin::Primary`].
    /// Callers should prefer the origin carried by the dequeued [`Candidate`].
    pub fn origin_of(&self, url: &str) -> Origin {
        if self.direct {
            if self.primary.first().map(String::as_str) == Some(url) {
                Origin::Direct
            } else {
                Origin::Primary
            }
        } else if self.backup.iter().any(|u| u == url) {
            Origin::Backup
        } else {
            Origin::Primary
        }
    }

    pub fn is_primary_exhausted(&self) -> bool {
        self.primary_index >= self.primary.len()
    }

    pub fn is_backup_exhausted(&self) -> bool {
        self.backup_index >= self.backup.len()
    }

    /// Returns true if there are no candidates at all
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.backup.is_empty()
    }

    /// Total number of candidates across both lists
    pub fn len(&self) -> usize {
        self.primary.len() + self.backup.len()
    }

    pub fn primary(&self) -> &[String] {
        &self.primary
    }

    pub fn backup(&self) -> &[String] {
        &self.backup
    }

    /// Returns list sizes and remaining counts
    pub fn stats(&self) -> ListStats {
        ListStats {
            primary_size: self.primary.len(),
            backup_size: self.backup.len(),
            primary_remaining: self.primary.len() - self.primary_index,
            backup_remaining: self.backup.len() - self.backup_index,
        }
    }
}
