//! Fetch outcomes and the aggregated batch report.
//!
//! One fetch produces one [`FetchOutcome`]; the batch coordinator drains
//! every outcome of a run into a [`BatchReport`]. Entry order within the
//! report reflects completion order under the worker pool, not submission
//! order; callers must not rely on it.

use std::path::PathBuf;

use serde::Serialize;

use crate::knumber::KNumber;

/// A successfully downloaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedFetch {
    /// The normalized identifier.
    pub k_number: KNumber,
    /// Path of the file actually written.
    pub filepath: PathBuf,
}

/// A fetch that failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFetch {
    /// The normalized identifier.
    pub k_number: KNumber,
    /// Human-readable description of what went wrong.
    pub error: String,
}

/// The tagged result of one fetch attempt. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The document was downloaded and written to disk.
    Success(CompletedFetch),
    /// The fetch failed; no usable file was written.
    Failure(FailedFetch),
}

impl FetchOutcome {
    /// The identifier this outcome belongs to.
    pub fn k_number(&self) -> &KNumber {
        match self {
            Self::Success(c) => &c.k_number,
            Self::Failure(f) => &f.k_number,
        }
    }

    /// Whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Aggregated successes and failures for one batch run.
///
/// Created fresh per invocation of the batch operation; no cross-run state.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Fetches that completed and wrote a file.
    pub successes: Vec<CompletedFetch>,
    /// Fetches that failed, with error text.
    pub failures: Vec<FailedFetch>,
}

impl BatchReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one outcome, partitioning it into the matching collection.
    pub fn record(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Success(c) => self.successes.push(c),
            FetchOutcome::Failure(f) => self.failures.push(f),
        }
    }

    /// Total number of outcomes recorded.
    pub fn total(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    /// Whether no outcomes were recorded.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// One-line human-readable summary with counts.
    pub fn summary_line(&self) -> String {
        format!(
            "Download complete: {} successful, {} failed",
            self.successes.len(),
            self.failures.len()
        )
    }
}
