//! Domain types for fdakit.
//!
//! This crate holds the pure data model shared by the downloader and the
//! CLI: K number normalization, per-fetch outcomes, the aggregated batch
//! report, and filesystem path helpers. No I/O beyond directory creation.

pub mod knumber;
pub mod paths;
pub mod report;

// Re-export commonly used types for convenience
pub use knumber::KNumber;
pub use paths::{PathError, ensure_directory};
pub use report::{BatchReport, CompletedFetch, FailedFetch, FetchOutcome};
