//! Batch coordinator.
//!
//! Bounded fan-out/fan-in over independent fetches: ensure the output
//! directory exists, dispatch every identifier under the concurrency
//! bound, join all of them, and aggregate the outcomes into a report.
//!
//! # Concurrency Model
//!
//! - `buffer_unordered(max_parallel)` is the single concurrency control
//! - Fetches share nothing but the HTTP client and the output directory
//! - Outcomes land in the report in completion order; no ordering guarantee
//! - A duplicated identifier races on its own file, last-writer-wins

use std::path::Path;

use futures_util::{StreamExt, stream};

use fdakit_core::{BatchReport, ensure_directory};

use crate::config::FetchConfig;
use crate::error::DownloadError;
use crate::fetcher::fetch_pdf;

/// Download a batch of submission PDFs into `output_dir`.
///
/// Duplicates are allowed and processed independently: N inputs always
/// produce N outcomes. Per-identifier failures are captured inside the
/// report; the only fatal error paths are an unusable output directory
/// and HTTP client construction.
pub async fn fetch_all(
    config: &FetchConfig,
    k_numbers: &[String],
    output_dir: &Path,
) -> Result<BatchReport, DownloadError> {
    ensure_directory(output_dir)?;

    let mut report = BatchReport::new();
    if k_numbers.is_empty() {
        tracing::info!("empty batch, nothing to fetch");
        return Ok(report);
    }

    let client = config.build_client()?;

    let outcomes: Vec<_> = stream::iter(k_numbers)
        .map(|raw| fetch_pdf(&client, config, raw, output_dir))
        .buffer_unordered(config.max_parallel())
        .collect()
        .await;

    for outcome in outcomes {
        report.record(outcome);
    }

    tracing::info!(
        successful = report.successes.len(),
        failed = report.failures.len(),
        "{}",
        report.summary_line()
    );

    Ok(report)
}
