//! Handler for the `fetch` command.

use std::path::Path;

use anyhow::Context;
use url::Url;

use fdakit_download::{FetchConfig, fetch_all};

/// Arguments for the fetch handler.
pub struct FetchArgs<'a> {
    /// Raw identifier strings from the command line.
    pub k_numbers: &'a [String],
    /// Output directory.
    pub out: &'a Path,
    /// Concurrency bound.
    pub parallel: usize,
    /// Archive base URL.
    pub base_url: &'a str,
}

/// Run a download batch and print the report.
///
/// Per-identifier failures are reported but do not fail the command; only
/// an unusable output directory propagates as an error (and a non-zero
/// exit).
pub async fn execute(args: FetchArgs<'_>) -> anyhow::Result<()> {
    let base_url = Url::parse(args.base_url)
        .with_context(|| format!("invalid base URL: {}", args.base_url))?;
    let config = FetchConfig::new()
        .with_base_url(base_url)
        .with_max_parallel(args.parallel);

    tracing::debug!(
        count = args.k_numbers.len(),
        out = %args.out.display(),
        "starting download batch"
    );

    let report = fetch_all(&config, args.k_numbers, args.out)
        .await
        .context("download batch failed")?;

    println!("{}", report.summary_line());

    if !report.successes.is_empty() {
        println!("\nSuccessful downloads:");
        for item in &report.successes {
            println!("  - {}: {}", item.k_number, item.filepath.display());
        }
    }

    if !report.failures.is_empty() {
        println!("\nFailed downloads:");
        for item in &report.failures {
            println!("  - {}: {}", item.k_number, item.error);
        }
    }

    Ok(())
}
