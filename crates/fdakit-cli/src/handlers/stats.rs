//! Handler for the `stats` command.

use std::path::{Path, PathBuf};

use anyhow::Context;

use fdakit_datasets::{
    SubmissionFilter, device_class_distribution, devices_up_to_share, load_classifications,
    load_submissions, specialty_trend, submissions_per_year, summarize, top_device_names,
    top_specialties, yearly_growth,
};

/// Arguments for the stats handler.
pub struct StatsArgs<'a> {
    /// Path to the submissions CSV.
    pub submissions: &'a Path,
    /// Optional path to the classification JSON.
    pub classifications: Option<&'a PathBuf>,
    /// Inclusive lower bound on the decision year.
    pub from: Option<i32>,
    /// Inclusive upper bound on the decision year.
    pub to: Option<i32>,
    /// Specialty selection; empty keeps all.
    pub specialties: Vec<String>,
    /// Size of the top-N rankings.
    pub top: usize,
}

/// Load the datasets, apply the filter, and print descriptive summaries.
pub fn execute(args: StatsArgs<'_>) -> anyhow::Result<()> {
    let all = load_submissions(args.submissions).context("loading submissions dataset")?;

    let mut filter = SubmissionFilter::new().with_specialties(args.specialties);
    if args.from.is_some() || args.to.is_some() {
        filter = filter.with_year_range(
            args.from.unwrap_or(i32::MIN),
            args.to.unwrap_or(i32::MAX),
        );
    }
    let filtered = filter.apply(&all);

    let summary = summarize(&filtered);
    println!("Overview");
    println!("  Total submissions:    {}", summary.total);
    println!("  Unique device types:  {}", summary.unique_device_names);
    println!("  Medical specialties:  {}", summary.unique_specialties);

    println!("\nSubmissions by year:");
    for (year, count) in submissions_per_year(&filtered) {
        println!("  {year}: {count}");
    }

    let growth = yearly_growth(&filtered);
    if !growth.is_empty() {
        println!("\nYear-over-year growth:");
        for (year, percent) in growth {
            println!("  {year}: {percent:+.1}%");
        }
    }

    println!("\nTop {} medical specialties:", args.top);
    for (specialty, count) in top_specialties(&filtered, args.top) {
        println!("  {count:>5}  {specialty}");
    }

    println!("\nTop 5 specialty trend by year:");
    for (specialty, series) in specialty_trend(&filtered, 5) {
        let line = series
            .iter()
            .map(|(year, count)| format!("{year}: {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {specialty} ({line})");
    }

    println!("\nTop {} device types:", args.top);
    for (device, count) in top_device_names(&filtered, args.top) {
        println!("  {count:>5}  {device}");
    }

    println!("\nDevice types accounting for 80% of submissions:");
    let shares = devices_up_to_share(&filtered, 80.0);
    if shares.is_empty() {
        println!("  (none within the threshold)");
    } else {
        for entry in &shares {
            println!(
                "  {:>5.1}% (cumulative {:>5.1}%)  {}",
                entry.share, entry.cumulative_share, entry.device_name
            );
        }
    }

    println!("\nDevice class distribution:");
    let distribution = device_class_distribution(&filtered);
    let total: usize = distribution.iter().map(|(_, c)| c).sum();
    for (class, count) in &distribution {
        let percentage = if total == 0 {
            0.0
        } else {
            (*count as f64 / total as f64) * 100.0
        };
        println!("  Class {class}: {count} devices ({percentage:.1}%)");
    }

    if let Some(path) = args.classifications {
        let classifications =
            load_classifications(path).context("loading classification dataset")?;
        println!("\nDevice classification records: {}", classifications.len());
    }

    Ok(())
}
