//! Descriptive aggregations over a (filtered) submissions slice.
//!
//! These are the computations behind the analysis views: overview counts,
//! submissions per year, top-N rankings, and the device class
//! distribution. All pure; rendering is up to the consumer.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::models::DeviceSubmission;

/// Overview counts for a submissions slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionSummary {
    /// Total number of submissions.
    pub total: usize,
    /// Number of distinct generic device names.
    pub unique_device_names: usize,
    /// Number of distinct medical specialties.
    pub unique_specialties: usize,
}

/// Compute the overview counts.
pub fn summarize(submissions: &[DeviceSubmission]) -> SubmissionSummary {
    let device_names: HashSet<&str> = submissions.iter().map(|s| s.device_name.as_str()).collect();
    let specialties: HashSet<&str> = submissions
        .iter()
        .map(|s| s.medical_specialty_description.as_str())
        .collect();
    SubmissionSummary {
        total: submissions.len(),
        unique_device_names: device_names.len(),
        unique_specialties: specialties.len(),
    }
}

/// Submissions per decision year, ascending by year.
pub fn submissions_per_year(submissions: &[DeviceSubmission]) -> Vec<(i32, usize)> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for submission in submissions {
        *counts.entry(submission.decision_year()).or_default() += 1;
    }
    counts.into_iter().collect()
}

/// Year-over-year growth of the submission count, in percent.
///
/// One entry per year after the first observed year; `(2023, 50.0)` means
/// 2023 had 50% more submissions than the preceding observed year.
pub fn yearly_growth(submissions: &[DeviceSubmission]) -> Vec<(i32, f64)> {
    submissions_per_year(submissions)
        .windows(2)
        .map(|pair| {
            let (_, previous) = pair[0];
            let (year, current) = pair[1];
            let growth = (current as f64 - previous as f64) / previous as f64 * 100.0;
            (year, growth)
        })
        .collect()
}

/// Per-year submission counts for the `n` most frequent specialties.
///
/// Outer order follows the specialty ranking; inner series covers every
/// year observed in the slice, zero-filled where a specialty had no
/// submissions.
pub fn specialty_trend(
    submissions: &[DeviceSubmission],
    n: usize,
) -> Vec<(String, Vec<(i32, usize)>)> {
    let years: Vec<i32> = submissions_per_year(submissions)
        .into_iter()
        .map(|(year, _)| year)
        .collect();

    top_specialties(submissions, n)
        .into_iter()
        .map(|(specialty, _)| {
            let mut counts: BTreeMap<i32, usize> = years.iter().map(|&y| (y, 0)).collect();
            for submission in submissions
                .iter()
                .filter(|s| s.medical_specialty_description == specialty)
            {
                *counts.entry(submission.decision_year()).or_default() += 1;
            }
            (specialty, counts.into_iter().collect())
        })
        .collect()
}

/// One device type's share of all submissions in the slice.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceShare {
    /// Generic device name.
    pub device_name: String,
    /// Number of submissions for this device type.
    pub count: usize,
    /// Share of all submissions, in percent.
    pub share: f64,
    /// Running cumulative share down the ranking, in percent.
    pub cumulative_share: f64,
}

/// The device types that together account for up to `threshold` percent
/// of all submissions.
///
/// Walks the frequency ranking and keeps entries while the cumulative
/// share stays within the threshold. Empty when even the most frequent
/// device type exceeds it.
pub fn devices_up_to_share(submissions: &[DeviceSubmission], threshold: f64) -> Vec<DeviceShare> {
    let total = submissions.len();
    if total == 0 {
        return Vec::new();
    }

    let mut cumulative = 0.0;
    let mut kept = Vec::new();
    for (device_name, count) in top_device_names(submissions, usize::MAX) {
        let share = count as f64 / total as f64 * 100.0;
        cumulative += share;
        if cumulative > threshold {
            break;
        }
        kept.push(DeviceShare {
            device_name,
            count,
            share,
            cumulative_share: cumulative,
        });
    }
    kept
}

/// The `n` most frequent medical specialties with their counts.
pub fn top_specialties(submissions: &[DeviceSubmission], n: usize) -> Vec<(String, usize)> {
    top_counts(
        submissions
            .iter()
            .map(|s| s.medical_specialty_description.as_str()),
        n,
    )
}

/// The `n` most frequent generic device names with their counts.
pub fn top_device_names(submissions: &[DeviceSubmission], n: usize) -> Vec<(String, usize)> {
    top_counts(submissions.iter().map(|s| s.device_name.as_str()), n)
}

/// Submission counts per regulatory device class, descending by count.
pub fn device_class_distribution(submissions: &[DeviceSubmission]) -> Vec<(String, usize)> {
    top_counts(
        submissions.iter().map(|s| s.device_class.as_str()),
        usize::MAX,
    )
}

/// Count values and keep the `n` most frequent.
///
/// Ties break alphabetically so output is deterministic.
fn top_counts<'a>(values: impl Iterator<Item = &'a str>, n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}
