//! User-selected filters over the submissions table.

use crate::models::DeviceSubmission;

/// Filter criteria for the submissions table.
///
/// Mirrors the two interactive filters of the analysis surface: an
/// inclusive decision-year range and a medical-specialty selection. An
/// empty specialty list means "all specialties".
#[derive(Debug, Clone, Default)]
pub struct SubmissionFilter {
    /// Inclusive `(from, to)` range on the decision year.
    pub year_range: Option<(i32, i32)>,
    /// Specialties to keep; empty keeps everything.
    pub specialties: Vec<String>,
}

impl SubmissionFilter {
    /// Create an unrestricted filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to decisions within the inclusive year range.
    #[must_use]
    pub const fn with_year_range(mut self, from: i32, to: i32) -> Self {
        self.year_range = Some((from, to));
        self
    }

    /// Restrict to the given medical specialties.
    #[must_use]
    pub fn with_specialties(mut self, specialties: Vec<String>) -> Self {
        self.specialties = specialties;
        self
    }

    /// Whether one submission passes the filter.
    pub fn matches(&self, submission: &DeviceSubmission) -> bool {
        if let Some((from, to)) = self.year_range {
            let year = submission.decision_year();
            if year < from || year > to {
                return false;
            }
        }
        if !self.specialties.is_empty()
            && !self
                .specialties
                .iter()
                .any(|s| s == &submission.medical_specialty_description)
        {
            return false;
        }
        true
    }

    /// Apply the filter, keeping the input order.
    pub fn apply(&self, submissions: &[DeviceSubmission]) -> Vec<DeviceSubmission> {
        submissions
            .iter()
            .filter(|s| self.matches(s))
            .cloned()
            .collect()
    }
}
