//! Typed records for the two datasets.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One device classification record from the `results` array of the
/// classification JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceClassification {
    /// Three-letter product code.
    #[serde(default)]
    pub product_code: String,
    /// Medical specialty (review panel) description.
    #[serde(default)]
    pub medical_specialty_description: String,
    /// Regulatory class (`1`, `2`, `3`, ...).
    #[serde(default)]
    pub device_class: String,
    /// Generic device name.
    #[serde(default)]
    pub device_name: String,
    /// Regulation definition text.
    #[serde(default)]
    pub definition: String,
}

/// Wrapper matching the top-level shape of the classification export.
#[derive(Debug, Deserialize)]
pub(crate) struct ClassificationFile {
    pub results: Vec<DeviceClassification>,
}

/// One row of the AI/ML device submissions CSV.
///
/// Only the decision date and the specialty column are guaranteed by the
/// dataset contract; the remaining columns default to empty when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSubmission {
    /// Submission number (usually a K number).
    #[serde(rename = "Submission Number", default)]
    pub submission_number: String,
    /// Marketed device name as submitted.
    #[serde(rename = "Device", default)]
    pub device: String,
    /// Submitting company.
    #[serde(rename = "Company", default)]
    pub company: String,
    /// Date the FDA issued its final decision.
    #[serde(
        rename = "Date of Final Decision",
        deserialize_with = "de_decision_date"
    )]
    pub date_of_final_decision: NaiveDate,
    /// Medical specialty (review panel) description.
    #[serde(rename = "medical_specialty_description", default)]
    pub medical_specialty_description: String,
    /// Generic device name from the matched classification record.
    #[serde(rename = "device_name", default)]
    pub device_name: String,
    /// Regulatory class from the matched classification record.
    #[serde(rename = "device_class", default)]
    pub device_class: String,
}

impl DeviceSubmission {
    /// Year of the final decision.
    pub fn decision_year(&self) -> i32 {
        use chrono::Datelike;
        self.date_of_final_decision.year()
    }
}

/// Date formats observed in the submissions exports.
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%m/%d/%y"];

pub(crate) fn parse_decision_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    Err(format!("unrecognized decision date: {raw:?}"))
}

fn de_decision_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_decision_date(&raw).map_err(serde::de::Error::custom)
}
