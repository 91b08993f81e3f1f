//! Read-only access to the FDA AI/ML device datasets.
//!
//! Two pre-built local datasets back the analysis tooling:
//!
//! - a JSON document with a `results` array of device classification
//!   records, and
//! - a latin-1 encoded CSV table of AI/ML device submissions with a
//!   parseable "Date of Final Decision" column.
//!
//! This crate provides typed models, load-once-and-pass-down loaders,
//! filter application, and the descriptive aggregations consumers render.
//! There is no write path back into the datasets.

pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod summary;

pub use error::DatasetError;
pub use filter::SubmissionFilter;
pub use loader::{load_classifications, load_submissions};
pub use models::{DeviceClassification, DeviceSubmission};
pub use summary::{
    DeviceShare, SubmissionSummary, device_class_distribution, devices_up_to_share,
    specialty_trend, submissions_per_year, summarize, top_device_names, top_specialties,
    yearly_growth,
};
