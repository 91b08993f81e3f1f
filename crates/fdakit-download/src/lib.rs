//! Concurrent downloader for FDA 510(k) summary PDFs.
//!
//! Two operations:
//!
//! - [`fetch_pdf`] downloads one document: derive the URL from the K number,
//!   perform a single GET with a fixed timeout, stream the body to disk, and
//!   report the outcome. All failure paths are captured into the outcome;
//!   this function never returns an error.
//! - [`fetch_all`] fans a batch of identifiers out over a bounded pool,
//!   joins every fetch, and aggregates the outcomes into a
//!   [`fdakit_core::BatchReport`]. Only an unusable output directory is
//!   fatal to the whole batch.

pub mod batch;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod url;

pub use batch::fetch_all;
pub use config::{DEFAULT_BASE_URL, DEFAULT_MAX_PARALLEL, DEFAULT_OUTPUT_DIR, FetchConfig};
pub use error::DownloadError;
pub use fetcher::fetch_pdf;
pub use url::build_pdf_url;
