//! Downloader error types.
//!
//! Per-identifier problems never surface here: the fetcher converts every
//! network and write failure into a `Failure` outcome. [`DownloadError`]
//! covers only faults that make the whole batch unusable.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors from the batch coordinator.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The output directory could not be created or is not a directory.
    #[error(transparent)]
    OutputDir(#[from] fdakit_core::PathError),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Internal per-fetch error, stringified into the `Failure` outcome.
#[derive(Debug, Error)]
pub(crate) enum FetchError {
    /// URL derivation failed for the (malformed) identifier.
    #[error("invalid URL for identifier: {0}")]
    Url(#[from] url::ParseError),

    /// Network-layer failure: DNS, connect, timeout, or body read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP status {status} for {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// Writing the response body to disk failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Destination file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
