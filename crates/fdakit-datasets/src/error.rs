//! Dataset loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading and decoding the local datasets.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the dataset file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The classification JSON did not match the expected shape.
    #[error("failed to parse classification JSON {path}: {source}")]
    Json {
        /// Path of the dataset file.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The submissions CSV did not match the expected shape.
    #[error("failed to parse submissions CSV {path}: {source}")]
    Csv {
        /// Path of the dataset file.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: csv::Error,
    },
}
