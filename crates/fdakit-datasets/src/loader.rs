//! Read-once dataset loaders.
//!
//! Loaders are plain fallible functions: load once at startup and pass
//! the records down. No caching singletons.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::error::DatasetError;
use crate::models::{ClassificationFile, DeviceClassification, DeviceSubmission};

/// Load the device classification records from the JSON export.
///
/// The file carries a top-level `results` array; only that array is kept.
pub fn load_classifications(path: &Path) -> Result<Vec<DeviceClassification>, DatasetError> {
    let bytes = fs::read(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ClassificationFile =
        serde_json::from_slice(&bytes).map_err(|source| DatasetError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(file.results)
}

/// Load the AI/ML device submissions from the CSV export.
///
/// The source export is latin-1 encoded; non-UTF-8 bytes are decoded via
/// the latin-1 code-point mapping instead of being rejected.
pub fn load_submissions(path: &Path) -> Result<Vec<DeviceSubmission>, DatasetError> {
    let bytes = fs::read(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_latin1(&bytes);

    let mut reader = csv::Reader::from_reader(text.as_bytes());
    reader
        .deserialize()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| DatasetError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

/// Decode bytes as UTF-8 where possible, falling back to latin-1.
///
/// Latin-1 maps each byte to the identical Unicode code point, so the
/// fallback is lossless.
fn decode_latin1(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| b as char).collect()),
    }
}
