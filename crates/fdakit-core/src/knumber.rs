//! K number normalization.
//!
//! A K number is the FDA's identifier for a 510(k) premarket submission:
//! the letter `K` followed by a run of digits (e.g. `K241380`). Input is
//! normalized leniently; malformed codes are passed through unchanged and
//! surface later as a not-found fetch failure.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized 510(k) submission identifier.
///
/// Construction via [`KNumber::normalize`] trims whitespace, uppercases,
/// and prepends the `K` prefix when missing. Digit count and content are
/// deliberately not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KNumber(String);

impl KNumber {
    /// Normalize a raw identifier string into a `KNumber`.
    ///
    /// # Example
    ///
    /// ```
    /// use fdakit_core::KNumber;
    ///
    /// assert_eq!(KNumber::normalize("241380").as_str(), "K241380");
    /// assert_eq!(KNumber::normalize(" k241380 ").as_str(), "K241380");
    /// ```
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim().to_uppercase();
        if trimmed.starts_with('K') {
            Self(trimmed)
        } else {
            Self(format!("K{trimmed}"))
        }
    }

    /// The normalized identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 2-character routing bucket: the characters immediately after
    /// the `K` prefix, interpreted by the archive as a year-like path
    /// segment (`K241380` -> `24`).
    ///
    /// Returns an empty string for identifiers too short to carry one.
    pub fn bucket(&self) -> &str {
        self.0.get(1..3).unwrap_or("")
    }

    /// File name of the PDF for this submission (`<IDENTIFIER>.pdf`).
    pub fn pdf_filename(&self) -> String {
        format!("{}.pdf", self.0)
    }
}

impl fmt::Display for KNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepends_missing_prefix_and_uppercases() {
        assert_eq!(KNumber::normalize("241380").as_str(), "K241380");
        assert_eq!(KNumber::normalize("k241380").as_str(), "K241380");
    }

    #[test]
    fn well_formed_input_is_only_trimmed() {
        assert_eq!(KNumber::normalize(" k241380 ").as_str(), "K241380");
        assert_eq!(KNumber::normalize("K241380").as_str(), "K241380");
    }

    #[test]
    fn bucket_is_the_two_chars_after_the_prefix() {
        assert_eq!(KNumber::normalize("K241380").bucket(), "24");
        assert_eq!(KNumber::normalize("K993456").bucket(), "99");
    }

    #[test]
    fn short_identifier_has_empty_bucket() {
        assert_eq!(KNumber::normalize("K1").bucket(), "");
        assert_eq!(KNumber::normalize("").as_str(), "K");
    }

    #[test]
    fn malformed_input_passes_through() {
        // Not rejected here; resolves to a not-found failure at fetch time.
        assert_eq!(KNumber::normalize("badid").as_str(), "KBADID");
        assert_eq!(KNumber::normalize("badid").bucket(), "BA");
    }

    #[test]
    fn pdf_filename_appends_extension() {
        assert_eq!(KNumber::normalize("241380").pdf_filename(), "K241380.pdf");
    }
}
