//! URL construction for the 510(k) document archive.
//!
//! Pure functions; no I/O. The archive shards PDFs into per-bucket folders
//! named `pdf<bucket>`, where the bucket is the 2-character year-like
//! segment of the K number (`K241380` -> `pdf24/K241380.pdf`).

use fdakit_core::KNumber;
use url::Url;

/// Build the archive URL for one submission PDF.
///
/// Joins `pdf<bucket>/<IDENTIFIER>.pdf` onto the base location. Relative
/// join semantics apply: a base without a trailing slash has its last
/// segment replaced, so archive bases should end in `/`.
pub fn build_pdf_url(base: &Url, k_number: &KNumber) -> Result<Url, url::ParseError> {
    let relative = format!("pdf{}/{}", k_number.bucket(), k_number.pdf_filename());
    base.join(&relative)
}
