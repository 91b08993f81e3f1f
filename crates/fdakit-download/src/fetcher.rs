//! Single-document fetcher.
//!
//! One fetch is one GET: derive the URL, stream the body to
//! `<output_dir>/<IDENTIFIER>.pdf`, report the outcome. No retries. Every
//! failure path is captured into a [`FetchOutcome::Failure`]; nothing
//! escapes as an error.

use std::path::Path;

use futures_util::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use fdakit_core::{CompletedFetch, FailedFetch, FetchOutcome, KNumber};

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::url::build_pdf_url;

/// Download one submission PDF.
///
/// Normalizes `raw` into a [`KNumber`], performs a single GET against the
/// configured archive, and streams the body to disk, overwriting any
/// existing file of the same name. On failure after the destination file
/// was opened, the partial file is removed (best effort).
pub async fn fetch_pdf(
    client: &reqwest::Client,
    config: &FetchConfig,
    raw: &str,
    output_dir: &Path,
) -> FetchOutcome {
    let k_number = KNumber::normalize(raw);
    let output_path = output_dir.join(k_number.pdf_filename());

    match download_to(client, config, &k_number, &output_path).await {
        Ok(()) => {
            tracing::debug!(k_number = %k_number, path = %output_path.display(), "fetched PDF");
            FetchOutcome::Success(CompletedFetch {
                k_number,
                filepath: output_path,
            })
        }
        Err(err) => {
            tracing::debug!(k_number = %k_number, error = %err, "fetch failed");
            FetchOutcome::Failure(FailedFetch {
                k_number,
                error: err.to_string(),
            })
        }
    }
}

/// Perform the GET and write the body to `output_path`.
async fn download_to(
    client: &reqwest::Client,
    config: &FetchConfig,
    k_number: &KNumber,
    output_path: &Path,
) -> Result<(), FetchError> {
    let url = build_pdf_url(config.base_url(), k_number)?;

    let response = client
        .get(url.clone())
        .timeout(config.timeout())
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    // The file is only touched once we know the request succeeded, so a
    // not-found response never clobbers a previously downloaded copy.
    let mut file = File::create(output_path)
        .await
        .map_err(|source| FetchError::Write {
            path: output_path.to_path_buf(),
            source,
        })?;

    let result = stream_body(response, &mut file, output_path).await;
    if result.is_err() {
        drop(file);
        // Mid-stream failure leaves a truncated file behind; remove it.
        let _ = tokio::fs::remove_file(output_path).await;
    }
    result
}

/// Copy the response body chunkwise into the open file.
async fn stream_body(
    response: reqwest::Response,
    file: &mut File,
    output_path: &Path,
) -> Result<(), FetchError> {
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)
            .await
            .map_err(|source| FetchError::Write {
                path: output_path.to_path_buf(),
                source,
            })?;
    }
    file.flush().await.map_err(|source| FetchError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;
    Ok(())
}
