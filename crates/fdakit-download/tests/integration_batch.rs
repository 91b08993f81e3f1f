//! Integration tests for the batch coordinator against a mock archive.

use std::time::Duration;

use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fdakit_download::{FetchConfig, fetch_all};

const PDF_BODY: &[u8] = b"%PDF-1.4\nfake 510(k) summary\n%%EOF";

/// Mock archive serving a 200 + body for the given archive paths and an
/// implicit 404 for everything else.
async fn mock_archive(paths: &[&str]) -> MockServer {
    let server = MockServer::start().await;
    for p in paths {
        Mock::given(method("GET"))
            .and(path(*p))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(PDF_BODY))
            .mount(&server)
            .await;
    }
    server
}

fn config_for(server: &MockServer) -> FetchConfig {
    let base = Url::parse(&format!("{}/cdrh_docs/", server.uri())).unwrap();
    FetchConfig::new()
        .with_base_url(base)
        .with_timeout(Duration::from_secs(5))
}

#[tokio::test]
async fn end_to_end_mixed_batch() {
    let server = mock_archive(&["/cdrh_docs/pdf24/K241380.pdf"]).await;
    let dir = tempfile::tempdir().unwrap();

    let batch = vec!["K241380".to_string(), "badid".to_string()];
    let report = fetch_all(&config_for(&server), &batch, dir.path())
        .await
        .unwrap();

    assert_eq!(report.successes.len(), 1);
    assert_eq!(report.failures.len(), 1);

    let success = &report.successes[0];
    assert_eq!(success.k_number.as_str(), "K241380");
    assert_eq!(success.filepath, dir.path().join("K241380.pdf"));
    assert_eq!(std::fs::read(&success.filepath).unwrap(), PDF_BODY);

    // Prefix rule applies to the malformed identifier too.
    let failure = &report.failures[0];
    assert_eq!(failure.k_number.as_str(), "KBADID");
    assert!(failure.error.contains("404"), "got: {}", failure.error);
}

#[tokio::test]
async fn empty_batch_returns_empty_report_without_requests() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    let report = fetch_all(&config_for(&server), &[], dir.path())
        .await
        .unwrap();

    assert!(report.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn serial_batch_produces_one_outcome_per_identifier() {
    let server = mock_archive(&[
        "/cdrh_docs/pdf24/K241380.pdf",
        "/cdrh_docs/pdf23/K230001.pdf",
    ])
    .await;
    let dir = tempfile::tempdir().unwrap();

    let batch: Vec<String> = ["K241380", "K230001", "K990000"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let config = config_for(&server).with_max_parallel(1);
    let report = fetch_all(&config, &batch, dir.path()).await.unwrap();

    assert_eq!(report.total(), 3);
    assert_eq!(report.successes.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].k_number.as_str(), "K990000");
}

#[tokio::test]
async fn duplicate_identifiers_are_not_deduplicated() {
    let server = mock_archive(&["/cdrh_docs/pdf24/K241380.pdf"]).await;
    let dir = tempfile::tempdir().unwrap();

    let batch = vec!["K241380".to_string(); 3];
    let report = fetch_all(&config_for(&server), &batch, dir.path())
        .await
        .unwrap();

    // N inputs -> N outcomes, all targeting the same file.
    assert_eq!(report.total(), 3);
    assert_eq!(report.successes.len(), 3);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn one_failure_does_not_affect_other_fetches() {
    let server = mock_archive(&["/cdrh_docs/pdf24/K241380.pdf"]).await;
    Mock::given(method("GET"))
        .and(path("/cdrh_docs/pdf21/K210001.pdf"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let batch = vec!["K241380".to_string(), "K210001".to_string()];
    let report = fetch_all(&config_for(&server), &batch, dir.path())
        .await
        .unwrap();

    assert_eq!(report.successes.len(), 1);
    assert_eq!(report.successes[0].k_number.as_str(), "K241380");
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].k_number.as_str(), "K210001");
    assert!(report.failures[0].error.contains("500"));
}

#[tokio::test]
async fn output_directory_is_created_even_when_all_fetches_fail() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("nested").join("fda_pdfs");
    assert!(!output.exists());

    let batch = vec!["K000000".to_string()];
    let report = fetch_all(&config_for(&server), &batch, &output)
        .await
        .unwrap();

    assert!(output.is_dir());
    assert_eq!(report.failures.len(), 1);
}

#[tokio::test]
async fn existing_file_is_overwritten_on_success() {
    let server = mock_archive(&["/cdrh_docs/pdf24/K241380.pdf"]).await;
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("K241380.pdf");
    std::fs::write(&target, b"stale copy").unwrap();

    let batch = vec!["K241380".to_string()];
    fetch_all(&config_for(&server), &batch, dir.path())
        .await
        .unwrap();

    assert_eq!(std::fs::read(&target).unwrap(), PDF_BODY);
}

#[tokio::test]
async fn not_found_response_leaves_existing_file_untouched() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("K241380.pdf");
    std::fs::write(&target, b"previously downloaded").unwrap();

    let batch = vec!["K241380".to_string()];
    let report = fetch_all(&config_for(&server), &batch, dir.path())
        .await
        .unwrap();

    assert_eq!(report.failures.len(), 1);
    assert_eq!(std::fs::read(&target).unwrap(), b"previously downloaded");
}

#[tokio::test]
async fn midstream_body_failure_removes_partial_file() {
    use std::io::{Read, Write};

    // Raw responder that promises a large body, sends a few bytes, then
    // closes the connection, so the failure lands after the destination
    // file has been created.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let responder = std::thread::spawn(move || {
        let (mut socket, _) = listener.accept().unwrap();
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request);
        let _ = socket.write_all(
            b"HTTP/1.1 200 OK\r\n\
Content-Type: application/pdf\r\n\
Content-Length: 1000000\r\n\
\r\n\
%PDF-1.4 truncated",
        );
        let _ = socket.flush();
    });

    let base = Url::parse(&format!("http://{addr}/cdrh_docs/")).unwrap();
    let config = FetchConfig::new()
        .with_base_url(base)
        .with_timeout(Duration::from_secs(5));
    let dir = tempfile::tempdir().unwrap();

    let batch = vec!["K241380".to_string()];
    let report = fetch_all(&config, &batch, dir.path()).await.unwrap();
    responder.join().unwrap();

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].k_number.as_str(), "K241380");
    assert!(
        !dir.path().join("K241380.pdf").exists(),
        "partial file should have been removed"
    );
}

#[tokio::test]
async fn unreachable_host_is_captured_as_failure() {
    // Nothing listens on this port; connect fails at the network layer.
    let base = Url::parse("http://127.0.0.1:1/cdrh_docs/").unwrap();
    let config = FetchConfig::new()
        .with_base_url(base)
        .with_timeout(Duration::from_secs(2));
    let dir = tempfile::tempdir().unwrap();

    let batch = vec!["K241380".to_string()];
    let report = fetch_all(&config, &batch, dir.path()).await.unwrap();

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].k_number.as_str(), "K241380");
    assert!(!report.failures[0].error.is_empty());
}
