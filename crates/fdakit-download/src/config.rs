//! Downloader configuration.

use std::time::Duration;

use url::Url;

/// Base location of the FDA 510(k) document archive.
pub const DEFAULT_BASE_URL: &str = "https://www.accessdata.fda.gov/cdrh_docs/";

/// Default directory PDFs are written into.
pub const DEFAULT_OUTPUT_DIR: &str = "fda_pdfs";

/// Default bound on concurrently executing fetches.
pub const DEFAULT_MAX_PARALLEL: usize = 5;

/// Per-request timeout. Covers connect and body read; there is no
/// batch-level timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the fetcher and batch coordinator.
///
/// Use the builder pattern methods to customize the configuration.
///
/// # Example
///
/// ```
/// use fdakit_download::FetchConfig;
/// use std::time::Duration;
///
/// let config = FetchConfig::new()
///     .with_max_parallel(8)
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Base URL PDF paths are joined onto.
    base_url: Url,
    /// Per-request timeout.
    timeout: Duration,
    /// Bound on concurrently executing fetches.
    max_parallel: usize,
    /// User agent string for HTTP requests.
    user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: DEFAULT_TIMEOUT,
            max_parallel: DEFAULT_MAX_PARALLEL,
            user_agent: concat!("fdakit/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the document archive.
    #[must_use]
    pub fn with_base_url(mut self, url: Url) -> Self {
        self.base_url = url;
        self
    }

    /// Set the per-request timeout. Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the concurrency bound. Values below 1 are clamped to 1.
    #[must_use]
    pub fn with_max_parallel(mut self, max_parallel: usize) -> Self {
        self.max_parallel = max_parallel.max(1);
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configured per-request timeout.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The configured concurrency bound.
    pub const fn max_parallel(&self) -> usize {
        self.max_parallel
    }

    /// Build the HTTP client used for all fetches of a batch.
    pub fn build_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .timeout(self.timeout)
            .build()
    }
}
