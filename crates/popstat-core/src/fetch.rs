//! Document fetching over HTTP or from the local filesystem.
//!
//! Uses async reqwest on a shared runtime but presents a sync interface,
//! matching the rest of the pipeline. No retries: a transport failure is
//! reported to the caller as-is.

use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Connect timeout, separate from the whole-request timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error types for document fetching
#[derive(Debug)]
pub enum FetchError {
    /// HTTP error with optional status code
    Http {
        status: Option<u16>,
        message: String,
    },
    /// Request did not complete in time
    Timeout(Duration),
    /// Local file could not be read
    Io(std::io::Error),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http {
                status: Some(s),
                message,
            } => write!(f, "HTTP {s}: {message}"),
            Self::Http {
                status: None,
                message,
            } => write!(f, "HTTP error: {message}"),
            Self::Timeout(d) => write!(f, "request timed out after {}s", d.as_secs()),
            Self::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl FetchError {
    /// Create HTTP error from reqwest error
    pub fn from_reqwest(e: &reqwest::Error) -> Self {
        Self::Http {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// HTTP client settings.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Whole-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("popstat/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Shared tokio runtime for HTTP operations.
pub static SHARED_RUNTIME: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
});

/// Where a document locator points.
#[derive(Debug, PartialEq, Eq)]
pub enum Locator<'a> {
    Http(&'a str),
    File(&'a Path),
}

impl<'a> Locator<'a> {
    /// `http(s)://` goes over the network, `file://` and bare paths are read from disk.
    pub fn parse(locator: &'a str) -> Self {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            Self::Http(locator)
        } else {
            Self::File(Path::new(locator.strip_prefix("file://").unwrap_or(locator)))
        }
    }
}

/// Fetch the raw text of a document.
///
/// Non-2xx responses are errors.
pub fn fetch_document(locator: &str, config: &FetchConfig) -> Result<String, FetchError> {
    match Locator::parse(locator) {
        Locator::Http(url) => fetch_http(url, config),
        Locator::File(path) => {
            log::debug!("Reading document from {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
    }
}

fn fetch_http(url: &str, config: &FetchConfig) -> Result<String, FetchError> {
    log::debug!("GET {url}");
    SHARED_RUNTIME.handle().block_on(async {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::from_reqwest(&e))?;

        let request = async {
            let response = client
                .get(url)
                .send()
                .await
                .and_then(|r| r.error_for_status())
                .map_err(|e| FetchError::from_reqwest(&e))?;
            response
                .text()
                .await
                .map_err(|e| FetchError::from_reqwest(&e))
        };

        match tokio::time::timeout(config.timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(config.timeout)),
        }
    })
}
