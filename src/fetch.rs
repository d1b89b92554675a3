use crate::config::ExtractorConfig;
use fantoccini::ClientBuilder;
use fantoccini::error::{CmdError, NewSessionError};
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Reasons a page could not be obtained
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported scheme {0:?}, only http and https pages can be fetched")]
    UnsupportedScheme(String),

    #[error("could not connect to WebDriver at {webdriver_url}: {source}")]
    Connect {
        webdriver_url: String,
        #[source]
        source: NewSessionError,
    },

    #[error("WebDriver command failed: {0}")]
    Command(#[from] CmdError),

    #[error("timed out after {0:?} loading the page")]
    Timeout(Duration),

    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Checks that `url` is an absolute http(s) URL
pub fn validate_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(FetchError::UnsupportedScheme(scheme.to_string())),
    }
}

/// Loads `url` through a WebDriver session and returns the page source.
///
/// The session is closed whether or not the page loaded.
pub async fn fetch_html(config: &ExtractorConfig, url: &str) -> Result<String, FetchError> {
    let url = validate_url(url)?;
    let timeout = config.fetch_timeout();

    let client = ClientBuilder::native()
        .connect(&config.webdriver_url)
        .await
        .map_err(|source| FetchError::Connect {
            webdriver_url: config.webdriver_url.clone(),
            source,
        })?;
    ::log::debug!("Connected to WebDriver at {}", config.webdriver_url);

    let loaded = tokio::time::timeout(timeout, async {
        client.goto(url.as_str()).await?;
        client.source().await
    })
    .await;

    if let Err(e) = client.close().await {
        ::log::warn!("Failed to close WebDriver session: {}", e);
    }

    match loaded {
        Ok(Ok(html)) => {
            ::log::info!("Fetched {} ({} bytes)", url, html.len());
            Ok(html)
        }
        Ok(Err(e)) => Err(FetchError::Command(e)),
        Err(_) => Err(FetchError::Timeout(timeout)),
    }
}

/// Reads HTML from a file, or from stdin when `path` is `-`
pub fn read_html<P: AsRef<Path>>(path: P) -> Result<String, FetchError> {
    let path = path.as_ref();
    let read_error = |source| FetchError::Read {
        path: path.display().to_string(),
        source,
    };

    if path == Path::new("-") {
        let mut html = String::new();
        std::io::stdin()
            .read_to_string(&mut html)
            .map_err(read_error)?;
        Ok(html)
    } else {
        std::fs::read_to_string(path).map_err(read_error)
    }
}
