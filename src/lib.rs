// Re-export modules
pub mod config;
pub mod dom;
pub mod domain;
pub mod extractors;
pub mod fetch;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ExtractorConfig;
pub use extractors::Extractor;
pub use results::{ExtractionResponse, ExtractionResult};

use std::path::PathBuf;

/// Where the page to summarize comes from
#[derive(Debug, Clone)]
pub enum PageSource {
    /// Fetch the URL through WebDriver
    Web(String),
    /// Read HTML from a file (`-` for stdin) and treat it as the page at `url`
    File { path: PathBuf, url: String },
    /// HTML already in memory, served from `url`
    Html { html: String, url: String },
}

impl PageSource {
    /// The page URL links and form actions are resolved against
    pub fn url(&self) -> &str {
        match self {
            PageSource::Web(url) => url,
            PageSource::File { url, .. } | PageSource::Html { url, .. } => url,
        }
    }
}

/// Builder for summarizing one page
pub struct Summarizer {
    source: PageSource,
    config: ExtractorConfig,
}

impl Summarizer {
    /// Create a new Summarizer for the given source with default settings
    pub fn new(source: PageSource) -> Self {
        Self {
            source,
            config: ExtractorConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = ExtractorConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config = ExtractorConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Set the WebDriver endpoint used for web sources
    pub fn with_webdriver_url(mut self, webdriver_url: &str) -> Self {
        self.config.webdriver_url = webdriver_url.to_string();
        self
    }

    /// Set the tags stripped before extraction
    pub fn with_noise_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.noise_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the page load timeout for web sources
    pub fn with_fetch_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.fetch_timeout_secs = timeout_seconds;
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Obtain the page and summarize it.
    ///
    /// Failing to obtain the HTML is reported as an error response; the
    /// extraction itself always succeeds.
    pub async fn generate(self) -> ExtractionResponse {
        let extractor = Extractor::new(&self.config);

        let html = match &self.source {
            PageSource::Html { html, .. } => Ok(html.clone()),
            PageSource::File { path, .. } => fetch::read_html(path),
            PageSource::Web(url) => fetch::fetch_html(&self.config, url).await,
        };

        match html {
            Ok(html) => {
                ExtractionResponse::Success(extractor.extract_html(&html, self.source.url()))
            }
            Err(e) => {
                ::log::error!("Failed to obtain {}: {}", self.source.url(), e);
                ExtractionResponse::failure(format!("Failed to fetch URL. Error: {}", e))
            }
        }
    }
}

/// Summarize `html` as the page at `page_url` with default settings
pub fn extract_html(html: &str, page_url: &str) -> ExtractionResult {
    Extractor::default().extract_html(html, page_url)
}
