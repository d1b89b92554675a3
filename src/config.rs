use crate::dom::DEFAULT_NOISE_TAGS;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding the WebDriver endpoint
pub const WEBDRIVER_URL_ENV: &str = "WEBDRIVER_URL";

/// Configuration for fetching and summarizing pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Tags whose subtrees are removed before extraction
    #[serde(default = "default_noise_tags")]
    pub noise_tags: Vec<String>,

    /// URL for the WebDriver instance used to fetch pages
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Maximum time to load a page, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

/// Default value for noise_tags
fn default_noise_tags() -> Vec<String> {
    DEFAULT_NOISE_TAGS.iter().map(|tag| tag.to_string()).collect()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default value for fetch_timeout_secs
fn default_fetch_timeout_secs() -> u64 {
    30
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            noise_tags: default_noise_tags(),
            webdriver_url: default_webdriver_url(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Override the WebDriver URL from the environment if it is set
    pub fn apply_env(&mut self) {
        if let Ok(webdriver_url) = std::env::var(WEBDRIVER_URL_ENV) {
            self.apply_webdriver_override(&webdriver_url);
        }
    }

    fn apply_webdriver_override(&mut self, webdriver_url: &str) {
        if !webdriver_url.is_empty() {
            ::log::debug!("Using WebDriver at {}", webdriver_url);
            self.webdriver_url = webdriver_url.to_string();
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
