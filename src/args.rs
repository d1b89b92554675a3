use clap::Parser;
use page_summary::PageSource;
use page_summary::utils::normalize_target_url;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-summary")]
#[command(about = "Summarize an HTML page as structured JSON")]
#[command(version)]
pub struct Args {
    /// Page URL (http:// is assumed when no scheme is given)
    pub url: String,

    /// Read the HTML from this file instead of fetching it ("-" for stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// WebDriver endpoint (overrides the config file and WEBDRIVER_URL)
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Page load timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

impl Args {
    /// Where to get the page from
    pub fn page_source(&self) -> PageSource {
        let url = normalize_target_url(&self.url);
        match &self.input {
            Some(path) => PageSource::File {
                path: path.clone(),
                url,
            },
            None => PageSource::Web(url),
        }
    }
}
