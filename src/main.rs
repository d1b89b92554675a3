use clap::Parser;
use page_summary::{ExtractorConfig, Summarizer};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    // Configuration: file, then environment, then command-line flags
    let mut config = match &args.config {
        Some(path) => match ExtractorConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                std::process::exit(2);
            }
        },
        None => ExtractorConfig::default(),
    };
    config.apply_env();

    let source = args.page_source();
    ::log::info!("Summarizing page: {}", source.url());

    let mut summarizer = Summarizer::new(source).with_config(config);
    if let Some(webdriver_url) = &args.webdriver_url {
        summarizer = summarizer.with_webdriver_url(webdriver_url);
    }
    if let Some(timeout) = args.timeout {
        summarizer = summarizer.with_fetch_timeout(timeout);
    }

    let start_time = std::time::Instant::now();
    let response = summarizer.generate().await;
    ::log::debug!(
        "Finished in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            ::log::error!("Failed to serialize result: {}", e);
            std::process::exit(2);
        }
    }

    if response.is_failure() {
        std::process::exit(1);
    }
}
