use clap::Parser;
use page_digest::{Summarizer, SummarizerConfig};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match SummarizerConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => SummarizerConfig::default(),
    };
    let config = args.apply(config);

    let summarizer = match Summarizer::new(config) {
        Ok(summarizer) => summarizer,
        Err(e) => {
            ::log::error!("Failed to initialize: {}", e);
            std::process::exit(1);
        }
    };

    match summarizer.summarize(&args.url).await {
        Ok(summary) => println!("{}", summary),
        Err(e) => {
            ::log::error!("Failed to summarize {}: {}", args.url, e);
            std::process::exit(1);
        }
    }
}
