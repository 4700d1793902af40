use clap::Parser;
use page_digest::{DEFAULT_URL, SummarizerConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-digest")]
#[command(about = "Summarize a web page with a locally hosted language model")]
#[command(version)]
pub struct Args {
    /// Page to summarize
    #[arg(default_value = DEFAULT_URL)]
    pub url: String,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Chat endpoint (e.g. http://localhost:11434/api/chat)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Model name
    #[arg(short, long)]
    pub model: Option<String>,

    /// Don't send a Content-Type header with the page request
    #[arg(long)]
    pub no_content_type: bool,
}

impl Args {
    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply(&self, mut config: SummarizerConfig) -> SummarizerConfig {
        if let Some(endpoint) = &self.endpoint {
            config.chat.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.model {
            config.chat.model = model.clone();
        }
        if self.no_content_type {
            config
                .fetch
                .headers
                .retain(|name, _| !name.eq_ignore_ascii_case("content-type"));
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["page-digest"]);
        assert_eq!(args.url, "https://sruthianem.com");
        assert_eq!(args.apply(SummarizerConfig::default()), SummarizerConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "page-digest",
            "https://example.com",
            "--endpoint",
            "http://gpu-box:11434/api/chat",
            "--model",
            "qwen2.5",
            "--no-content-type",
        ]);
        let config = args.apply(SummarizerConfig::default());

        assert_eq!(args.url, "https://example.com");
        assert_eq!(config.chat.endpoint, "http://gpu-box:11434/api/chat");
        assert_eq!(config.chat.model, "qwen2.5");
        assert!(config.fetch.headers.is_empty());
    }
}
