// Re-export modules
pub mod chat;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod messages;
pub mod parsers;
pub mod prompt;
pub mod results;

// Re-export commonly used types for convenience
pub use config::{ChatConfig, FetchConfig, SummarizerConfig};
pub use error::{FetchError, InferenceError, SummarizeError};
pub use messages::{ChatMessage, Role};
pub use results::PageContent;

use chat::ChatClient;
use fetcher::PageFetcher;

/// URL summarized when none is given on the command line
pub const DEFAULT_URL: &str = "https://sruthianem.com";

/// Fetches a page, builds the prompt and asks the model for a summary
///
/// Steps run strictly in order; a failing step ends the run.
pub struct Summarizer {
    fetcher: PageFetcher,
    client: ChatClient,
}

impl Summarizer {
    /// Create a new summarizer from configuration
    pub fn new(config: SummarizerConfig) -> Result<Self, SummarizeError> {
        Ok(Self {
            fetcher: PageFetcher::new(&config.fetch)?,
            client: ChatClient::new(config.chat)?,
        })
    }

    /// Fetch and clean a page without contacting the model
    pub async fn fetch(&self, url: &str) -> Result<PageContent, SummarizeError> {
        Ok(self.fetcher.fetch(url).await?)
    }

    /// Summarize a page that has already been fetched
    pub async fn summarize_page(&self, page: &PageContent) -> Result<String, SummarizeError> {
        let messages = prompt::messages_for(page);
        Ok(self.client.chat(&messages).await?)
    }

    /// Fetch `url` and return the model's markdown summary
    pub async fn summarize(&self, url: &str) -> Result<String, SummarizeError> {
        let page = self.fetch(url).await?;
        ::log::info!("Summarizing '{}' with {}", page.title(), self.client.model_name());
        self.summarize_page(&page).await
    }
}
