use thiserror::Error;

/// Failure while retrieving or parsing the target page
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid request header '{0}'")]
    InvalidHeader(String),

    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned '{content_type}', not HTML")]
    NotHtml { url: String, content_type: String },

    #[error("Document from {0} has no <body> element")]
    MissingBody(String),
}

/// Failure while talking to the chat endpoint
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Chat request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Chat endpoint returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode chat response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Any failure of the fetch → prompt → chat pipeline
#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Failure while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
