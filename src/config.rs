use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for fetching the target page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Headers sent with the GET request
    #[serde(default = "default_headers")]
    pub headers: BTreeMap<String, String>,
}

/// Configuration for the chat endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Full URL of the chat-completion endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier passed in every request
    #[serde(default = "default_model")]
    pub model: String,
}

/// Top-level configuration for the summarizer pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub chat: ChatConfig,
}

impl SummarizerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Default request headers
///
/// The GET carries no body; the content type is sent to match the behaviour
/// of the tool this replaces.
fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())])
}

/// Default local Ollama chat endpoint
fn default_endpoint() -> String {
    "http://localhost:11434/api/chat".to_string()
}

/// Default model
fn default_model() -> String {
    "llama3.2".to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            headers: default_headers(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
        }
    }
}

impl ChatConfig {
    /// Create a chat configuration for the given endpoint and model
    pub fn new(endpoint: &str, model: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            model: model.to_string(),
        }
    }
}
