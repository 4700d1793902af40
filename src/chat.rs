use crate::config::ChatConfig;
use crate::error::InferenceError;
use crate::messages::{ChatMessage, ChatRequest, ChatResponse, ErrorResponse};
use reqwest::StatusCode;

/// Client for a local Ollama chat endpoint
///
/// Sends one non-streamed request per call and returns the reply text.
pub struct ChatClient {
    client: reqwest::Client,
    config: ChatConfig,
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> Result<Self, InferenceError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(InferenceError::Client)?;

        Ok(Self { client, config })
    }

    /// Model identifier sent with each request
    pub fn model_name(&self) -> &str {
        &self.config.model
    }

    /// Send `messages` and return the content of the model's reply
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String, InferenceError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages,
            stream: false,
        };

        ::log::info!(
            "Calling model {} at {}",
            self.config.model,
            self.config.endpoint
        );
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|source| InferenceError::Request {
                endpoint: self.config.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| InferenceError::Request {
                endpoint: self.config.endpoint.clone(),
                source,
            })?;

        if !status.is_success() {
            return Err(self.error_for(status, &body));
        }

        let reply: ChatResponse = serde_json::from_str(&body).map_err(InferenceError::Decode)?;
        if let Some(tokens) = reply.eval_count {
            ::log::debug!("Model generated {} tokens", tokens);
        }

        Ok(reply.message.content)
    }

    fn error_for(&self, status: StatusCode, body: &str) -> InferenceError {
        let message = match serde_json::from_str::<ErrorResponse>(body) {
            Ok(ErrorResponse { error }) if status == StatusCode::NOT_FOUND => {
                if error.contains("not found") {
                    return InferenceError::ModelNotFound(self.config.model.clone());
                }
                error
            }
            Ok(ErrorResponse { error }) => error,
            Err(_) => body.to_string(),
        };

        InferenceError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
