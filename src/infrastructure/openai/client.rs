//! Chat-completions client used for recommendations.

use tracing::debug;

use super::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::settings::ProviderConfig;
use crate::infrastructure::error::UpstreamError;
use crate::infrastructure::http::{endpoint, read_json, require_key, transport};

const SERVICE: &str = "openai";
const MAX_TOKENS: u32 = 150;

#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    config: ProviderConfig,
    model: String,
}

impl OpenAiClient {
    pub fn new(http: reqwest::Client, config: ProviderConfig, model: String) -> Self {
        Self { http, config, model }
    }

    /// Returns the first choice's text, trimmed. Zero choices or a blank
    /// answer is an error, never an empty success.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, UpstreamError> {
        let api_key = require_key(SERVICE, &self.config.api_key)?;
        let url = endpoint(SERVICE, &self.config.base_url, &["chat", "completions"])?;

        debug!(service = SERVICE, model = %self.model, messages = messages.len(), "Calling upstream");

        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http
            .post(url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport(SERVICE))?;

        let completion: ChatCompletionResponse = read_json(SERVICE, response).await?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(UpstreamError::EmptyCompletion { service: SERVICE })
    }
}
