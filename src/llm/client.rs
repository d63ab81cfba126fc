use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_openai::types::{CreateChatCompletionRequestArgs, ResponseFormat};
use async_trait::async_trait;
use tracing::{debug, error};

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}

/// Chat completion client for OpenAI-compatible providers.
///
/// Requests are built with the `async_openai` types and sent with a plain
/// `reqwest` client, so a non-success status is reported once, as-is, with
/// no client-side retry.
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: config.model.clone(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        debug!(
            "Creating chat completion with {} messages (temperature {})",
            request.messages.len(),
            request.temperature
        );

        let mut messages = Vec::new();
        for msg in &request.messages {
            messages.push(msg.to_openai_message()?);
        }

        let mut request_builder = CreateChatCompletionRequestArgs::default();
        request_builder
            .model(&self.model)
            .messages(messages)
            .temperature(request.temperature);

        if request.json_mode {
            request_builder.response_format(ResponseFormat::JsonObject);
        }

        let openai_request = request_builder.build()?;

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&openai_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!("Provider returned {}: {}", status, detail);
            return Err(Error::upstream(format!("OpenAI error ({})", status.as_u16())));
        }

        let completion: ChatCompletionResponse = response.json().await?;

        debug!(
            "Received chat completion response with {} choices",
            completion.choices.len()
        );

        Ok(completion)
    }
}
