//! OpenAI-compatible Chat Completions client.
//!
//! Sends the image via data URI in the user message content array, with
//! deterministic decoding (`temperature = 0`).

use super::client::InferenceClient;
use crate::config::LlmConfig;
use crate::error::{ConfigError, InferenceError};
use crate::prompt::ChatMessage;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Client for any endpoint speaking the OpenAI Chat Completions format.
pub struct ChatCompletionsClient {
    api_key: String,
    model: String,
    client: reqwest::Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl ChatCompletionsClient {
    /// Create a client for `{base_url}/chat/completions`.
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            client: reqwest::Client::new(),
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            timeout: None,
        }
    }

    /// Build a client from the `[llm]` config section.
    pub fn from_config(config: &LlmConfig) -> Result<Self, ConfigError> {
        let api_key = config.resolved_api_key()?;
        let mut client = Self::new(&config.base_url, &api_key, &config.model);
        client.timeout = config.timeout_secs.map(Duration::from_secs);
        Ok(client)
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

// --- Request types ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [&'a ChatMessage; 1],
    temperature: f32,
}

// --- Response types ---

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl InferenceClient for ChatCompletionsClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, message: &ChatMessage) -> Result<String, InferenceError> {
        let start = Instant::now();

        let body = ChatRequest {
            model: &self.model,
            messages: [message],
            temperature: 0.0,
        };

        tracing::debug!("POST {} (model {})", self.endpoint, self.model);

        let mut request = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| InferenceError::Transport {
                endpoint: self.endpoint.clone(),
                message: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(InferenceError::Status {
                code: status.as_u16(),
                body: text,
            });
        }

        let chat_resp: ChatResponse = resp
            .json()
            .await
            .map_err(|e| InferenceError::Decode(e.to_string()))?;

        let text = chat_resp
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(InferenceError::EmptyChoices)?;

        tracing::info!(
            "Model {} answered in {}ms",
            self.model,
            start.elapsed().as_millis()
        );

        Ok(text)
    }
}
