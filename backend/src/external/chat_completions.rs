use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::config::ChatConfig;
use crate::external::completion_provider::{OutboundMessage, ProviderError};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [OutboundMessage],
    temperature: f32,
    max_tokens: u32,
}

/// OpenAI-compatible `chat/completions` transport. One attempt per call.
pub struct ChatCompletionsClient {
    client: Client,
    url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    site_url: Option<String>,
    site_name: Option<String>,
}

impl ChatCompletionsClient {
    pub fn new(config: &ChatConfig, api_key: String) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.api_url.clone(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            site_url: config.site_url.clone(),
            site_name: config.site_name.clone(),
        })
    }

    pub async fn send(&self, messages: &[OutboundMessage]) -> Result<Value, ProviderError> {
        info!(
            "Requesting chat completion (model: {}, turns: {})",
            self.model,
            messages.len()
        );

        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let mut request = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body);

        if let Some(site_url) = &self.site_url {
            request = request.header("HTTP-Referer", site_url);
        }
        if let Some(site_name) = &self.site_name {
            request = request.header("X-Title", site_name);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("AI provider error: HTTP {}: {}", status.as_u16(), error_text);
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                body: error_text,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::Transport(format!("invalid response from AI provider: {}", e)))
    }
}
