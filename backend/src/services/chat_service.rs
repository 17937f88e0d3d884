use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::config::{ChatConfig, PromptStyle};
use crate::errors::AppError;
use crate::external::chat_completions::ChatCompletionsClient;
use crate::external::completion_provider::CompletionProvider;
use crate::external::injected_context::InjectedContextProvider;
use crate::external::system_role::SystemRoleProvider;
use crate::models::{ChatRequest, ChatResponse, Message};
use crate::services::portfolio_context_service;

/// Stateless chat proxy: normalise the visitor's conversation, ground it in
/// the portfolio context and relay it to the configured provider.
pub struct ChatService {
    config: ChatConfig,
    provider: Option<Arc<dyn CompletionProvider>>,
}

impl ChatService {
    pub fn from_config(config: ChatConfig) -> Result<Self, AppError> {
        let provider = match config.api_key() {
            Some(api_key) => {
                let client = ChatCompletionsClient::new(&config, api_key.to_string())?;
                let provider: Arc<dyn CompletionProvider> = match config.prompt_style {
                    PromptStyle::SystemRole => Arc::new(SystemRoleProvider::new(client)),
                    PromptStyle::InjectedFirstUserTurn => Arc::new(InjectedContextProvider::new(client)),
                };
                info!(
                    "Chat proxy using {:?} ({}, model: {})",
                    config.provider,
                    provider.name(),
                    config.model
                );
                Some(provider)
            }
            None => {
                warn!("{} not configured. Chat requests will fail until it is set.", config.provider.api_key_var());
                None
            }
        };

        Ok(Self { config, provider })
    }

    /// The provider is only reachable when the API key is configured.
    pub fn with_provider(config: ChatConfig, provider: Arc<dyn CompletionProvider>) -> Self {
        let provider = config.api_key().is_some().then_some(provider);
        Self { config, provider }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    pub fn ensure_configured(&self) -> Result<&dyn CompletionProvider, AppError> {
        self.provider
            .as_deref()
            .ok_or_else(|| AppError::Configuration(self.config.missing_key_message()))
    }

    /// Handles a raw `POST /api/chat` body.
    pub async fn handle(&self, body: &[u8]) -> Result<ChatResponse, AppError> {
        let provider = self.ensure_configured()?;

        let value: Value = serde_json::from_slice(body)?;
        let request = ChatRequest::from_json(&value);

        self.reply(provider, request).await
    }

    async fn reply(
        &self,
        provider: &dyn CompletionProvider,
        request: ChatRequest,
    ) -> Result<ChatResponse, AppError> {
        let request_id = Uuid::new_v4();
        let received = request.messages.len();
        let conversation = self.trim_history(request.messages);

        info!(
            "[{}] Chat request: {} turns received, {} forwarded via {}",
            request_id,
            received,
            conversation.len(),
            provider.name()
        );

        let context = portfolio_context_service::portfolio_context();

        let content = provider
            .complete(&conversation, &context)
            .await
            .map_err(|e| {
                error!("[{}] Chat completion failed: {}", request_id, e);
                AppError::from(e)
            })?;

        info!("[{}] Chat reply ready ({} chars)", request_id, content.len());

        Ok(ChatResponse { content })
    }

    fn trim_history(&self, mut messages: Vec<Message>) -> Vec<Message> {
        match self.config.max_history {
            Some(limit) if messages.len() > limit => messages.split_off(messages.len() - limit),
            _ => messages,
        }
    }
}
