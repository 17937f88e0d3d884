use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::Message;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("upstream returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ProviderError::Transport(format!("request to AI provider timed out: {}", value))
        } else {
            ProviderError::Transport(value.to_string())
        }
    }
}

/// A hosted chat-completion backend.
///
/// Implementations decide how the portfolio context reaches the model;
/// callers only see the reply text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn complete(&self, conversation: &[Message], context: &str) -> Result<String, ProviderError>;
}

/// A turn in the outbound payload. Unlike [`Message`] it may carry the
/// `system` role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    pub role: &'static str,
    pub content: String,
}

impl From<&Message> for OutboundMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role.as_str(),
            content: message.content.clone(),
        }
    }
}

/// First completion's text, from either the OpenAI `choices` envelope or a
/// bare `message` envelope. Empty when neither is present.
pub fn extract_reply(response: &Value) -> String {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .or_else(|| response.pointer("/message/content").and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_reply_from_choices() {
        let response = json!({ "choices": [{ "message": { "content": "Test reply" } }] });
        assert_eq!(extract_reply(&response), "Test reply");
    }

    #[test]
    fn test_extract_reply_from_bare_message() {
        let response = json!({ "message": { "content": "Test reply" } });
        assert_eq!(extract_reply(&response), "Test reply");
    }

    #[test]
    fn test_extract_reply_defaults_to_empty() {
        assert_eq!(extract_reply(&json!({})), "");
        assert_eq!(extract_reply(&json!({ "choices": [] })), "");
        assert_eq!(extract_reply(&json!({ "choices": [{ "message": { "content": null } }] })), "");
        assert_eq!(extract_reply(&json!("plain string")), "");
    }
}
