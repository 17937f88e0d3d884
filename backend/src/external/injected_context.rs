use async_trait::async_trait;

use crate::external::chat_completions::ChatCompletionsClient;
use crate::external::completion_provider::{extract_reply, CompletionProvider, OutboundMessage, ProviderError};
use crate::models::{Message, Role};

pub const INSTRUCTION: &str = "Answer only from the context above. Keep replies concise and conversational. Do not use heavy markdown. When an answer lists several items, use a numbered list.";

pub const DELIMITER: &str = "\n\n---\n\n";

/// For models without a usable `system` role: the context is folded into
/// the first user turn.
pub struct InjectedContextProvider {
    client: ChatCompletionsClient,
}

impl InjectedContextProvider {
    pub fn new(client: ChatCompletionsClient) -> Self {
        Self { client }
    }
}

/// Without a user turn there is nothing to inject into and the
/// conversation goes out unchanged.
pub fn compose(conversation: &[Message], context: &str) -> Vec<OutboundMessage> {
    let mut messages: Vec<OutboundMessage> = conversation.iter().map(OutboundMessage::from).collect();

    if let Some(index) = conversation.iter().position(|m| m.role == Role::User) {
        let original = &conversation[index].content;
        messages[index].content = format!("{}\n\n{}{}{}", context, INSTRUCTION, DELIMITER, original);
    }

    messages
}

#[async_trait]
impl CompletionProvider for InjectedContextProvider {
    fn name(&self) -> &str {
        "injected-context"
    }

    async fn complete(&self, conversation: &[Message], context: &str) -> Result<String, ProviderError> {
        let response = self.client.send(&compose(conversation, context)).await?;
        Ok(extract_reply(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_goes_into_first_user_turn() {
        let messages = compose(&[Message::user("Hi")], "CONTEXT");

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "user");
        assert!(messages[0].content.starts_with("CONTEXT"));
        assert!(messages[0].content.contains(INSTRUCTION));
        assert!(messages[0].content.ends_with("---\n\nHi"));
    }

    #[test]
    fn test_only_first_user_turn_is_modified() {
        let conversation = vec![
            Message::assistant("Welcome!"),
            Message::user("Hi"),
            Message::assistant("Hello"),
            Message::user("Projects?"),
        ];

        let messages = compose(&conversation, "CONTEXT");

        assert_eq!(messages[0].content, "Welcome!");
        assert!(messages[1].content.contains("CONTEXT"));
        assert_eq!(messages[2].content, "Hello");
        assert_eq!(messages[3].content, "Projects?");
        assert!(messages.iter().all(|m| m.role != "system"));
    }

    #[test]
    fn test_no_user_turn_means_no_injection() {
        let conversation = vec![Message::assistant("Hello")];

        let messages = compose(&conversation, "CONTEXT");

        assert_eq!(messages, vec![OutboundMessage { role: "assistant", content: "Hello".to_string() }]);
    }
}
