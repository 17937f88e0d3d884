use async_trait::async_trait;

use crate::external::chat_completions::ChatCompletionsClient;
use crate::external::completion_provider::{extract_reply, CompletionProvider, OutboundMessage, ProviderError};
use crate::models::Message;

/// For providers that honour a `system` turn: the context goes first, the
/// visitor's turns follow untouched.
pub struct SystemRoleProvider {
    client: ChatCompletionsClient,
}

impl SystemRoleProvider {
    pub fn new(client: ChatCompletionsClient) -> Self {
        Self { client }
    }
}

pub fn compose(conversation: &[Message], context: &str) -> Vec<OutboundMessage> {
    let mut messages = Vec::with_capacity(conversation.len() + 1);
    messages.push(OutboundMessage {
        role: "system",
        content: context.to_string(),
    });
    messages.extend(conversation.iter().map(OutboundMessage::from));
    messages
}

#[async_trait]
impl CompletionProvider for SystemRoleProvider {
    fn name(&self) -> &str {
        "system-role"
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
    fn test_context_is_leading_system_turn() {
        let conversation = vec![Message::user("Hi"), Message::assistant("Hello"), Message::user("Skills?")];

        let messages = compose(&conversation, "CONTEXT");

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0], OutboundMessage { role: "system", content: "CONTEXT".to_string() });
        assert_eq!(messages[1], OutboundMessage { role: "user", content: "Hi".to_string() });
        assert_eq!(messages[2], OutboundMessage { role: "assistant", content: "Hello".to_string() });
        assert_eq!(messages[3], OutboundMessage { role: "user", content: "Skills?".to_string() });
    }

    #[test]
    fn test_empty_conversation_still_sends_context() {
        let messages = compose(&[], "CONTEXT");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "system");
    }
}
