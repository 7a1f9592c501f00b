//! Ollama adapter types and provider-agnostic conversion logic.

use crate::{Message, ModelResponse, ParameterMap, ProviderId, Role, StopReason, TokenUsage};

#[derive(Debug, Clone, PartialEq)]
pub struct OllamaChatRequest {
    pub model: String,
    pub messages: Vec<OllamaMessage>,
    /// Sampling overrides; sent under `options` only when non-empty.
    pub options: ParameterMap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllamaMessage {
    pub role: Role,
    pub content: String,
}

impl From<Message> for OllamaMessage {
    fn from(value: Message) -> Self {
        Self {
            role: value.role,
            content: value.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllamaChatResponse {
    pub model: String,
    /// `None` when the host answered without a message object.
    pub message: Option<OllamaMessage>,
    pub done_reason: Option<String>,
    pub prompt_eval_count: u32,
    pub eval_count: u32,
}

impl OllamaChatResponse {
    pub(crate) fn into_model_response(self) -> ModelResponse {
        let (role, content) = match self.message {
            Some(message) => (message.role, vec![message.content]),
            None => (Role::Assistant, Vec::new()),
        };

        let stop_reason = match self.done_reason.as_deref() {
            Some("stop") => StopReason::EndTurn,
            Some("length") => StopReason::MaxTokens,
            _ => StopReason::Other,
        };

        ModelResponse {
            provider: ProviderId::Ollama,
            model: self.model,
            role,
            content,
            stop_reason,
            usage: TokenUsage {
                input_tokens: self.prompt_eval_count,
                output_tokens: self.eval_count,
            },
        }
    }
}
