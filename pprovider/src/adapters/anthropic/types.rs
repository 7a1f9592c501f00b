//! Anthropic adapter types and provider-agnostic conversion logic.

use crate::{
    Message, ModelResponse, ParameterMap, ProviderId, Role, StopReason, TokenUsage,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AnthropicRequest {
    pub model: String,
    pub messages: Vec<AnthropicMessage>,
    pub system: Option<String>,
    pub parameters: ParameterMap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnthropicMessage {
    pub role: Role,
    pub content: String,
}

impl From<Message> for AnthropicMessage {
    fn from(value: Message) -> Self {
        Self {
            role: value.role,
            content: value.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnthropicResponse {
    pub id: String,
    pub model: String,
    pub role: Role,
    pub content: Vec<String>,
    pub stop_reason: AnthropicStopReason,
    pub usage: AnthropicUsage,
}

impl AnthropicResponse {
    pub(crate) fn into_model_response(self) -> ModelResponse {
        ModelResponse {
            provider: ProviderId::Anthropic,
            model: self.model,
            role: self.role,
            content: self.content,
            stop_reason: self.stop_reason.into(),
            usage: self.usage.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnthropicStopReason {
    EndTurn,
    MaxTokens,
    StopSequence,
    ToolUse,
    Other,
}

impl From<AnthropicStopReason> for StopReason {
    fn from(value: AnthropicStopReason) -> Self {
        match value {
            AnthropicStopReason::EndTurn => Self::EndTurn,
            AnthropicStopReason::MaxTokens => Self::MaxTokens,
            AnthropicStopReason::StopSequence => Self::StopSequence,
            AnthropicStopReason::ToolUse | AnthropicStopReason::Other => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnthropicUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl From<AnthropicUsage> for TokenUsage {
    fn from(value: AnthropicUsage) -> Self {
        Self {
            input_tokens: value.input_tokens,
            output_tokens: value.output_tokens,
        }
    }
}
