//! Anthropic HTTP payload serde models and conversion helpers.

use serde::{Deserialize, Serialize};

use crate::{ParameterMap, ProviderError, Role};

use super::types::{AnthropicRequest, AnthropicResponse, AnthropicStopReason, AnthropicUsage};

const RESERVED_KEYS: [&str; 3] = ["model", "messages", "system"];

pub(crate) fn build_api_request(
    request: AnthropicRequest,
) -> Result<AnthropicApiRequest, ProviderError> {
    if request.messages.is_empty() {
        return Err(ProviderError::invalid_request(
            "Anthropic request requires at least one message",
        ));
    }

    if !request.parameters.contains_key("max_tokens") {
        return Err(ProviderError::invalid_request(
            "Anthropic request requires max_tokens",
        ));
    }

    if let Some(key) = RESERVED_KEYS
        .iter()
        .find(|key| request.parameters.contains_key(**key))
    {
        return Err(ProviderError::invalid_request(format!(
            "parameter '{key}' is reserved for the request envelope"
        )));
    }

    let messages = request
        .messages
        .into_iter()
        .map(|message| AnthropicApiMessage {
            role: message.role.as_str(),
            content: message.content,
        })
        .collect();

    Ok(AnthropicApiRequest {
        model: request.model,
        messages,
        system: request.system,
        parameters: request.parameters,
    })
}

pub(crate) fn parse_stop_reason(value: Option<&str>) -> AnthropicStopReason {
    match value {
        Some("end_turn") => AnthropicStopReason::EndTurn,
        Some("max_tokens") => AnthropicStopReason::MaxTokens,
        Some("stop_sequence") => AnthropicStopReason::StopSequence,
        Some("tool_use") => AnthropicStopReason::ToolUse,
        _ => AnthropicStopReason::Other,
    }
}

pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<AnthropicApiErrorEnvelope>(body).ok()?;
    Some(parsed.error.message)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnthropicApiErrorEnvelope {
    pub error: AnthropicApiError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnthropicApiError {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnthropicApiRequest {
    pub model: String,
    pub messages: Vec<AnthropicApiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(flatten)]
    pub parameters: ParameterMap,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnthropicApiMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnthropicApiResponse {
    pub id: String,
    pub model: String,
    pub role: String,
    #[serde(default)]
    pub content: Vec<AnthropicApiContentBlock>,
    pub stop_reason: Option<String>,
    pub usage: Option<AnthropicApiUsage>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum AnthropicApiContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnthropicApiUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl TryFrom<AnthropicApiResponse> for AnthropicResponse {
    type Error = ProviderError;

    fn try_from(value: AnthropicApiResponse) -> Result<Self, Self::Error> {
        let role = Role::parse(&value.role).ok_or_else(|| {
            ProviderError::decode(format!(
                "Anthropic response carried unknown role '{}'",
                value.role
            ))
        })?;

        let content = value
            .content
            .into_iter()
            .filter_map(|block| match block {
                AnthropicApiContentBlock::Text { text } => Some(text),
                AnthropicApiContentBlock::Unsupported => None,
            })
            .collect();

        let usage = value
            .usage
            .map(|usage| AnthropicUsage {
                input_tokens: usage.input_tokens,
                output_tokens: usage.output_tokens,
            })
            .unwrap_or_default();

        Ok(Self {
            id: value.id,
            model: value.model,
            role,
            content,
            stop_reason: parse_stop_reason(value.stop_reason.as_deref()),
            usage,
        })
    }
}
