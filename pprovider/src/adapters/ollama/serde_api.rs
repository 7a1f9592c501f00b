//! Ollama HTTP payload serde models and conversion helpers.

use serde::{Deserialize, Serialize};

use crate::{ModelDefaults, ParameterMap, ProviderError, Role};

use super::types::{OllamaChatRequest, OllamaChatResponse, OllamaMessage};

pub(crate) fn build_api_chat_request(
    request: OllamaChatRequest,
) -> Result<OllamaApiChatRequest, ProviderError> {
    if request.messages.is_empty() {
        return Err(ProviderError::invalid_request(
            "Ollama chat request requires at least one message",
        ));
    }

    let messages = request
        .messages
        .into_iter()
        .map(|message| OllamaApiMessage {
            role: message.role.as_str().to_string(),
            content: message.content,
        })
        .collect();

    Ok(OllamaApiChatRequest {
        model: request.model,
        messages,
        stream: false,
        options: request.options,
    })
}

pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<OllamaApiErrorEnvelope>(body).ok()?;
    Some(parsed.error)
}

#[derive(Debug, Deserialize)]
pub(crate) struct OllamaApiErrorEnvelope {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct OllamaApiChatRequest {
    pub model: String,
    pub messages: Vec<OllamaApiMessage>,
    pub stream: bool,
    #[serde(skip_serializing_if = "ParameterMap::is_empty")]
    pub options: ParameterMap,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct OllamaApiMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OllamaApiChatResponse {
    pub model: String,
    pub message: Option<OllamaApiMessage>,
    pub done_reason: Option<String>,
    #[serde(default)]
    pub prompt_eval_count: u32,
    #[serde(default)]
    pub eval_count: u32,
}

impl TryFrom<OllamaApiChatResponse> for OllamaChatResponse {
    type Error = ProviderError;

    fn try_from(value: OllamaApiChatResponse) -> Result<Self, Self::Error> {
        let message = value
            .message
            .map(|message| {
                let role = Role::parse(&message.role).ok_or_else(|| {
                    ProviderError::decode(format!(
                        "Ollama response carried unknown role '{}'",
                        message.role
                    ))
                })?;

                Ok::<_, ProviderError>(OllamaMessage {
                    role,
                    content: message.content,
                })
            })
            .transpose()?;

        Ok(Self {
            model: value.model,
            message,
            done_reason: value.done_reason,
            prompt_eval_count: value.prompt_eval_count,
            eval_count: value.eval_count,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct OllamaApiShowRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OllamaApiShowResponse {
    #[serde(default)]
    pub parameters: String,
}

impl From<OllamaApiShowResponse> for ModelDefaults {
    fn from(value: OllamaApiShowResponse) -> Self {
        ModelDefaults::parse(&value.parameters)
    }
}
