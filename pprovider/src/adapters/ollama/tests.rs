//! Focused unit tests for Ollama adapter internals.

#![cfg(test)]

use std::io::Write;

use serde_json::json;

use crate::{ParameterMap, ProviderErrorKind, Role, StopReason};

use super::LocalEndpointConfig;
use super::serde_api::{
    OllamaApiChatResponse, OllamaApiShowResponse, build_api_chat_request, extract_error_message,
};
use super::types::{OllamaChatRequest, OllamaChatResponse, OllamaMessage};

fn chat_request(options: ParameterMap) -> OllamaChatRequest {
    OllamaChatRequest {
        model: "llama3".to_string(),
        messages: vec![OllamaMessage {
            role: Role::User,
            content: "why is the sky blue?".to_string(),
        }],
        options,
    }
}

#[test]
fn chat_body_disables_streaming_and_omits_empty_options() {
    let api_request = build_api_chat_request(chat_request(ParameterMap::new())).expect("build");
    let body = serde_json::to_value(&api_request).expect("serialize");

    assert_eq!(
        body,
        json!({
            "model": "llama3",
            "messages": [{"role": "user", "content": "why is the sky blue?"}],
            "stream": false
        })
    );
}

#[test]
fn chat_body_nests_present_options() {
    let mut options = ParameterMap::new();
    options.insert("temperature".to_string(), json!(0.7));
    options.insert("num_ctx".to_string(), json!(4096));

    let api_request = build_api_chat_request(chat_request(options)).expect("build");
    let body = serde_json::to_value(&api_request).expect("serialize");

    assert_eq!(body["options"], json!({"temperature": 0.7, "num_ctx": 4096}));
    assert!(body.get("temperature").is_none());
}

#[test]
fn chat_response_converts_to_single_segment() {
    let parsed: OllamaApiChatResponse = serde_json::from_value(json!({
        "model": "llama3",
        "created_at": "2024-05-01T00:00:00Z",
        "message": {"role": "assistant", "content": "Rayleigh scattering."},
        "done": true,
        "done_reason": "stop",
        "prompt_eval_count": 26,
        "eval_count": 4
    }))
    .expect("deserialize");

    let response = OllamaChatResponse::try_from(parsed)
        .expect("convert")
        .into_model_response();
    assert_eq!(response.role, Role::Assistant);
    assert_eq!(response.content, vec!["Rayleigh scattering."]);
    assert_eq!(response.stop_reason, StopReason::EndTurn);
    assert_eq!(response.usage.input_tokens, 26);
}

#[test]
fn chat_response_without_message_has_no_segments() {
    let parsed: OllamaApiChatResponse = serde_json::from_value(json!({
        "model": "llama3",
        "done": true
    }))
    .expect("deserialize");

    let response = OllamaChatResponse::try_from(parsed)
        .expect("convert")
        .into_model_response();
    assert!(response.content.is_empty());
}

#[test]
fn chat_response_with_unknown_role_is_a_decode_error() {
    let parsed: OllamaApiChatResponse = serde_json::from_value(json!({
        "model": "llama3",
        "message": {"role": "tool", "content": "{}"}
    }))
    .expect("deserialize");

    let err = OllamaChatResponse::try_from(parsed).expect_err("role must be known");
    assert_eq!(err.kind, ProviderErrorKind::Decode);
}

#[test]
fn show_response_parses_parameter_block() {
    let parsed: OllamaApiShowResponse = serde_json::from_value(json!({
        "modelfile": "FROM llama3",
        "parameters": "num_ctx                        4096\nstop                           \"<|eot_id|>\"\nstop                           \"<|start_header_id|>\"",
        "template": "{{ .Prompt }}"
    }))
    .expect("deserialize");

    let defaults = crate::ModelDefaults::from(parsed);
    assert_eq!(defaults.get("num_ctx"), Some("4096"));
    assert_eq!(
        defaults.get_all("stop").collect::<Vec<_>>(),
        vec!["<|eot_id|>", "<|start_header_id|>"]
    );
}

#[test]
fn show_response_without_parameters_is_empty() {
    let parsed: OllamaApiShowResponse =
        serde_json::from_value(json!({"modelfile": "FROM llama3"})).expect("deserialize");
    assert!(crate::ModelDefaults::from(parsed).is_empty());
}

#[test]
fn extract_error_message_reads_flat_envelope() {
    assert_eq!(
        extract_error_message(r#"{"error":"model 'nope' not found"}"#).as_deref(),
        Some("model 'nope' not found")
    );
    assert_eq!(extract_error_message("gateway timeout"), None);
}

#[test]
fn endpoint_config_accepts_alias_and_trims_trailing_slash() {
    let config =
        LocalEndpointConfig::from_json_str(r#"{"url": "http://gpu-box:11434/", "modelfile": "mistral"}"#)
            .expect("config should parse");
    assert_eq!(config.ollama_url, "http://gpu-box:11434");
    assert_eq!(config.modelfile, "mistral");
}

#[test]
fn endpoint_config_rejects_missing_fields_and_blank_model() {
    let err = LocalEndpointConfig::from_json_str(r#"{"ollama_url": "http://localhost:11434"}"#)
        .expect_err("modelfile is required");
    assert_eq!(err.kind, ProviderErrorKind::InvalidRequest);

    let err = LocalEndpointConfig::from_json_str(
        r#"{"ollama_url": "http://localhost:11434", "modelfile": "  "}"#,
    )
    .expect_err("blank modelfile");
    assert_eq!(err.kind, ProviderErrorKind::InvalidRequest);
}

#[test]
fn endpoint_config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{"ollama_url": "http://localhost:11434", "modelfile": "llama3"}}"#
    )
    .expect("write config");

    let config = LocalEndpointConfig::from_json_file(file.path()).expect("config should load");
    assert_eq!(config, LocalEndpointConfig::new("http://localhost:11434/", "llama3"));
}
