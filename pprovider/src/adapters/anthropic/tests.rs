//! Focused unit tests for Anthropic adapter internals.

#![cfg(test)]

use serde_json::json;

use crate::{ParameterMap, ProviderErrorKind, Role};

use super::serde_api::{
    AnthropicApiResponse, build_api_request, extract_error_message, parse_stop_reason,
};
use super::types::{AnthropicMessage, AnthropicRequest, AnthropicResponse, AnthropicStopReason};

fn request_with(parameters: ParameterMap, system: Option<&str>) -> AnthropicRequest {
    AnthropicRequest {
        model: "claude-3-haiku-20240307".to_string(),
        messages: vec![
            AnthropicMessage {
                role: Role::User,
                content: "Hi".to_string(),
            },
            AnthropicMessage {
                role: Role::Assistant,
                content: "Hello".to_string(),
            },
        ],
        system: system.map(str::to_string),
        parameters,
    }
}

fn max_tokens(value: u32) -> ParameterMap {
    let mut parameters = ParameterMap::new();
    parameters.insert("max_tokens".to_string(), json!(value));
    parameters
}

#[test]
fn build_api_request_flattens_parameters_next_to_transcript() {
    let mut parameters = max_tokens(1024);
    parameters.insert("top_p".to_string(), json!(0.9));

    let api_request =
        build_api_request(request_with(parameters, Some("be terse"))).expect("should build");
    let body = serde_json::to_value(&api_request).expect("should serialize");

    assert_eq!(
        body,
        json!({
            "model": "claude-3-haiku-20240307",
            "messages": [
                {"role": "user", "content": "Hi"},
                {"role": "assistant", "content": "Hello"}
            ],
            "system": "be terse",
            "max_tokens": 1024,
            "top_p": 0.9
        })
    );
}

#[test]
fn build_api_request_omits_absent_system_prompt() {
    let api_request = build_api_request(request_with(max_tokens(16), None)).expect("should build");
    let body = serde_json::to_value(&api_request).expect("should serialize");

    assert!(body.get("system").is_none());
    assert!(body.get("temperature").is_none());
}

#[test]
fn build_api_request_requires_max_tokens() {
    let err = build_api_request(request_with(ParameterMap::new(), None))
        .expect_err("max_tokens is mandatory");
    assert_eq!(err.kind, ProviderErrorKind::InvalidRequest);
}

#[test]
fn build_api_request_rejects_reserved_parameter_keys() {
    let mut parameters = max_tokens(16);
    parameters.insert("system".to_string(), json!("sneaky"));

    let err = build_api_request(request_with(parameters, None)).expect_err("reserved key");
    assert_eq!(err.kind, ProviderErrorKind::InvalidRequest);
    assert!(err.message.contains("system"));
}

#[test]
fn api_response_keeps_text_segments_and_skips_other_blocks() {
    let parsed: AnthropicApiResponse = serde_json::from_value(json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-haiku-20240307",
        "content": [
            {"type": "text", "text": "first"},
            {"type": "tool_use", "id": "toolu_1", "name": "lookup", "input": {}},
            {"type": "text", "text": "second"}
        ],
        "stop_reason": "end_turn",
        "stop_sequence": null,
        "usage": {"input_tokens": 12, "output_tokens": 7}
    }))
    .expect("response should deserialize");

    let response = AnthropicResponse::try_from(parsed).expect("response should convert");
    assert_eq!(response.role, Role::Assistant);
    assert_eq!(response.content, vec!["first", "second"]);
    assert_eq!(response.stop_reason, AnthropicStopReason::EndTurn);
    assert_eq!(response.usage.output_tokens, 7);
}

#[test]
fn api_response_with_unknown_role_is_a_decode_error() {
    let parsed: AnthropicApiResponse = serde_json::from_value(json!({
        "id": "msg_02",
        "role": "narrator",
        "model": "claude-3-haiku-20240307",
        "content": [],
        "stop_reason": null,
        "usage": null
    }))
    .expect("response should deserialize");

    let err = AnthropicResponse::try_from(parsed).expect_err("role must be known");
    assert_eq!(err.kind, ProviderErrorKind::Decode);
}

#[test]
fn parse_stop_reason_maps_expected_values() {
    assert_eq!(parse_stop_reason(Some("end_turn")), AnthropicStopReason::EndTurn);
    assert_eq!(
        parse_stop_reason(Some("max_tokens")),
        AnthropicStopReason::MaxTokens
    );
    assert_eq!(
        parse_stop_reason(Some("stop_sequence")),
        AnthropicStopReason::StopSequence
    );
    assert_eq!(parse_stop_reason(Some("pause")), AnthropicStopReason::Other);
    assert_eq!(parse_stop_reason(None), AnthropicStopReason::Other);
}

#[test]
fn extract_error_message_reads_error_envelope() {
    let body = r#"{"type":"error","error":{"type":"rate_limit_error","message":"Number of requests has exceeded your rate limit"}}"#;
    assert_eq!(
        extract_error_message(body).as_deref(),
        Some("Number of requests has exceeded your rate limit")
    );
    assert_eq!(extract_error_message("<html>bad gateway</html>"), None);
}
