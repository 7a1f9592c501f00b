//! HTTP error classification shared by the reqwest-backed transports.

use reqwest::{Response, StatusCode};

use crate::ProviderError;

const MAX_ERROR_BODY: usize = 4096;

pub(crate) fn map_send_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::timeout(err.to_string())
    } else {
        ProviderError::connection(err.to_string())
    }
}

/// Classifies a non-success status. `message` replaces the generic text when the
/// provider's error envelope carried one.
pub(crate) fn classify_status(code: u16, body: String, message: Option<String>) -> ProviderError {
    let error = if code == StatusCode::TOO_MANY_REQUESTS.as_u16() {
        ProviderError::rate_limited(body)
    } else {
        ProviderError::status(code, body)
    };

    match message {
        Some(message) => error.with_message(message),
        None => error,
    }
}

pub(crate) async fn read_error_body(response: Response) -> (u16, String) {
    let code = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    (code, truncate(&body, MAX_ERROR_BODY))
}

pub(crate) fn truncate(input: &str, max: usize) -> String {
    if input.len() <= max {
        return input.to_string();
    }

    let mut end = max;
    while !input.is_char_boundary(end) {
        end -= 1;
    }

    let mut output = input[..end].to_string();
    output.push_str("...");
    output
}
