//! Anthropic transport trait and reqwest-based HTTP implementation.

use reqwest::Client;

use crate::adapters::http::{classify_status, map_send_error, read_error_body};
use crate::{ProviderError, ProviderFuture, SecretString};

use super::serde_api::{AnthropicApiResponse, build_api_request, extract_error_message};
use super::types::{AnthropicRequest, AnthropicResponse};
use super::{ANTHROPIC_BASE_URL, ANTHROPIC_VERSION};

pub trait AnthropicTransport: Send + Sync + std::fmt::Debug {
    fn send<'a>(
        &'a self,
        request: AnthropicRequest,
        api_key: SecretString,
    ) -> ProviderFuture<'a, Result<AnthropicResponse, ProviderError>>;
}

#[derive(Debug, Clone)]
pub struct AnthropicHttpTransport {
    client: Client,
    base_url: String,
}

impl AnthropicHttpTransport {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: ANTHROPIC_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl AnthropicTransport for AnthropicHttpTransport {
    fn send<'a>(
        &'a self,
        request: AnthropicRequest,
        api_key: SecretString,
    ) -> ProviderFuture<'a, Result<AnthropicResponse, ProviderError>> {
        Box::pin(async move {
            let api_request = build_api_request(request)?;
            let response = self
                .client
                .post(self.endpoint("messages"))
                .header("x-api-key", api_key.expose())
                .header("anthropic-version", ANTHROPIC_VERSION)
                .json(&api_request)
                .send()
                .await
                .map_err(map_send_error)?;

            if !response.status().is_success() {
                let (code, body) = read_error_body(response).await;
                let message = extract_error_message(&body);
                return Err(classify_status(code, body, message));
            }

            let parsed: AnthropicApiResponse = response
                .json()
                .await
                .map_err(|err| ProviderError::decode(err.to_string()))?;

            AnthropicResponse::try_from(parsed)
        })
    }
}
