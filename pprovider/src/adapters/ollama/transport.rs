//! Ollama transport trait and reqwest-based HTTP implementation.

use reqwest::Client;

use crate::adapters::http::{classify_status, map_send_error, read_error_body};
use crate::{ModelDefaults, ProviderError, ProviderFuture};

use super::OLLAMA_HOST_URL;
use super::serde_api::{
    OllamaApiChatResponse, OllamaApiShowRequest, OllamaApiShowResponse, build_api_chat_request,
    extract_error_message,
};
use super::types::{OllamaChatRequest, OllamaChatResponse};

pub trait OllamaTransport: Send + Sync + std::fmt::Debug {
    fn chat<'a>(
        &'a self,
        request: OllamaChatRequest,
    ) -> ProviderFuture<'a, Result<OllamaChatResponse, ProviderError>>;

    /// Fetches the model's stored default parameters.
    fn show<'a>(
        &'a self,
        model: String,
    ) -> ProviderFuture<'a, Result<ModelDefaults, ProviderError>>;
}

#[derive(Debug, Clone)]
pub struct OllamaHttpTransport {
    client: Client,
    base_url: String,
}

impl OllamaHttpTransport {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: OLLAMA_HOST_URL.to_string(),
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

impl OllamaTransport for OllamaHttpTransport {
    fn chat<'a>(
        &'a self,
        request: OllamaChatRequest,
    ) -> ProviderFuture<'a, Result<OllamaChatResponse, ProviderError>> {
        Box::pin(async move {
            let api_request = build_api_chat_request(request)?;
            let response = self
                .client
                .post(self.endpoint("api/chat"))
                .json(&api_request)
                .send()
                .await
                .map_err(map_send_error)?;

            if !response.status().is_success() {
                let (code, body) = read_error_body(response).await;
                let message = extract_error_message(&body);
                return Err(classify_status(code, body, message));
            }

            let parsed: OllamaApiChatResponse = response
                .json()
                .await
                .map_err(|err| ProviderError::decode(err.to_string()))?;

            OllamaChatResponse::try_from(parsed)
        })
    }

    fn show<'a>(
        &'a self,
        model: String,
    ) -> ProviderFuture<'a, Result<ModelDefaults, ProviderError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(self.endpoint("api/show"))
                .json(&OllamaApiShowRequest { name: model })
                .send()
                .await
                .map_err(map_send_error)?;

            if !response.status().is_success() {
                let (code, body) = read_error_body(response).await;
                let message = extract_error_message(&body);
                return Err(classify_status(code, body, message));
            }

            let parsed: OllamaApiShowResponse = response
                .json()
                .await
                .map_err(|err| ProviderError::decode(err.to_string()))?;

            Ok(ModelDefaults::from(parsed))
        })
    }
}
