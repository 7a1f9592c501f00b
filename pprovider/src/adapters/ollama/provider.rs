//! Ollama provider implementation over transport and shared models.

use std::sync::Arc;

use reqwest::Client;

use crate::{
    ModelDefaults, ModelProvider, ModelRequest, ModelResponse, ProviderError, ProviderFuture,
    ProviderId,
};

use super::transport::{OllamaHttpTransport, OllamaTransport};
use super::types::{OllamaChatRequest, OllamaMessage};

#[derive(Clone)]
pub struct OllamaProvider {
    transport: Arc<dyn OllamaTransport>,
}

impl OllamaProvider {
    pub fn new(transport: Arc<dyn OllamaTransport>) -> Self {
        Self { transport }
    }

    pub fn default_http_transport(
        client: Client,
        base_url: impl Into<String>,
    ) -> OllamaHttpTransport {
        OllamaHttpTransport::new(client).with_base_url(base_url)
    }

    pub async fn describe_model(&self, model: &str) -> Result<ModelDefaults, ProviderError> {
        if model.trim().is_empty() {
            return Err(ProviderError::invalid_request("model must not be empty"));
        }

        self.transport.show(model.to_string()).await
    }

    pub(crate) fn build_request(
        &self,
        request: ModelRequest,
    ) -> Result<OllamaChatRequest, ProviderError> {
        if request.system.is_some() {
            return Err(ProviderError::invalid_request(
                "Ollama chat requests carry no separate system field",
            ));
        }

        Ok(OllamaChatRequest {
            model: request.model,
            messages: request
                .messages
                .into_iter()
                .map(OllamaMessage::from)
                .collect(),
            options: request.parameters,
        })
    }
}

impl std::fmt::Debug for OllamaProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OllamaProvider")
            .field("transport", &self.transport)
            .finish()
    }
}

impl ModelProvider for OllamaProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Ollama
    }

    fn complete<'a>(
        &'a self,
        request: ModelRequest,
    ) -> ProviderFuture<'a, Result<ModelResponse, ProviderError>> {
        Box::pin(async move {
            request.validate()?;
            let ollama_request = self.build_request(request)?;
            let response = self.transport.chat(ollama_request).await?;
            Ok(response.into_model_response())
        })
    }
}
