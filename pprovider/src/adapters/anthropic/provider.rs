//! Anthropic provider implementation over transport and shared models.

use std::sync::Arc;

use reqwest::Client;

use crate::{
    ModelProvider, ModelRequest, ModelResponse, ProviderError, ProviderFuture, ProviderId,
    SecureCredentialManager,
};

use super::auth::resolve_anthropic_api_key;
use super::transport::{AnthropicHttpTransport, AnthropicTransport};
use super::types::{AnthropicMessage, AnthropicRequest};

#[derive(Clone)]
pub struct AnthropicProvider {
    credentials: Arc<SecureCredentialManager>,
    transport: Arc<dyn AnthropicTransport>,
}

impl AnthropicProvider {
    pub fn new(
        credentials: Arc<SecureCredentialManager>,
        transport: Arc<dyn AnthropicTransport>,
    ) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    pub fn default_http_transport(client: Client) -> AnthropicHttpTransport {
        AnthropicHttpTransport::new(client)
    }

    pub(crate) fn build_request(&self, request: ModelRequest) -> AnthropicRequest {
        AnthropicRequest {
            model: request.model,
            messages: request
                .messages
                .into_iter()
                .map(AnthropicMessage::from)
                .collect(),
            system: request.system,
            parameters: request.parameters,
        }
    }
}

impl ModelProvider for AnthropicProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Anthropic
    }

    fn complete<'a>(
        &'a self,
        request: ModelRequest,
    ) -> ProviderFuture<'a, Result<ModelResponse, ProviderError>> {
        Box::pin(async move {
            request.validate()?;
            let api_key = resolve_anthropic_api_key(&self.credentials)?;
            let anthropic_request = self.build_request(request);
            let response = self.transport.send(anthropic_request, api_key).await?;
            Ok(response.into_model_response())
        })
    }
}
