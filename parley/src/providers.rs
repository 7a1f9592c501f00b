//! Constructors that wire dialogues to live providers.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::{AnthropicDialogue, DialogueError, ProviderError, SecureCredentialManager};

pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(90);

/// Transport settings shared by every provider constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    /// Deadline for a single provider call. An elapsed deadline surfaces as
    /// [`ProviderErrorKind::Timeout`](crate::ProviderErrorKind::Timeout).
    pub timeout: Duration,
}

impl HttpSettings {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn client(&self) -> Result<Client, ProviderError> {
        Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| ProviderError::connection(err.to_string()))
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

pub fn anthropic_dialogue(
    model: impl Into<String>,
    api_key: impl Into<String>,
    settings: &HttpSettings,
) -> Result<AnthropicDialogue, DialogueError> {
    let model = model.into();
    if model.trim().is_empty() {
        return Err(ProviderError::invalid_request("model must not be empty").into());
    }

    let credentials = Arc::new(SecureCredentialManager::new());
    let provider = build_anthropic_provider(credentials, api_key.into(), settings.client()?)?;
    Ok(AnthropicDialogue::new(provider, model))
}

/// Like [`anthropic_dialogue`], reading the key from a file. Surrounding whitespace
/// in the file is ignored.
pub fn anthropic_dialogue_from_key_file(
    model: impl Into<String>,
    path: impl AsRef<Path>,
    settings: &HttpSettings,
) -> Result<AnthropicDialogue, DialogueError> {
    let api_key = crate::read_api_key_file(path)?;
    anthropic_dialogue(model, api_key.expose(), settings)
}

/// Describes `config.modelfile` on the host, then opens a dialogue that keeps the
/// reported defaults.
#[cfg(feature = "provider-ollama")]
pub async fn ollama_dialogue(
    config: &crate::LocalEndpointConfig,
    settings: &HttpSettings,
) -> Result<crate::OllamaDialogue, DialogueError> {
    use pprovider::adapters::ollama::OllamaProvider;

    let transport = OllamaProvider::default_http_transport(settings.client()?, &config.ollama_url);
    let provider = OllamaProvider::new(Arc::new(transport));
    let defaults = provider.describe_model(&config.modelfile).await?;

    Ok(crate::OllamaDialogue::new(
        Arc::new(provider),
        config.modelfile.clone(),
        defaults,
    ))
}

#[cfg(feature = "provider-anthropic")]
fn build_anthropic_provider(
    credentials: Arc<SecureCredentialManager>,
    api_key: String,
    http: Client,
) -> Result<Arc<dyn crate::ModelProvider>, ProviderError> {
    use pprovider::adapters::anthropic::AnthropicProvider;

    credentials.set_anthropic_api_key(api_key)?;
    let transport = Arc::new(AnthropicProvider::default_http_transport(http));
    Ok(Arc::new(AnthropicProvider::new(credentials, transport)))
}

#[cfg(not(feature = "provider-anthropic"))]
fn build_anthropic_provider(
    _credentials: Arc<SecureCredentialManager>,
    _api_key: String,
    _http: Client,
) -> Result<Arc<dyn crate::ModelProvider>, ProviderError> {
    Err(ProviderError::invalid_request(
        "provider-anthropic feature is not enabled on parley",
    ))
}

#[cfg(all(test, feature = "provider-anthropic"))]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::{DialogueErrorKind, ProviderDialogue, ProviderErrorKind, ProviderId};

    #[test]
    fn http_settings_default_to_ninety_seconds() {
        let settings = HttpSettings::default();
        assert_eq!(settings.timeout, Duration::from_secs(90));
        assert_eq!(
            settings.with_timeout(Duration::from_secs(5)).timeout,
            Duration::from_secs(5)
        );
    }

    #[test]
    fn anthropic_dialogue_starts_with_empty_session() {
        let dialogue = anthropic_dialogue(
            "claude-3-haiku-20240307",
            "sk-ant-test",
            &HttpSettings::default(),
        )
        .expect("dialogue should build");

        assert_eq!(dialogue.provider(), ProviderId::Anthropic);
        assert_eq!(dialogue.model(), "claude-3-haiku-20240307");
        assert!(dialogue.session().is_empty());
        assert_eq!(dialogue.system_prompt(), None);
    }

    #[test]
    fn anthropic_dialogue_rejects_malformed_key() {
        let err = anthropic_dialogue("claude-3-haiku-20240307", "sk-wrong", &HttpSettings::default())
            .expect_err("key prefix is checked");

        assert_eq!(err.kind, DialogueErrorKind::Provider);
        assert_eq!(
            err.provider_error().map(|inner| inner.kind),
            Some(ProviderErrorKind::Authentication)
        );
    }

    #[test]
    fn anthropic_dialogue_reads_trimmed_key_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "\n  sk-ant-from-file \n").expect("write key");

        let dialogue = anthropic_dialogue_from_key_file(
            "claude-3-haiku-20240307",
            file.path(),
            &HttpSettings::default(),
        )
        .expect("dialogue should build");
        assert!(dialogue.session().is_empty());

        let empty = tempfile::NamedTempFile::new().expect("temp file");
        let err = anthropic_dialogue_from_key_file(
            "claude-3-haiku-20240307",
            empty.path(),
            &HttpSettings::default(),
        )
        .expect_err("blank key file");
        assert_eq!(
            err.provider_error().map(|inner| inner.kind),
            Some(ProviderErrorKind::Authentication)
        );
    }
}
