//! JSON endpoint configuration for a local model host.
//!
//! ```rust
//! use pprovider::adapters::ollama::LocalEndpointConfig;
//!
//! let config = LocalEndpointConfig::from_json_str(
//!     r#"{"ollama_url": "http://localhost:11434/", "modelfile": "llama3"}"#,
//! )
//! .expect("config should parse");
//!
//! assert_eq!(config.ollama_url, "http://localhost:11434");
//! assert_eq!(config.modelfile, "llama3");
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::ProviderError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocalEndpointConfig {
    #[serde(alias = "url")]
    pub ollama_url: String,
    #[serde(alias = "model")]
    pub modelfile: String,
}

impl LocalEndpointConfig {
    pub fn new(ollama_url: impl Into<String>, modelfile: impl Into<String>) -> Self {
        Self {
            ollama_url: ollama_url.into(),
            modelfile: modelfile.into(),
        }
        .normalized()
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ProviderError> {
        let config: Self = serde_json::from_str(raw).map_err(|err| {
            ProviderError::invalid_request(format!("invalid endpoint config: {err}"))
        })?;

        if config.modelfile.trim().is_empty() {
            return Err(ProviderError::invalid_request(
                "endpoint config modelfile must not be empty",
            ));
        }

        Ok(config.normalized())
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            ProviderError::invalid_request(format!(
                "failed to read endpoint config {}: {err}",
                path.display()
            ))
        })?;

        Self::from_json_str(&raw)
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.ollama_url.trim().trim_end_matches('/').to_string();
        self.ollama_url = trimmed;
        self
    }
}
