//! Ollama adapter over the native `/api/chat` and `/api/show` endpoints.

mod config;
mod provider;
mod serde_api;
mod tests;
mod transport;
mod types;

pub use config::LocalEndpointConfig;
pub use provider::OllamaProvider;
pub use transport::{OllamaHttpTransport, OllamaTransport};
pub use types::{OllamaChatRequest, OllamaChatResponse, OllamaMessage};

pub const OLLAMA_HOST_URL: &str = "http://localhost:11434";
