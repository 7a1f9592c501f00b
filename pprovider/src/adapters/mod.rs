#[cfg(any(feature = "provider-anthropic", feature = "provider-ollama"))]
mod http;

#[cfg(feature = "provider-anthropic")]
pub mod anthropic;

#[cfg(feature = "provider-ollama")]
pub mod ollama;
