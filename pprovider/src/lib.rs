//! Provider boundary for dialogue sessions.
//!
//! Defines the provider-agnostic request/response model, the classified
//! [`ProviderError`] family, credential handling, and the HTTP adapters for each
//! supported provider (behind `provider-*` cargo features).
//!
//! ```rust
//! use pprovider::{Message, ModelRequest, ParameterMap, Role};
//!
//! let mut parameters = ParameterMap::new();
//! parameters.insert("max_tokens".to_string(), serde_json::json!(1024));
//!
//! let request = ModelRequest::new("claude-3-haiku-20240307", vec![Message::new(Role::User, "hi")])
//!     .with_system("You are terse.")
//!     .with_parameters(parameters);
//!
//! assert!(request.validate().is_ok());
//! ```

mod credentials;
mod error;
mod model;
mod provider;

pub mod adapters;
pub mod prelude;

pub use credentials::{SecretString, SecureCredentialManager, read_api_key_file};
pub use error::{ProviderError, ProviderErrorKind};
pub use model::{
    Message, ModelDefaults, ModelRequest, ModelResponse, ProviderId, Role, StopReason, TokenUsage,
};
pub use pcommon::ParameterMap;
pub use provider::{ModelProvider, ProviderFuture};
