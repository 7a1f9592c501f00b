//! Common `pprovider` imports for downstream crates.

pub use crate::{
    Message, ModelDefaults, ModelProvider, ModelRequest, ModelResponse, ParameterMap,
    ProviderError, ProviderErrorKind, ProviderFuture, ProviderId, Role, SecretString,
    SecureCredentialManager, StopReason, TokenUsage, read_api_key_file,
};
pub use pcommon::BoxFuture;
