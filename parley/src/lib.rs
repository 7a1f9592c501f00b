//! Unified facade over the parley workspace crates.
//!
//! This crate is designed to be the single dependency for most applications.
//! It re-exports the dialogue, provider, observability and graph crates and
//! provides constructors that wire a dialogue to a live provider.
//!
//! ```rust,no_run
//! use parley::{AnthropicChatConfig, HttpSettings, ProviderDialogue, anthropic_dialogue};
//!
//! # async fn run() -> Result<(), parley::DialogueError> {
//! let mut dialogue = anthropic_dialogue(
//!     parley::CLAUDE_3_HAIKU,
//!     "sk-ant-...",
//!     &HttpSettings::default(),
//! )?
//! .with_system_prompt("Answer in one sentence.");
//!
//! let config = AnthropicChatConfig::new(1024)?;
//! let reply = dialogue.ask(&config, "Why is the sky blue?").await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

mod macros;

pub mod prelude;
pub mod providers;
pub mod util;

pub use pcommon;
pub use pdialogue;
pub use pgraph;
pub use pobserve;
pub use pprovider;

pub use pcommon::{BoxFuture, ParameterMap};
pub use pdialogue::{
    AnthropicChatConfig, AnthropicChatConfigBuilder, AnthropicDialogue, ChatConfiguration,
    DialogueError, DialogueErrorKind, DialogueFuture, DialogueHooks, DialogueLine,
    DialogueSession, NoopDialogueHooks, OllamaChatConfig, OllamaDialogue, ProviderDialogue,
    ReplyOutcome, Sampling,
};
pub use pgraph::{Edge, GraphError, GraphErrorKind, TripleGraph};
pub use pobserve::{MetricsDialogueHooks, SafeDialogueHooks, TracingDialogueHooks};
pub use pprovider::{
    Message, ModelDefaults, ModelProvider, ModelRequest, ModelResponse, ProviderError,
    ProviderErrorKind, ProviderFuture, ProviderId, Role, SecretString, SecureCredentialManager,
    StopReason, TokenUsage, read_api_key_file,
};

#[cfg(feature = "provider-anthropic")]
pub use pprovider::adapters::anthropic::{CLAUDE_3_HAIKU, CLAUDE_3_OPUS, CLAUDE_3_SONNET};
#[cfg(feature = "provider-ollama")]
pub use pprovider::adapters::ollama::{LocalEndpointConfig, OLLAMA_HOST_URL};

pub use providers::{
    DEFAULT_HTTP_TIMEOUT, HttpSettings, anthropic_dialogue, anthropic_dialogue_from_key_file,
};
#[cfg(feature = "provider-ollama")]
pub use providers::ollama_dialogue;
pub use util::{assistant_line, parse_provider_id, user_line};
