//! Common imports for most parley applications.

pub use crate::{HttpSettings, anthropic_dialogue, anthropic_dialogue_from_key_file};
pub use crate::{assistant_line, parse_provider_id, user_line};
pub use crate::{parley_line, parley_lines};
pub use crate::{
    AnthropicChatConfig, AnthropicDialogue, ChatConfiguration, DialogueError, DialogueErrorKind,
    DialogueHooks, DialogueLine, DialogueSession, ModelDefaults, OllamaChatConfig, OllamaDialogue,
    ProviderDialogue, ProviderError, ProviderErrorKind, ProviderId, ReplyOutcome, Role,
    TripleGraph,
};

#[cfg(feature = "provider-ollama")]
pub use crate::{LocalEndpointConfig, ollama_dialogue};
