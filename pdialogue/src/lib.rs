//! Multi-turn dialogue sessions over model providers.
//!
//! A [`ProviderDialogue`] owns a [`DialogueSession`] and a provider handle. Each
//! `send_message` call appends the caller's turn, sends the full transcript with the
//! configuration's sampling parameters, and folds the single reply back into the
//! session.
//!
//! ```rust
//! use pdialogue::{DialogueLine, DialogueSession};
//!
//! let mut session = DialogueSession::new();
//! session.append("Hi", "user").expect("valid role");
//! session.append_line(DialogueLine::assistant("Hello!"));
//!
//! assert_eq!(session.transcript().len(), 2);
//! assert_eq!(session.last().map(DialogueLine::content), Some("Hello!"));
//! ```

mod anthropic;
mod config;
mod conversation;
mod dialogue;
mod error;
mod fold;
mod hooks;
mod line;
mod ollama;
mod session;

pub mod prelude {
    pub use crate::{
        AnthropicChatConfig, AnthropicChatConfigBuilder, AnthropicDialogue, ChatConfiguration,
        DialogueError, DialogueErrorKind, DialogueFuture, DialogueHooks, DialogueLine,
        DialogueSession, NoopDialogueHooks, OllamaChatConfig, OllamaDialogue, ProviderDialogue,
        ReplyOutcome, Sampling,
    };
    pub use pprovider::{ModelDefaults, ProviderId, Role};
}

pub use anthropic::AnthropicDialogue;
pub use config::{
    AnthropicChatConfig, AnthropicChatConfigBuilder, ChatConfiguration, DEFAULT_TEMPERATURE,
    OllamaChatConfig, Sampling,
};
pub use dialogue::{DialogueFuture, ProviderDialogue};
pub use error::{DialogueError, DialogueErrorKind};
pub use fold::ReplyOutcome;
pub use hooks::{DialogueHooks, NoopDialogueHooks};
pub use line::DialogueLine;
pub use ollama::OllamaDialogue;
pub use pprovider::{ModelDefaults, ProviderId, Role};
pub use session::DialogueSession;
