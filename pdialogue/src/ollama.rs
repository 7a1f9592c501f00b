//! Dialogue over a local Ollama host.

use std::sync::Arc;

use pprovider::{ModelDefaults, ModelProvider, ProviderId};

use crate::conversation::Conversation;
use crate::{
    ChatConfiguration, DialogueError, DialogueFuture, DialogueHooks, DialogueLine,
    DialogueSession, OllamaChatConfig, ProviderDialogue,
};

/// Local-host dialogue. There is no separate system field; put instructions in the
/// transcript instead.
pub struct OllamaDialogue {
    conversation: Conversation,
    defaults: ModelDefaults,
}

impl OllamaDialogue {
    /// `defaults` are the model's parameters as reported by the host when the
    /// dialogue was created. They are kept for reference and never sent back.
    pub fn new(
        provider: Arc<dyn ModelProvider>,
        model: impl Into<String>,
        defaults: ModelDefaults,
    ) -> Self {
        Self {
            conversation: Conversation::new(provider, model),
            defaults,
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn DialogueHooks>) -> Self {
        self.conversation.set_hooks(hooks);
        self
    }

    pub fn defaults(&self) -> &ModelDefaults {
        &self.defaults
    }
}

impl ProviderDialogue for OllamaDialogue {
    type Config = OllamaChatConfig;

    fn provider(&self) -> ProviderId {
        self.conversation.provider_id()
    }

    fn model(&self) -> &str {
        self.conversation.model()
    }

    fn session(&self) -> &DialogueSession {
        self.conversation.session()
    }

    fn session_mut(&mut self) -> &mut DialogueSession {
        self.conversation.session_mut()
    }

    fn send_message<'a>(
        &'a mut self,
        config: &'a Self::Config,
        text: &'a str,
        role: &'a str,
    ) -> DialogueFuture<'a, Result<DialogueLine, DialogueError>> {
        Box::pin(async move {
            self.conversation
                .exchange(config.request_parameters(), None, text, role)
                .await
        })
    }
}

impl std::fmt::Debug for OllamaDialogue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OllamaDialogue")
            .field("model", &self.conversation.model())
            .field("defaults", &self.defaults)
            .field("session", self.conversation.session())
            .finish()
    }
}
