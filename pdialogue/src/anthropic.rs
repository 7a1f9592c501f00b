//! Dialogue over the Anthropic Messages API.

use std::sync::Arc;

use pprovider::{ModelProvider, ProviderId};

use crate::conversation::Conversation;
use crate::{
    AnthropicChatConfig, ChatConfiguration, DialogueError, DialogueFuture, DialogueHooks,
    DialogueLine, DialogueSession, ProviderDialogue,
};

pub struct AnthropicDialogue {
    conversation: Conversation,
    system_prompt: Option<String>,
}

impl AnthropicDialogue {
    pub fn new(provider: Arc<dyn ModelProvider>, model: impl Into<String>) -> Self {
        Self {
            conversation: Conversation::new(provider, model),
            system_prompt: None,
        }
    }

    /// Sets the system prompt sent with every request. An empty prompt clears it.
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        let system_prompt = system_prompt.into();
        self.system_prompt = (!system_prompt.is_empty()).then_some(system_prompt);
        self
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn DialogueHooks>) -> Self {
        self.conversation.set_hooks(hooks);
        self
    }

    pub fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }
}

impl ProviderDialogue for AnthropicDialogue {
    type Config = AnthropicChatConfig;

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
            let system = self.system_prompt.as_deref();
            self.conversation
                .exchange(config.request_parameters(), system, text, role)
                .await
        })
    }
}

impl std::fmt::Debug for AnthropicDialogue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicDialogue")
            .field("model", &self.conversation.model())
            .field("system_prompt", &self.system_prompt)
            .field("session", self.conversation.session())
            .finish()
    }
}
