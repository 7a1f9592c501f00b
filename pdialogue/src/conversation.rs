//! Shared send engine used by every provider dialogue.

use std::sync::Arc;

use pprovider::{ModelProvider, ModelRequest, ParameterMap, ProviderId};
use tracing::debug;

use crate::fold::fold_reply;
use crate::{DialogueError, DialogueHooks, DialogueLine, DialogueSession, NoopDialogueHooks};

pub(crate) struct Conversation {
    provider: Arc<dyn ModelProvider>,
    model: String,
    session: DialogueSession,
    hooks: Arc<dyn DialogueHooks>,
}

impl Conversation {
    pub(crate) fn new(provider: Arc<dyn ModelProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            session: DialogueSession::new(),
            hooks: Arc::new(NoopDialogueHooks),
        }
    }

    pub(crate) fn set_hooks(&mut self, hooks: Arc<dyn DialogueHooks>) {
        self.hooks = hooks;
    }

    pub(crate) fn provider_id(&self) -> ProviderId {
        self.provider.id()
    }

    pub(crate) fn model(&self) -> &str {
        &self.model
    }

    pub(crate) fn session(&self) -> &DialogueSession {
        &self.session
    }

    pub(crate) fn session_mut(&mut self) -> &mut DialogueSession {
        &mut self.session
    }

    /// Appends the caller turn, sends the transcript and folds the reply.
    ///
    /// The caller turn stays in the session when the provider call or the fold fails.
    pub(crate) async fn exchange(
        &mut self,
        parameters: ParameterMap,
        system: Option<&str>,
        text: &str,
        role: &str,
    ) -> Result<DialogueLine, DialogueError> {
        let caller_role = self.session.append(text, role)?.role();
        let provider = self.provider.id();

        let mut request = ModelRequest::new(self.model.clone(), self.session.transcript())
            .with_parameters(parameters);
        if let Some(system) = system {
            request = request.with_system(system);
        }

        self.hooks
            .on_send_start(provider, &self.model, self.session.len());
        debug!(
            provider = %provider,
            model = %self.model,
            turns = self.session.len(),
            "sending conversation"
        );

        let result = match self.provider.complete(request).await {
            Ok(response) => {
                let usage = response.usage;
                fold_reply(&mut self.session, caller_role, response)
                    .map(|(line, outcome)| (line, outcome, usage))
            }
            Err(err) => Err(DialogueError::from(err)),
        };

        match result {
            Ok((line, outcome, usage)) => {
                debug!(
                    provider = %provider,
                    model = %self.model,
                    outcome = ?outcome,
                    turns = self.session.len(),
                    "got reply"
                );
                self.hooks.on_reply(provider, &self.model, outcome, &usage);
                Ok(line)
            }
            Err(err) => {
                debug!(provider = %provider, model = %self.model, error = %err, "send failed");
                self.hooks.on_failure(provider, &self.model, &err);
                Err(err)
            }
        }
    }
}
