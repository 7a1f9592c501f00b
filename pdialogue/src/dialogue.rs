//! Provider-polymorphic dialogue contract.

use pcommon::BoxFuture;
use pprovider::ProviderId;

use crate::{ChatConfiguration, DialogueError, DialogueLine, DialogueSession};

pub type DialogueFuture<'a, T> = BoxFuture<'a, T>;

/// A conversation with one model on one provider.
///
/// `send_message` appends the caller's turn, sends the whole transcript and folds the
/// single reply into the session, returning the resulting last line. On failure the
/// caller's turn remains in the session; use [`DialogueSession::pop`] to prune it.
pub trait ProviderDialogue: Send {
    type Config: ChatConfiguration;

    fn provider(&self) -> ProviderId;

    fn model(&self) -> &str;

    fn session(&self) -> &DialogueSession;

    fn session_mut(&mut self) -> &mut DialogueSession;

    fn send_message<'a>(
        &'a mut self,
        config: &'a Self::Config,
        text: &'a str,
        role: &'a str,
    ) -> DialogueFuture<'a, Result<DialogueLine, DialogueError>>;

    fn ask<'a>(
        &'a mut self,
        config: &'a Self::Config,
        text: &'a str,
    ) -> DialogueFuture<'a, Result<DialogueLine, DialogueError>> {
        self.send_message(config, text, "user")
    }
}
