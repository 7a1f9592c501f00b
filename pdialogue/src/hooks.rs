//! Lifecycle hooks around dialogue sends.

use pprovider::{ProviderId, TokenUsage};

use crate::{DialogueError, ReplyOutcome};

/// Observer invoked by every dialogue send. All methods default to no-ops.
pub trait DialogueHooks: Send + Sync {
    fn on_send_start(&self, _provider: ProviderId, _model: &str, _history_len: usize) {}

    fn on_reply(
        &self,
        _provider: ProviderId,
        _model: &str,
        _outcome: ReplyOutcome,
        _usage: &TokenUsage,
    ) {
    }

    fn on_failure(&self, _provider: ProviderId, _model: &str, _error: &DialogueError) {}
}

#[derive(Debug, Default)]
pub struct NoopDialogueHooks;

impl DialogueHooks for NoopDialogueHooks {}
