use std::panic::{AssertUnwindSafe, catch_unwind};

use pdialogue::{DialogueError, DialogueHooks, ReplyOutcome};
use pprovider::{ProviderId, TokenUsage};

/// Wraps hooks so a panicking observer never aborts a send.
pub struct SafeDialogueHooks<H> {
    inner: H,
}

impl<H> SafeDialogueHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H> DialogueHooks for SafeDialogueHooks<H>
where
    H: DialogueHooks,
{
    fn on_send_start(&self, provider: ProviderId, model: &str, history_len: usize) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_send_start(provider, model, history_len)
        }));
    }

    fn on_reply(
        &self,
        provider: ProviderId,
        model: &str,
        outcome: ReplyOutcome,
        usage: &TokenUsage,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_reply(provider, model, outcome, usage)
        }));
    }

    fn on_failure(&self, provider: ProviderId, model: &str, error: &DialogueError) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_failure(provider, model, error)
        }));
    }
}
