//! Tracing-based observability hooks for dialogue sends.
//!
//! ```rust
//! use pdialogue::DialogueHooks;
//! use pobserve::TracingDialogueHooks;
//!
//! fn accepts_dialogue_hooks(_hooks: &dyn DialogueHooks) {}
//!
//! let hooks = TracingDialogueHooks;
//! accepts_dialogue_hooks(&hooks);
//! ```

use pdialogue::{DialogueError, DialogueHooks, ReplyOutcome};
use pprovider::{ProviderId, TokenUsage};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDialogueHooks;

impl DialogueHooks for TracingDialogueHooks {
    fn on_send_start(&self, provider: ProviderId, model: &str, history_len: usize) {
        tracing::info!(
            phase = "dialogue",
            event = "send_start",
            provider = %provider,
            model,
            history_len
        );
    }

    fn on_reply(
        &self,
        provider: ProviderId,
        model: &str,
        outcome: ReplyOutcome,
        usage: &TokenUsage,
    ) {
        tracing::info!(
            phase = "dialogue",
            event = "reply",
            provider = %provider,
            model,
            outcome = ?outcome,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens
        );
    }

    fn on_failure(&self, provider: ProviderId, model: &str, error: &DialogueError) {
        let provider_kind = error.provider_error().map(|inner| inner.kind);
        if error.is_rate_limited() {
            tracing::warn!(
                phase = "dialogue",
                event = "rate_limited",
                provider = %provider,
                model,
                status = ?error.status_code(),
                error = %error
            );
            return;
        }

        tracing::error!(
            phase = "dialogue",
            event = "failure",
            provider = %provider,
            model,
            error_kind = ?error.kind,
            provider_error_kind = ?provider_kind,
            status = ?error.status_code(),
            error = %error
        );
    }
}
