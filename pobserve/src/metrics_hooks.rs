//! Metrics-based observability hooks for dialogue sends.
//!
//! ```rust
//! use pdialogue::DialogueHooks;
//! use pobserve::MetricsDialogueHooks;
//!
//! fn accepts_dialogue_hooks(_hooks: &dyn DialogueHooks) {}
//!
//! let hooks = MetricsDialogueHooks;
//! accepts_dialogue_hooks(&hooks);
//! ```

use pdialogue::{DialogueError, DialogueHooks, ReplyOutcome};
use pprovider::{ProviderId, TokenUsage};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsDialogueHooks;

impl DialogueHooks for MetricsDialogueHooks {
    fn on_send_start(&self, provider: ProviderId, model: &str, history_len: usize) {
        metrics::counter!(
            "parley_dialogue_send_total",
            "provider" => provider.to_string(),
            "model" => model.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "parley_dialogue_history_turns",
            "provider" => provider.to_string(),
            "model" => model.to_string()
        )
        .record(history_len as f64);
    }

    fn on_reply(
        &self,
        provider: ProviderId,
        model: &str,
        outcome: ReplyOutcome,
        usage: &TokenUsage,
    ) {
        metrics::counter!(
            "parley_dialogue_reply_total",
            "provider" => provider.to_string(),
            "model" => model.to_string(),
            "outcome" => format!("{outcome:?}")
        )
        .increment(1);
        metrics::counter!(
            "parley_dialogue_input_tokens_total",
            "provider" => provider.to_string(),
            "model" => model.to_string()
        )
        .increment(u64::from(usage.input_tokens));
        metrics::counter!(
            "parley_dialogue_output_tokens_total",
            "provider" => provider.to_string(),
            "model" => model.to_string()
        )
        .increment(u64::from(usage.output_tokens));
    }

    fn on_failure(&self, provider: ProviderId, model: &str, error: &DialogueError) {
        let provider_kind = error
            .provider_error()
            .map(|inner| format!("{:?}", inner.kind))
            .unwrap_or_else(|| "none".to_string());

        metrics::counter!(
            "parley_dialogue_failure_total",
            "provider" => provider.to_string(),
            "model" => model.to_string(),
            "error_kind" => format!("{:?}", error.kind),
            "provider_error_kind" => provider_kind
        )
        .increment(1);
    }
}
