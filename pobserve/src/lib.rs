//! Production-friendly observability hooks for dialogue sends.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use pdialogue::DialogueHooks;
//! use pobserve::{MetricsDialogueHooks, SafeDialogueHooks, TracingDialogueHooks};
//!
//! let _hooks: Arc<dyn DialogueHooks> = Arc::new(SafeDialogueHooks::new(TracingDialogueHooks));
//! let _metrics = MetricsDialogueHooks;
//! ```

mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use metrics_hooks::MetricsDialogueHooks;
pub use safe_hooks::SafeDialogueHooks;
pub use tracing_hooks::TracingDialogueHooks;

pub mod prelude {
    pub use crate::{MetricsDialogueHooks, SafeDialogueHooks, TracingDialogueHooks};
}
