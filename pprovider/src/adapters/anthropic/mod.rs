//! Native Anthropic Messages API adapter.

mod auth;
mod provider;
mod serde_api;
mod tests;
mod transport;
mod types;

pub use provider::AnthropicProvider;
pub use transport::{AnthropicHttpTransport, AnthropicTransport};
pub use types::{
    AnthropicMessage, AnthropicRequest, AnthropicResponse, AnthropicStopReason, AnthropicUsage,
};

pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com/v1";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

pub const CLAUDE_3_OPUS: &str = "claude-3-opus-20240229";
pub const CLAUDE_3_SONNET: &str = "claude-3-sonnet-20240229";
pub const CLAUDE_3_HAIKU: &str = "claude-3-haiku-20240307";
