//! Dialogue-layer errors and classification.
//!
//! ```rust
//! use pdialogue::{DialogueError, DialogueErrorKind};
//! use pprovider::ProviderError;
//!
//! let err = DialogueError::from(ProviderError::rate_limited("slow down"));
//! assert_eq!(err.kind, DialogueErrorKind::Provider);
//! assert!(err.is_rate_limited());
//! assert_eq!(err.status_code(), Some(429));
//!
//! let err = DialogueError::invalid_role("system");
//! assert!(err.is_local());
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

use pprovider::{ProviderError, ProviderErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueErrorKind {
    /// A turn was submitted with a role other than `user` or `assistant`.
    InvalidRole,
    /// Sampling parameters were rejected while building a configuration.
    Configuration,
    /// The provider replied with zero or several content segments.
    MalformedResponse,
    /// The provider boundary failed; see [`DialogueError::provider_error`].
    Provider,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueError {
    pub kind: DialogueErrorKind,
    pub message: String,
    provider_error: Option<ProviderError>,
}

impl DialogueError {
    pub fn new(kind: DialogueErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            provider_error: None,
        }
    }

    pub fn invalid_role(role: &str) -> Self {
        Self::new(
            DialogueErrorKind::InvalidRole,
            format!("role must be 'user' or 'assistant', got '{role}'"),
        )
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(DialogueErrorKind::Configuration, message)
    }

    pub fn malformed_response(segments: usize) -> Self {
        Self::new(
            DialogueErrorKind::MalformedResponse,
            format!("expected exactly one reply segment, got {segments}"),
        )
    }

    pub fn provider(error: ProviderError) -> Self {
        Self {
            kind: DialogueErrorKind::Provider,
            message: error.to_string(),
            provider_error: Some(error),
        }
    }

    pub fn provider_error(&self) -> Option<&ProviderError> {
        self.provider_error.as_ref()
    }

    pub fn is_rate_limited(&self) -> bool {
        self.provider_kind() == Some(ProviderErrorKind::RateLimited)
    }

    pub fn is_connection_failure(&self) -> bool {
        matches!(
            self.provider_kind(),
            Some(ProviderErrorKind::Connection | ProviderErrorKind::Timeout)
        )
    }

    pub fn status_code(&self) -> Option<u16> {
        self.provider_error.as_ref().and_then(|error| error.status)
    }

    /// True for failures raised before any network call.
    pub fn is_local(&self) -> bool {
        matches!(
            self.kind,
            DialogueErrorKind::InvalidRole | DialogueErrorKind::Configuration
        )
    }

    fn provider_kind(&self) -> Option<ProviderErrorKind> {
        self.provider_error.as_ref().map(|error| error.kind)
    }
}

impl Display for DialogueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for DialogueError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.provider_error
            .as_ref()
            .map(|error| error as &(dyn Error + 'static))
    }
}

impl From<ProviderError> for DialogueError {
    fn from(value: ProviderError) -> Self {
        Self::provider(value)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn provider_status_error_keeps_code_and_body() {
        let err = DialogueError::from(ProviderError::status(503, "overloaded"));

        assert_eq!(err.kind, DialogueErrorKind::Provider);
        assert_eq!(err.status_code(), Some(503));
        assert_eq!(
            err.provider_error().and_then(|inner| inner.body.as_deref()),
            Some("overloaded")
        );
        assert!(!err.is_rate_limited());
        assert!(!err.is_local());
        assert!(err.source().is_some());
    }

    #[test]
    fn connection_and_timeout_both_count_as_connection_failures() {
        assert!(DialogueError::from(ProviderError::connection("refused")).is_connection_failure());
        assert!(DialogueError::from(ProviderError::timeout("deadline")).is_connection_failure());
        assert!(!DialogueError::from(ProviderError::status(500, "")).is_connection_failure());
    }

    #[test]
    fn local_errors_have_no_provider_source() {
        let err = DialogueError::configuration("temperature or top_p is required");
        assert!(err.is_local());
        assert!(err.source().is_none());
        assert_eq!(
            err.to_string(),
            "Configuration: temperature or top_p is required"
        );

        let err = DialogueError::malformed_response(0);
        assert!(!err.is_local());
        assert!(err.message.contains("got 0"));
    }
}
