//! Shared provider error kinds and error value helpers.
//!
//! ```rust
//! use pprovider::{ProviderError, ProviderErrorKind};
//!
//! let limited = ProviderError::rate_limited("{\"error\":\"slow down\"}");
//! assert_eq!(limited.kind, ProviderErrorKind::RateLimited);
//! assert_eq!(limited.status, Some(429));
//!
//! let status = ProviderError::status(500, "internal error");
//! assert!(status.retryable);
//! assert_eq!(status.body.as_deref(), Some("internal error"));
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// The provider could not be reached.
    Connection,
    /// The provider answered with HTTP 429.
    RateLimited,
    /// Any other non-success HTTP status.
    Status,
    /// The transport deadline elapsed.
    Timeout,
    Authentication,
    InvalidRequest,
    /// The provider answered but the body could not be understood.
    Decode,
}

/// Failure surfaced from the provider boundary.
///
/// `status` and `body` are populated for `RateLimited` and `Status` so callers can
/// build their own backoff policy. `retryable` is advisory; nothing in this workspace
/// retries on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
    pub status: Option<u16>,
    pub body: Option<String>,
    pub retryable: bool,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            body: None,
            retryable,
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Connection, message, true)
    }

    pub fn rate_limited(body: impl Into<String>) -> Self {
        let mut error = Self::new(
            ProviderErrorKind::RateLimited,
            "provider returned status 429; back off before retrying",
            true,
        );
        error.status = Some(429);
        error.body = Some(body.into());
        error
    }

    pub fn status(code: u16, body: impl Into<String>) -> Self {
        let mut error = Self::new(
            ProviderErrorKind::Status,
            format!("provider returned status {code}"),
            code >= 500,
        );
        error.status = Some(code);
        error.body = Some(body.into());
        error
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Timeout, message, true)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Authentication, message, false)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::InvalidRequest, message, false)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Decode, message, false)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(code) => write!(f, "{:?} ({code}): {}", self.kind, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for ProviderError {}
