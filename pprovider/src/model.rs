//! Provider-agnostic request, response, and message model types.
//!
//! ```rust
//! use pprovider::{Message, ModelRequest, ProviderErrorKind, Role};
//!
//! let ok = ModelRequest::new("claude-3-haiku-20240307", vec![Message::new(Role::User, "hi")]);
//! assert!(ok.validate().is_ok());
//!
//! let err = ModelRequest::new("", vec![Message::new(Role::User, "hi")])
//!     .validate()
//!     .err()
//!     .expect("empty model should fail");
//! assert_eq!(err.kind, ProviderErrorKind::InvalidRequest);
//! ```

use std::fmt::{Display, Formatter};

use pcommon::ParameterMap;

use crate::ProviderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Anthropic,
    Ollama,
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            Self::Anthropic => "anthropic",
            Self::Ollama => "ollama",
        };

        f.write_str(id)
    }
}

/// Speaker tag of a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }

    /// Accepts exactly `"user"` or `"assistant"`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Self::User),
            "assistant" => Some(Self::Assistant),
            _ => None,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    StopSequence,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// A single reply from a provider.
///
/// `content` holds the text segments of the reply in provider order. Callers that
/// expect one answer should check the segment count themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelResponse {
    pub provider: ProviderId,
    pub model: String,
    pub role: Role,
    pub content: Vec<String>,
    pub stop_reason: StopReason,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub system: Option<String>,
    pub parameters: ParameterMap,
}

impl ModelRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            system: None,
            parameters: ParameterMap::new(),
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_parameters(mut self, parameters: ParameterMap) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.model.trim().is_empty() {
            return Err(ProviderError::invalid_request("model must not be empty"));
        }

        if self.messages.is_empty() {
            return Err(ProviderError::invalid_request(
                "at least one message is required",
            ));
        }

        Ok(())
    }
}

/// Default generation parameters a model host reports for a model.
///
/// Parsed from the newline separated `key value` blob a model file carries. Keys may
/// repeat (several `stop` entries are common), so entries keep their source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelDefaults {
    entries: Vec<(String, String)>,
}

impl ModelDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(raw: &str) -> Self {
        let entries = raw
            .lines()
            .filter_map(|line| {
                let line = line.trim();
                let (key, value) = line.split_once(char::is_whitespace)?;
                let value = value.trim();
                if value.is_empty() {
                    return None;
                }

                Some((key.to_string(), unquote(value).to_string()))
            })
            .collect();

        Self { entries }
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// First value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}
