//! Single role-tagged dialogue turns.

use std::fmt::{Display, Formatter};

use pprovider::{Message, Role};

/// One turn of a dialogue. Immutable to callers once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueLine {
    role: Role,
    content: String,
}

impl DialogueLine {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn to_message(&self) -> Message {
        Message::new(self.role, self.content.clone())
    }

    pub(crate) fn extend(&mut self, text: &str) {
        self.content.push_str(text);
    }
}

impl Display for DialogueLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<<{}>>:\n{}", self.role, self.content)
    }
}

impl From<DialogueLine> for Message {
    fn from(value: DialogueLine) -> Self {
        Message::new(value.role, value.content)
    }
}
