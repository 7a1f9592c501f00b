//! Ordered dialogue history.
//!
//! ```rust
//! use pdialogue::DialogueSession;
//!
//! let mut session = DialogueSession::new();
//! session.append("Hi", "user").expect("user is a valid role");
//! assert!(session.append("Hi", "system").is_err());
//! assert_eq!(session.len(), 1);
//! ```

use pprovider::{Message, Role};

use crate::{DialogueError, DialogueLine};

/// Transcript owned by a single dialogue. Insertion order is conversation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogueSession {
    history: Vec<DialogueLine>,
}

impl DialogueSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn after checking `role`. An unknown role leaves the session untouched.
    pub fn append(
        &mut self,
        content: impl Into<String>,
        role: &str,
    ) -> Result<&DialogueLine, DialogueError> {
        let role = Role::parse(role).ok_or_else(|| DialogueError::invalid_role(role))?;
        Ok(self.append_line(DialogueLine::new(role, content)))
    }

    pub fn append_line(&mut self, line: DialogueLine) -> &DialogueLine {
        self.history.push(line);
        match self.history.last() {
            Some(appended) => appended,
            None => unreachable!("history is non-empty after push"),
        }
    }

    pub fn lines(&self) -> &[DialogueLine] {
        &self.history
    }

    pub fn last(&self) -> Option<&DialogueLine> {
        self.history.last()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Removes the newest turn, e.g. to prune a caller turn before retrying.
    pub fn pop(&mut self) -> Option<DialogueLine> {
        self.history.pop()
    }

    pub fn transcript(&self) -> Vec<Message> {
        self.history.iter().map(DialogueLine::to_message).collect()
    }

    pub(crate) fn extend_last(&mut self, text: &str) -> Option<&DialogueLine> {
        let last = self.history.last_mut()?;
        last.extend(text);
        Some(last)
    }
}

impl FromIterator<DialogueLine> for DialogueSession {
    fn from_iter<T: IntoIterator<Item = DialogueLine>>(iter: T) -> Self {
        Self {
            history: iter.into_iter().collect(),
        }
    }
}
