//! Folding a provider reply into the session.

use pprovider::{ModelResponse, Role};

use crate::{DialogueError, DialogueLine, DialogueSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// The reply became a new line.
    Appended,
    /// The reply was concatenated onto the caller's assistant turn.
    Merged,
}

/// Folds a single-segment reply into `session`.
///
/// When the caller's turn and the reply are both `assistant`, the reply continues
/// the caller's line; otherwise it is appended. Returns the resulting last line.
pub(crate) fn fold_reply(
    session: &mut DialogueSession,
    caller_role: Role,
    response: ModelResponse,
) -> Result<(DialogueLine, ReplyOutcome), DialogueError> {
    let ModelResponse { role, content, .. } = response;
    let [text]: [String; 1] = content
        .try_into()
        .map_err(|segments: Vec<String>| DialogueError::malformed_response(segments.len()))?;

    if caller_role == Role::Assistant && role == Role::Assistant {
        if let Some(line) = session.extend_last(&text) {
            return Ok((line.clone(), ReplyOutcome::Merged));
        }
    }

    let line = session.append_line(DialogueLine::new(role, text));
    Ok((line.clone(), ReplyOutcome::Appended))
}
