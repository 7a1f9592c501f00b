/// Creates a single [`DialogueLine`](crate::DialogueLine) from a role shorthand.
///
/// ```rust
/// use parley::{Role, parley_line};
///
/// let line = parley_line!(assistant => "Done.");
/// assert_eq!(line.role(), Role::Assistant);
/// assert_eq!(line.content(), "Done.");
/// ```
#[macro_export]
macro_rules! parley_line {
    (user => $content:expr $(,)?) => {
        $crate::DialogueLine::new($crate::Role::User, $content)
    };
    (assistant => $content:expr $(,)?) => {
        $crate::DialogueLine::new($crate::Role::Assistant, $content)
    };
    ($role:ident => $content:expr $(,)?) => {
        compile_error!("unsupported role: use user or assistant");
    };
}

/// Creates a [`DialogueSession`](crate::DialogueSession) seeded with role/content pairs.
///
/// ```rust
/// use parley::{Role, parley_lines};
///
/// let session = parley_lines![
///     user => "Summarize this repository.",
///     assistant => "It is a dialogue harness.",
/// ];
///
/// assert_eq!(session.len(), 2);
/// assert_eq!(session.last().map(|line| line.role()), Some(Role::Assistant));
/// ```
#[macro_export]
macro_rules! parley_lines {
    () => {
        $crate::DialogueSession::new()
    };
    ($($role:ident => $content:expr),+ $(,)?) => {
        [$($crate::parley_line!($role => $content)),+]
            .into_iter()
            .collect::<$crate::DialogueSession>()
    };
}
