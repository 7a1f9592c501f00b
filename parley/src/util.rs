//! Small convenience constructors for common types.

use crate::{DialogueLine, ProviderId, Role};

pub fn user_line(content: impl Into<String>) -> DialogueLine {
    DialogueLine::new(Role::User, content)
}

pub fn assistant_line(content: impl Into<String>) -> DialogueLine {
    DialogueLine::new(Role::Assistant, content)
}

pub fn parse_provider_id(value: &str) -> Option<ProviderId> {
    match value.trim().to_ascii_lowercase().as_str() {
        "claude" | "anthropic" => Some(ProviderId::Anthropic),
        "ollama" | "local" => Some(ProviderId::Ollama),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::{ProviderId, Role};

    use super::{assistant_line, parse_provider_id, user_line};

    #[test]
    fn parse_provider_id_supports_aliases() {
        assert_eq!(parse_provider_id("anthropic"), Some(ProviderId::Anthropic));
        assert_eq!(parse_provider_id(" Claude "), Some(ProviderId::Anthropic));
        assert_eq!(parse_provider_id("local"), Some(ProviderId::Ollama));
        assert_eq!(parse_provider_id("openai"), None);
    }

    #[test]
    fn line_helpers_apply_expected_roles() {
        assert_eq!(user_line("hi").role(), Role::User);
        assert_eq!(assistant_line("hello").role(), Role::Assistant);
    }
}
