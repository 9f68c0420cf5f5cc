//! Plain text transcript export.

use super::entities::{Conversation, Role};

/// Speaker label used in exported transcripts
fn speaker(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        _ => "Assistant",
    }
}

/// Render the user/assistant turns as plain text.
///
/// System messages (the opening instruction and injected context) are left
/// out. Each turn is `<Speaker>: <content>` followed by a blank line.
pub fn render_transcript(conversation: &Conversation) -> String {
    conversation
        .visible_messages()
        .map(|m| format!("{}: {}\n", speaker(m.role), m.content))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_skips_system_messages() {
        let mut conversation = Conversation::default();
        conversation.add_system_message("Use this context");
        conversation.add_user_message("What is Rust?");
        conversation.add_assistant_message("A language.");

        assert_eq!(
            render_transcript(&conversation),
            "You: What is Rust?\n\nAssistant: A language.\n"
        );
    }

    #[test]
    fn test_transcript_of_fresh_conversation_is_empty() {
        assert_eq!(render_transcript(&Conversation::default()), "");
    }
}
