//! Console output formatter for chat sessions

use chatsutra_domain::{ChatModel, ConfigIssue, Conversation, Role, SessionName, Severity};
use colored::Colorize;

/// Shown when every attempt hit an unavailable service
pub const UNAVAILABLE_NOTICE: &str = "Groq API is currently unavailable. Please try again later.";

/// Formats chat output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an assistant reply
    pub fn format_reply(text: &str) -> String {
        format!("{}\n{}\n", "Assistant:".green().bold(), text.trim_end())
    }

    /// Format the user/assistant part of a conversation
    pub fn format_transcript(conversation: &Conversation) -> String {
        let mut output = String::new();
        for message in conversation.visible_messages() {
            let label = match message.role {
                Role::User => "You:".cyan().bold(),
                _ => "Assistant:".green().bold(),
            };
            output.push_str(&format!("{}\n{}\n\n", label, message.content.trim_end()));
        }
        if output.is_empty() {
            output.push_str(&format!("{}\n", "No messages yet.".dimmed()));
        }
        output
    }

    /// Format the list of saved sessions
    pub fn format_session_list(names: &[SessionName]) -> String {
        if names.is_empty() {
            return format!("{}\n", "No saved chats found.".dimmed());
        }
        let mut output = format!("{}\n", "Saved chats:".cyan().bold());
        for name in names {
            output.push_str(&format!("  - {}\n", name));
        }
        output
    }

    /// Format the model allow-list, marking the active one
    pub fn format_models(current: ChatModel) -> String {
        let mut output = format!("{}\n", "Available models:".cyan().bold());
        for model in ChatModel::ALL {
            if model == current {
                output.push_str(&format!("  * {} {}\n", model.as_str().bold(), "(current)".dimmed()));
            } else {
                output.push_str(&format!("    {}\n", model));
            }
        }
        output
    }

    /// Format a configuration issue as a one-line diagnostic
    pub fn format_issue(issue: &ConfigIssue) -> String {
        match issue.severity {
            Severity::Error => format!("{} {}", "error:".red().bold(), issue.message),
            Severity::Warning => format!("{} {}", "warning:".yellow().bold(), issue.message),
        }
    }

    pub fn success(message: &str) -> String {
        format!("{} {}", "v".green(), message)
    }

    pub fn info(message: &str) -> String {
        format!("{} {}", "->".cyan(), message)
    }

    pub fn error(message: &str) -> String {
        format!("{} {}", "x".red(), message.red())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatsutra_domain::ConfigIssueCode;

    #[test]
    fn test_transcript_skips_system_messages() {
        colored::control::set_override(false);
        let mut conversation = Conversation::default();
        conversation.add_system_message("Use this context for all future responses:\n\nx");
        conversation.add_user_message("Hi");
        conversation.add_assistant_message("Hello!\n");

        let output = ConsoleFormatter::format_transcript(&conversation);
        assert_eq!(output, "You:\nHi\n\nAssistant:\nHello!\n\n");
    }

    #[test]
    fn test_empty_transcript_has_placeholder() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_transcript(&Conversation::default());
        assert_eq!(output, "No messages yet.\n");
    }

    #[test]
    fn test_session_list() {
        colored::control::set_override(false);
        assert_eq!(
            ConsoleFormatter::format_session_list(&[]),
            "No saved chats found.\n"
        );

        let names = vec![
            SessionName::parse("b").unwrap(),
            SessionName::parse("a").unwrap(),
        ];
        assert_eq!(
            ConsoleFormatter::format_session_list(&names),
            "Saved chats:\n  - b\n  - a\n"
        );
    }

    #[test]
    fn test_models_marks_current() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_models(ChatModel::Llama3_70b);
        assert!(output.contains("  * llama3-70b-8192 (current)\n"));
        assert!(output.contains("    llama3-8b-8192\n"));
        assert!(output.contains("    deepseek-r1-distill-llama-70b\n"));
    }

    #[test]
    fn test_format_issue_prefix() {
        colored::control::set_override(false);
        let issue = ConfigIssue::warning(ConfigIssueCode::ZeroRetries, "retry.max_retries is 0");
        assert_eq!(
            ConsoleFormatter::format_issue(&issue),
            "warning: retry.max_retries is 0"
        );
    }
}
