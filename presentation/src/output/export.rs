//! Plain-text transcript export

use chatsutra_domain::{Conversation, render_transcript};
use chrono::NaiveDateTime;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name used when no export path is given
pub fn default_export_file_name(now: NaiveDateTime) -> String {
    format!("groq_chat_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

/// Write the transcript of `conversation` and return the path written.
///
/// Without a path the file goes to the working directory under
/// [`default_export_file_name`].
pub fn export_transcript(conversation: &Conversation, path: Option<&Path>) -> io::Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_export_file_name(chrono::Local::now().naive_local())),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, render_transcript(conversation))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_default_file_name() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 1)
            .unwrap();
        assert_eq!(default_export_file_name(now), "groq_chat_20240309_070501.txt");
    }

    #[test]
    fn test_export_writes_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("chat.txt");
        let mut conversation = Conversation::default();
        conversation.add_user_message("Hi");
        conversation.add_assistant_message("Hello");

        let written = export_transcript(&conversation, Some(&path)).unwrap();

        assert_eq!(written, path);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "You: Hi\n\nAssistant: Hello\n"
        );
    }
}
