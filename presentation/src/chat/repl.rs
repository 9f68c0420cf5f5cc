//! REPL (Read-Eval-Print Loop) for interactive chat

use super::command::{HELP_TEXT, ReplCommand};
use crate::ConsoleFormatter;
use crate::config::ReplConfig;
use crate::output::console::UNAVAILABLE_NOTICE;
use crate::output::export::export_transcript;
use crate::progress::reporter::{CompletionReporter, SimpleProgress};
use chatsutra_application::{
    AttachContextUseCase, ChatSession, CompleteConversationUseCase, ManageSessionsUseCase,
    SendMessageError, TurnOutcome,
};
use chatsutra_domain::ChatModel;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::Path;
use tracing::debug;

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Continue,
    Exit,
}

/// Interactive chat REPL
pub struct ChatRepl {
    session: ChatSession,
    completion: CompleteConversationUseCase,
    sessions: ManageSessionsUseCase,
    context: AttachContextUseCase,
    config: ReplConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl around a live session
    pub fn new(
        session: ChatSession,
        completion: CompleteConversationUseCase,
        sessions: ManageSessionsUseCase,
        context: AttachContextUseCase,
    ) -> Self {
        Self {
            session,
            completion,
            sessions,
            context,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_file.clone();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(&self.prompt());

            match readline {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        let action = match ReplCommand::parse(line) {
                            Ok(command) => self.handle_command(command),
                            Err(message) => {
                                println!("{}", message);
                                CommandAction::Continue
                            }
                        };
                        if action == CommandAction::Exit {
                            break;
                        }
                        continue;
                    }

                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn prompt(&self) -> String {
        if self.session.is_chat_enabled() {
            format!("{} >>> ", self.session.model())
        } else {
            "(ended) >>> ".to_string()
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│               ChatSutra - Chat              │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.session.model());
        let messages = self.session.conversation().visible_messages().count();
        if messages > 0 {
            println!("Resumed conversation with {} messages", messages);
        }
        println!();
        println!("Type a message, or /help for commands.");
        println!();
    }

    /// Apply a slash command to the session.
    pub fn handle_command(&mut self, command: ReplCommand) -> CommandAction {
        debug!("REPL command: {:?}", command);
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return CommandAction::Exit;
            }
            ReplCommand::Help => {
                println!();
                println!("{}", HELP_TEXT);
                println!();
            }
            ReplCommand::New => {
                self.session.reset();
                println!("{}", ConsoleFormatter::success("Started a new conversation."));
            }
            ReplCommand::End => {
                self.session.end_chat();
                println!("{}", ConsoleFormatter::info("Chat ended."));
            }
            ReplCommand::Resume => {
                self.session.resume_chat();
                println!("{}", ConsoleFormatter::success("Chat resumed."));
            }
            ReplCommand::Model(None) => {
                println!("Current model: {}", self.session.model());
            }
            ReplCommand::Model(Some(name)) => match name.parse::<ChatModel>() {
                Ok(model) => {
                    self.session.set_model(model);
                    println!(
                        "{}",
                        ConsoleFormatter::success(&format!("Model set to {}", model))
                    );
                }
                Err(e) => {
                    println!("{}", ConsoleFormatter::error(&e.to_string()));
                    print!("{}", ConsoleFormatter::format_models(self.session.model()));
                }
            },
            ReplCommand::Models => {
                print!("{}", ConsoleFormatter::format_models(self.session.model()));
            }
            ReplCommand::Context(path) => self.attach_context(&path),
            ReplCommand::Save(name) => {
                match self
                    .sessions
                    .save(self.session.conversation(), name.as_deref())
                {
                    Ok(saved) => println!(
                        "{}",
                        ConsoleFormatter::success(&format!("Saved as {}", saved))
                    ),
                    Err(e) => println!("{}", ConsoleFormatter::error(&e.to_string())),
                }
            }
            ReplCommand::List => match self.sessions.list() {
                Ok(names) => print!("{}", ConsoleFormatter::format_session_list(&names)),
                Err(e) => println!("{}", ConsoleFormatter::error(&e.to_string())),
            },
            ReplCommand::Load(name) => match self.sessions.load_into(&mut self.session, &name) {
                Ok(count) => {
                    println!(
                        "{}",
                        ConsoleFormatter::success(&format!(
                            "Loaded {} ({} messages)",
                            name, count
                        ))
                    );
                    print!(
                        "{}",
                        ConsoleFormatter::format_transcript(self.session.conversation())
                    );
                }
                Err(e) => println!("{}", ConsoleFormatter::error(&e.to_string())),
            },
            ReplCommand::Delete(name) => match self.sessions.delete(&name) {
                Ok(deleted) => println!(
                    "{}",
                    ConsoleFormatter::success(&format!("Deleted chat {}", deleted))
                ),
                Err(e) => println!("{}", ConsoleFormatter::error(&e.to_string())),
            },
            ReplCommand::Export(path) => {
                match export_transcript(self.session.conversation(), path.as_deref()) {
                    Ok(written) => println!(
                        "{}",
                        ConsoleFormatter::success(&format!(
                            "Transcript written to {}",
                            written.display()
                        ))
                    ),
                    Err(e) => println!(
                        "{}",
                        ConsoleFormatter::error(&format!("Export failed: {}", e))
                    ),
                }
            }
            ReplCommand::History => {
                print!(
                    "{}",
                    ConsoleFormatter::format_transcript(self.session.conversation())
                );
            }
        }
        CommandAction::Continue
    }

    fn attach_context(&mut self, path: &Path) {
        match self.context.execute(&mut self.session, path) {
            Ok(excerpt) => {
                let mut message = "Context from file added.".to_string();
                if excerpt.is_truncated() {
                    message.push_str(&format!(
                        " (first {} characters)",
                        excerpt.char_count()
                    ));
                }
                println!("{}", ConsoleFormatter::success(&message));
            }
            Err(e) => println!("{}", ConsoleFormatter::error(&e.to_string())),
        }
    }

    /// Send one user message and print the reply.
    pub async fn process_message(&mut self, text: &str) {
        let result = if self.config.show_progress {
            let progress = CompletionReporter::new();
            self.completion.send(&mut self.session, text, &progress).await
        } else {
            self.completion
                .send(&mut self.session, text, &SimpleProgress)
                .await
        };

        match result {
            Ok(TurnOutcome::Answered(reply)) => {
                println!();
                println!("{}", ConsoleFormatter::format_reply(&reply));
            }
            Ok(TurnOutcome::Unavailable) => {
                eprintln!("{}", ConsoleFormatter::error(UNAVAILABLE_NOTICE));
            }
            Err(SendMessageError::EmptyMessage) => {}
            Err(e @ SendMessageError::ChatEnded) => {
                println!("{}", ConsoleFormatter::info(&e.to_string()));
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::error(&format!("Error: {}", e)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chatsutra_application::{
        CompletionGateway, ContextError, ContextExtractorPort, GatewayError, RetryPolicy,
        SessionRepository, SessionStoreError,
    };
    use chatsutra_domain::{Conversation, Message, Role, SessionName};
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    struct EchoGateway;

    #[async_trait]
    impl CompletionGateway for EchoGateway {
        async fn complete(
            &self,
            model: ChatModel,
            messages: &[Message],
        ) -> Result<String, GatewayError> {
            let last = messages.last().map(|m| m.content.as_str()).unwrap_or("");
            Ok(format!("[{}] {}", model, last))
        }
    }

    struct DownGateway;

    #[async_trait]
    impl CompletionGateway for DownGateway {
        async fn complete(&self, _: ChatModel, _: &[Message]) -> Result<String, GatewayError> {
            Err(GatewayError::ServiceUnavailable("503".to_string()))
        }
    }

    #[derive(Default)]
    struct MemoryRepository {
        records: Mutex<BTreeMap<SessionName, Conversation>>,
    }

    impl SessionRepository for MemoryRepository {
        fn list(&self) -> Result<Vec<SessionName>, SessionStoreError> {
            Ok(self.records.lock().unwrap().keys().rev().cloned().collect())
        }

        fn save(&self, name: &SessionName, c: &Conversation) -> Result<(), SessionStoreError> {
            self.records.lock().unwrap().insert(name.clone(), c.clone());
            Ok(())
        }

        fn load(&self, name: &SessionName) -> Result<Conversation, SessionStoreError> {
            self.records
                .lock()
                .unwrap()
                .get(name)
                .cloned()
                .ok_or_else(|| SessionStoreError::NotFound(name.clone()))
        }

        fn delete(&self, name: &SessionName) -> Result<(), SessionStoreError> {
            self.records
                .lock()
                .unwrap()
                .remove(name)
                .map(|_| ())
                .ok_or_else(|| SessionStoreError::NotFound(name.clone()))
        }
    }

    struct FixedExtractor;

    impl ContextExtractorPort for FixedExtractor {
        fn extract(&self, path: &Path) -> Result<String, ContextError> {
            Ok(format!("contents of {}", path.display()))
        }
    }

    fn repl_with(gateway: Arc<dyn CompletionGateway>) -> (ChatRepl, Arc<MemoryRepository>) {
        let repository = Arc::new(MemoryRepository::default());
        let completion = CompleteConversationUseCase::new(gateway)
            .with_policy(RetryPolicy::new(2, Duration::ZERO));
        let repl = ChatRepl::new(
            ChatSession::default(),
            completion,
            ManageSessionsUseCase::new(repository.clone()),
            AttachContextUseCase::new(Arc::new(FixedExtractor)),
        )
        .with_config(ReplConfig {
            show_progress: false,
            history_file: None,
        });
        (repl, repository)
    }

    #[tokio::test]
    async fn test_message_gets_reply() {
        let (mut repl, _) = repl_with(Arc::new(EchoGateway));

        repl.process_message("Hello").await;

        let messages = repl.session().conversation().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].role, Role::Assistant);
        assert_eq!(messages[2].content, "[llama3-8b-8192] Hello");
    }

    #[tokio::test]
    async fn test_ended_chat_refuses_messages() {
        let (mut repl, _) = repl_with(Arc::new(EchoGateway));

        repl.handle_command(ReplCommand::End);
        repl.process_message("Hello").await;
        assert_eq!(repl.session().conversation().len(), 1);

        repl.handle_command(ReplCommand::Resume);
        repl.process_message("Hello").await;
        assert_eq!(repl.session().conversation().len(), 3);
    }

    #[tokio::test]
    async fn test_unavailable_keeps_user_message_only() {
        let (mut repl, _) = repl_with(Arc::new(DownGateway));

        repl.process_message("Anyone there?").await;

        let messages = repl.session().conversation().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, Role::User);
    }

    #[tokio::test]
    async fn test_model_switch_applies_to_next_message() {
        let (mut repl, _) = repl_with(Arc::new(EchoGateway));

        repl.handle_command(ReplCommand::Model(Some("llama3-70b-8192".to_string())));
        repl.handle_command(ReplCommand::Model(Some("not-a-model".to_string())));
        repl.process_message("Hi").await;

        assert_eq!(repl.session().model(), ChatModel::Llama3_70b);
        let last = repl.session().conversation().messages().last().unwrap();
        assert_eq!(last.content, "[llama3-70b-8192] Hi");
    }

    #[tokio::test]
    async fn test_save_new_load_round_trip() {
        let (mut repl, repository) = repl_with(Arc::new(EchoGateway));
        repl.process_message("What/is:Rust?").await;

        repl.handle_command(ReplCommand::Save(None));
        let names = repository.list().unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].as_str(), "What_is_Rust_");

        repl.handle_command(ReplCommand::New);
        assert_eq!(repl.session().conversation().len(), 1);

        repl.handle_command(ReplCommand::Load("What_is_Rust_".to_string()));
        assert_eq!(repl.session().conversation().len(), 3);

        repl.handle_command(ReplCommand::Delete("What_is_Rust_".to_string()));
        assert!(repository.list().unwrap().is_empty());
    }

    #[test]
    fn test_context_command_appends_system_message() {
        let (mut repl, _) = repl_with(Arc::new(EchoGateway));

        repl.handle_command(ReplCommand::Context("notes.txt".into()));

        let last = repl.session().conversation().messages().last().unwrap();
        assert_eq!(last.role, Role::System);
        assert_eq!(
            last.content,
            "Use this context for all future responses:\n\ncontents of notes.txt"
        );
    }

    #[test]
    fn test_load_missing_leaves_conversation() {
        let (mut repl, _) = repl_with(Arc::new(EchoGateway));

        let action = repl.handle_command(ReplCommand::Load("nope".to_string()));

        assert_eq!(action, CommandAction::Continue);
        assert_eq!(repl.session().conversation().len(), 1);
    }

    #[test]
    fn test_quit_exits() {
        let (mut repl, _) = repl_with(Arc::new(EchoGateway));
        assert_eq!(repl.handle_command(ReplCommand::Quit), CommandAction::Exit);
    }
}
