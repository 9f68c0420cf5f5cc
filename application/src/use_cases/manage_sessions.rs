//! Manage Sessions use case.
//!
//! Save, list, load and delete persisted conversations. Names given by the
//! user are sanitized; missing names are derived from the conversation.

use crate::chat_session::ChatSession;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::session_repository::{SessionRepository, SessionStoreError};
use chatsutra_domain::{Conversation, DomainError, SessionName};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while managing saved sessions
#[derive(Error, Debug)]
pub enum ManageSessionsError {
    #[error(transparent)]
    InvalidName(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] SessionStoreError),
}

impl ManageSessionsError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ManageSessionsError::Store(e) if e.is_not_found())
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, ManageSessionsError::Store(e) if e.is_corrupt())
    }
}

/// Use case for persisted conversations.
#[derive(Clone)]
pub struct ManageSessionsUseCase {
    repository: Arc<dyn SessionRepository>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ManageSessionsUseCase {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self {
            repository,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Names of stored sessions, most recent timestamp names first
    pub fn list(&self) -> Result<Vec<SessionName>, ManageSessionsError> {
        Ok(self.repository.list()?)
    }

    /// Save the conversation and return the name it was stored under.
    ///
    /// An existing record with the same name is replaced.
    pub fn save(
        &self,
        conversation: &Conversation,
        name: Option<&str>,
    ) -> Result<SessionName, ManageSessionsError> {
        let name = match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(raw) => SessionName::parse(raw)?,
            None => SessionName::derive(conversation, chrono::Local::now().naive_local()),
        };

        self.repository.save(&name, conversation)?;
        info!("Saved conversation ({} messages) as {}", conversation.len(), name);
        self.conversation_logger.log(ConversationEvent::new(
            "session_saved",
            serde_json::json!({
                "name": name.as_str(),
                "messages": conversation.len(),
            }),
        ));
        Ok(name)
    }

    /// Read a stored conversation
    pub fn load(&self, name: &str) -> Result<Conversation, ManageSessionsError> {
        let name = SessionName::parse(name)?;
        let conversation = self.repository.load(&name)?;
        info!("Loaded conversation {} ({} messages)", name, conversation.len());
        self.conversation_logger.log(ConversationEvent::new(
            "session_loaded",
            serde_json::json!({
                "name": name.as_str(),
                "messages": conversation.len(),
            }),
        ));
        Ok(conversation)
    }

    /// Replace the live conversation of `session` with a stored one
    pub fn load_into(
        &self,
        session: &mut ChatSession,
        name: &str,
    ) -> Result<usize, ManageSessionsError> {
        let conversation = self.load(name)?;
        let count = conversation.len();
        session.replace_conversation(conversation);
        Ok(count)
    }

    /// Remove a stored conversation
    pub fn delete(&self, name: &str) -> Result<SessionName, ManageSessionsError> {
        let name = SessionName::parse(name)?;
        self.repository.delete(&name)?;
        info!("Deleted saved conversation {}", name);
        self.conversation_logger.log(ConversationEvent::new(
            "session_deleted",
            serde_json::json!({ "name": name.as_str() }),
        ));
        Ok(name)
    }
}
