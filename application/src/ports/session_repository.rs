//! Session Repository port
//!
//! Persistence of named conversations. Implementations decide where the
//! records live; the application layer only deals in [`SessionName`]s.

use chatsutra_domain::{Conversation, SessionName};
use thiserror::Error;

/// Errors raised by a session repository
#[derive(Error, Debug)]
pub enum SessionStoreError {
    #[error("Saved session not found: {0}")]
    NotFound(SessionName),

    #[error("Saved session {name} is corrupt: {reason}")]
    Corrupt { name: SessionName, reason: String },

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionStoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SessionStoreError::NotFound(_))
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, SessionStoreError::Corrupt { .. })
    }
}

/// Port for persisting conversations under a name.
///
/// Single user, single process: there is no locking and the last writer
/// wins.
pub trait SessionRepository: Send + Sync {
    /// Names of every stored session, reverse lexical order
    fn list(&self) -> Result<Vec<SessionName>, SessionStoreError>;

    /// Store the conversation, silently replacing an existing record
    fn save(&self, name: &SessionName, conversation: &Conversation)
    -> Result<(), SessionStoreError>;

    /// Read a stored conversation back
    fn load(&self, name: &SessionName) -> Result<Conversation, SessionStoreError>;

    /// Remove a stored conversation
    fn delete(&self, name: &SessionName) -> Result<(), SessionStoreError>;
}
