//! JSON file session store.
//!
//! One record per saved conversation, `<dir>/<name>.json`, holding a JSON
//! array of `{"role", "content"}` objects in conversation order. Writes are
//! whole-file; the last writer wins.

use chatsutra_application::ports::session_repository::{SessionRepository, SessionStoreError};
use chatsutra_domain::{Conversation, Message, SessionName, session::name::RECORD_EXTENSION};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default directory for saved conversations, relative to the working directory.
pub const DEFAULT_HISTORY_DIR: &str = "chat_history";

/// Session store backed by a directory of JSON files.
#[derive(Debug, Clone)]
pub struct JsonSessionStore {
    dir: PathBuf,
}

impl JsonSessionStore {
    /// Open the store, creating the directory if it does not exist yet.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, SessionStoreError> {
        let store = Self { dir: dir.into() };
        store.ensure_dir()?;
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn ensure_dir(&self) -> Result<(), SessionStoreError> {
        if !self.dir.is_dir() {
            debug!("Creating session directory {}", self.dir.display());
            fs::create_dir_all(&self.dir)?;
        }
        Ok(())
    }

    fn record_path(&self, name: &SessionName) -> PathBuf {
        self.dir.join(name.file_name())
    }
}

impl SessionRepository for JsonSessionStore {
    fn list(&self) -> Result<Vec<SessionName>, SessionStoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION)
            {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match SessionName::parse(stem) {
                Ok(name) => names.push(name),
                Err(e) => debug!("Skipping {}: {}", path.display(), e),
            }
        }

        names.sort();
        names.reverse();
        Ok(names)
    }

    fn save(
        &self,
        name: &SessionName,
        conversation: &Conversation,
    ) -> Result<(), SessionStoreError> {
        self.ensure_dir()?;
        let path = self.record_path(name);
        let json = serde_json::to_string_pretty(conversation).map_err(|e| {
            SessionStoreError::Io(std::io::Error::new(ErrorKind::InvalidData, e))
        })?;
        fs::write(&path, json)?;
        debug!("Wrote {} messages to {}", conversation.len(), path.display());
        Ok(())
    }

    fn load(&self, name: &SessionName) -> Result<Conversation, SessionStoreError> {
        let path = self.record_path(name);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SessionStoreError::NotFound(name.clone()));
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(SessionStoreError::Corrupt {
                    name: name.clone(),
                    reason: "not valid UTF-8".to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let corrupt = |reason: String| {
            warn!("Saved session {} is corrupt: {}", path.display(), reason);
            SessionStoreError::Corrupt {
                name: name.clone(),
                reason,
            }
        };

        let messages: Vec<Message> =
            serde_json::from_str(&raw).map_err(|e| corrupt(e.to_string()))?;
        Conversation::from_messages(messages).map_err(|e| corrupt(e.to_string()))
    }

    fn delete(&self, name: &SessionName) -> Result<(), SessionStoreError> {
        match fs::remove_file(self.record_path(name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(SessionStoreError::NotFound(name.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
