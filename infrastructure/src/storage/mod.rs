//! Local persistence of saved conversations.

mod json_store;

pub use json_store::{DEFAULT_HISTORY_DIR, JsonSessionStore};
