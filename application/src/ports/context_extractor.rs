//! Context extractor port
//!
//! Turns an uploaded document into plain text. Capping the text is not the
//! extractor's job; see [`ContextExcerpt`](chatsutra_domain::ContextExcerpt).

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while extracting document text
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Unsupported file type: {}", .0.display())]
    Unsupported(PathBuf),

    #[error("Failed to read {}: {message}", path.display())]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Port for extracting text from documents
pub trait ContextExtractorPort: Send + Sync {
    /// Extract the full text of the document at `path`.
    ///
    /// Returns [`ContextError::Unsupported`] for kinds it does not know.
    fn extract(&self, path: &Path) -> Result<String, ContextError>;
}
