//! Attach Context use case.
//!
//! Extracts text from a document, caps it, and appends it to the session's
//! conversation as a system message. Unknown document kinds degrade to a
//! placeholder instead of failing.

use crate::chat_session::ChatSession;
use crate::ports::context_extractor::{ContextError, ContextExtractorPort};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use chatsutra_domain::ContextExcerpt;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for injecting file-derived context.
#[derive(Clone)]
pub struct AttachContextUseCase {
    extractor: Arc<dyn ContextExtractorPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AttachContextUseCase {
    pub fn new(extractor: Arc<dyn ContextExtractorPort>) -> Self {
        Self {
            extractor,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Extract a capped excerpt without touching any conversation
    pub fn extract(&self, path: &Path) -> Result<ContextExcerpt, ContextError> {
        let source = path.display().to_string();
        match self.extractor.extract(path) {
            Ok(text) => Ok(ContextExcerpt::new(source, &text)),
            Err(ContextError::Unsupported(_)) => {
                warn!("Unsupported context file {}, using placeholder", source);
                Ok(ContextExcerpt::unsupported(source))
            }
            Err(e) => Err(e),
        }
    }

    /// Extract an excerpt and append it to the session's conversation
    pub fn execute(
        &self,
        session: &mut ChatSession,
        path: &Path,
    ) -> Result<ContextExcerpt, ContextError> {
        let excerpt = self.extract(path)?;
        session.attach_context(&excerpt);

        info!(
            "Attached {} characters of context from {}{}",
            excerpt.char_count(),
            excerpt.source(),
            if excerpt.is_truncated() { " (truncated)" } else { "" }
        );
        self.conversation_logger.log(ConversationEvent::new(
            "context_attached",
            serde_json::json!({
                "source": excerpt.source(),
                "chars": excerpt.char_count(),
                "truncated": excerpt.is_truncated(),
            }),
        ));
        Ok(excerpt)
    }
}
