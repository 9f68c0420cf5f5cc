//! The live chat session.
//!
//! [`ChatSession`] owns the conversation and the front-end flags for the
//! whole lifetime of a REPL (or one-shot) run. It is passed explicitly to the
//! use cases that need it.

use chatsutra_domain::{ChatModel, ContextExcerpt, Conversation, DEFAULT_SYSTEM_PROMPT};

#[derive(Debug, Clone)]
pub struct ChatSession {
    conversation: Conversation,
    model: ChatModel,
    system_prompt: String,
    chat_enabled: bool,
}

impl ChatSession {
    pub fn new(model: ChatModel, system_prompt: impl Into<String>) -> Self {
        let system_prompt = system_prompt.into();
        Self {
            conversation: Conversation::new(system_prompt.clone()),
            model,
            system_prompt,
            chat_enabled: true,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub(crate) fn conversation_mut(&mut self) -> &mut Conversation {
        &mut self.conversation
    }

    pub fn model(&self) -> ChatModel {
        self.model
    }

    pub fn set_model(&mut self, model: ChatModel) {
        self.model = model;
    }

    pub fn is_chat_enabled(&self) -> bool {
        self.chat_enabled
    }

    /// Stop accepting new user turns
    pub fn end_chat(&mut self) {
        self.chat_enabled = false;
    }

    /// Accept new user turns again
    pub fn resume_chat(&mut self) {
        self.chat_enabled = true;
    }

    /// Start a new conversation holding only the system instruction
    pub fn reset(&mut self) {
        self.conversation.reset(self.system_prompt.clone());
    }

    /// Replace the live conversation, e.g. with a loaded one
    pub fn replace_conversation(&mut self, conversation: Conversation) {
        self.conversation = conversation;
    }

    /// Append an excerpt as a system message
    pub fn attach_context(&mut self, excerpt: &ContextExcerpt) {
        self.conversation.push(excerpt.to_system_message());
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(ChatModel::default(), DEFAULT_SYSTEM_PROMPT)
    }
}
