//! Conversation session: an ordered list of system/user/assistant turns.
//!
//! The session always begins with exactly one system turn holding the
//! assistant's operating instructions. Turns are appended in strict
//! chronological order and never removed individually; `reset` discards
//! everything after the system turn. Nothing persists across restarts.

use crate::types::{ChatRole, ChatTurn};

/// An in-memory conversation session.
#[derive(Debug, Clone)]
pub struct ChatSession {
    turns: Vec<ChatTurn>,
}

impl ChatSession {
    /// Create a session seeded with the system prompt.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            turns: vec![ChatTurn::system(system_prompt)],
        }
    }

    /// Append a user turn.
    pub fn append_user(&mut self, content: impl Into<String>) {
        self.turns.push(ChatTurn::user(content));
    }

    /// Append an assistant turn.
    pub fn append_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(ChatTurn::assistant(content));
    }

    /// Restore the session to exactly the initial system turn.
    pub fn reset(&mut self) {
        self.turns.truncate(1);
    }

    /// All turns in chronological order.
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
