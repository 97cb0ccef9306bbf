//! Conversation turns and the rolling window they live in.

use serde::{Deserialize, Serialize};

/// Stored turns per user: three user/assistant exchanges.
pub const MAX_STORED_TURNS: usize = 6;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// One message of a conversation. Fields are private so a turn cannot be
/// edited after it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Append one exchange to `turns` and drop the oldest turns beyond
/// [`MAX_STORED_TURNS`].
pub fn push_exchange(turns: &mut Vec<Turn>, user_text: &str, assistant_text: &str) {
    turns.push(Turn::user(user_text));
    turns.push(Turn::assistant(assistant_text));
    truncate_oldest(turns, MAX_STORED_TURNS);
}

/// Keep only the last `keep` turns.
pub fn truncate_oldest(turns: &mut Vec<Turn>, keep: usize) {
    if turns.len() > keep {
        let excess = turns.len() - keep;
        turns.drain(..excess);
    }
}

/// The most recent `count` turns, oldest first.
pub fn recent(turns: &[Turn], count: usize) -> &[Turn] {
    &turns[turns.len().saturating_sub(count)..]
}
