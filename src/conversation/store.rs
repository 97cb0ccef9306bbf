//! Per-user conversation storage.

use super::history::{self, Turn};

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Storage for per-user conversation windows.
///
/// Each call is atomic on its own, but nothing ties a `history` read to a
/// later `append_exchange`: two requests for the same user may both build
/// prompts from the same snapshot. Implementations are free to keep that
/// behaviour.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Stored turns for `user_id`, oldest first. Empty if the user is unknown.
    async fn history(&self, user_id: &str) -> Vec<Turn>;

    /// Record one user/assistant exchange, keeping the newest
    /// [`history::MAX_STORED_TURNS`] turns.
    async fn append_exchange(&self, user_id: &str, user_text: &str, assistant_text: &str);

    /// Forget `user_id` entirely. Returns whether anything was stored.
    async fn reset(&self, user_id: &str) -> bool;

    /// Number of users with stored history.
    async fn user_count(&self) -> usize;
}

/// Process-local store. Everything is lost when it is dropped.
#[derive(Debug, Default)]
pub struct InMemoryConversationStore {
    conversations: RwLock<HashMap<String, Vec<Turn>>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn history(&self, user_id: &str) -> Vec<Turn> {
        self.conversations
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    async fn append_exchange(&self, user_id: &str, user_text: &str, assistant_text: &str) {
        let mut conversations = self.conversations.write().await;
        let turns = conversations.entry(user_id.to_string()).or_default();
        history::push_exchange(turns, user_text, assistant_text);
    }

    async fn reset(&self, user_id: &str) -> bool {
        self.conversations.write().await.remove(user_id).is_some()
    }

    async fn user_count(&self) -> usize {
        self.conversations.read().await.len()
    }
}
