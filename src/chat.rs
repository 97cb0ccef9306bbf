//! Chat exchange: validate, build the prompt, call the model, remember the turn.

use crate::conversation::ConversationStore;
use crate::error::{ChatError, LlmError};
use crate::llm::{StyleModel, build_messages};
use crate::logging::truncate_for_log;

use std::sync::Arc;

/// User id used when a request does not name one.
pub const DEFAULT_USER_ID: &str = "guest";

/// Characters of the question included in logs.
const LOGGED_QUESTION_CHARS: usize = 50;

/// Resolve an optional user id from a request.
pub fn user_id_or_default(user_id: Option<String>) -> String {
    user_id.unwrap_or_else(|| DEFAULT_USER_ID.to_string())
}

/// Runs chat exchanges against a conversation store and the completion model.
#[derive(Clone)]
pub struct ChatService {
    store: Arc<dyn ConversationStore>,
    model: StyleModel,
}

impl ChatService {
    pub fn new(store: Arc<dyn ConversationStore>, model: StyleModel) -> Self {
        Self { store, model }
    }

    pub fn store(&self) -> &Arc<dyn ConversationStore> {
        &self.store
    }

    /// Whether the completion credentials are set.
    pub fn is_configured(&self) -> bool {
        self.model.llm_manager().is_configured()
    }

    /// Answer `message` for `user_id`. On success the exchange is appended to
    /// the user's history; on failure the history is untouched.
    #[tracing::instrument(skip(self, message))]
    pub async fn respond(&self, user_id: &str, message: &str) -> Result<String, ChatError> {
        tracing::info!(
            question = %truncate_for_log(message, LOGGED_QUESTION_CHARS).0,
            "chat message received"
        );

        if message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        if !self.is_configured() {
            tracing::error!("completion API credentials are not configured");
            return Err(ChatError::NotConfigured);
        }

        let stored = self.store.history(user_id).await;
        let messages = build_messages(&stored, message);
        tracing::debug!(message_count = messages.len(), "sending completion request");

        let reply = self.model.completion(&messages).await.map_err(|error| {
            let kind = error.kind();
            log_completion_failure(&error, kind);
            kind
        })?;

        tracing::info!(reply_chars = reply.chars().count(), "completion succeeded");

        self.store.append_exchange(user_id, message, &reply).await;

        Ok(reply)
    }

    /// Drop the stored history for `user_id`.
    pub async fn reset(&self, user_id: &str) {
        let removed = self.store.reset(user_id).await;
        tracing::info!(user_id, removed, "conversation reset");
    }

    /// Number of users with stored history.
    pub async fn user_count(&self) -> usize {
        self.store.user_count().await
    }
}

fn log_completion_failure(error: &LlmError, kind: ChatError) {
    match kind {
        ChatError::Unreachable => tracing::warn!(%error, ?kind, "completion API unreachable"),
        _ => tracing::error!(%error, ?kind, "completion request failed"),
    }
}
