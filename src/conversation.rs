//! Conversation history and per-user storage.

pub mod history;
pub mod store;

pub use history::{MAX_STORED_TURNS, Role, Turn};
pub use store::{ConversationStore, InMemoryConversationStore};
