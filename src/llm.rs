//! Completion API client and prompt assembly.

pub mod manager;
pub mod model;
pub mod prompt;

pub use manager::LlmManager;
pub use model::StyleModel;
pub use prompt::{PromptMessage, PromptRole, build_messages};
