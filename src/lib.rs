//! Stylebot: an HTTP relay between a chat front end and the YandexGPT
//! completion API, with a short per-user conversation memory.

pub mod api;
pub mod chat;
pub mod config;
pub mod conversation;
pub mod error;
pub mod llm;
pub mod logging;

pub use chat::{ChatService, DEFAULT_USER_ID};
pub use error::{ChatError, Error, Result};
