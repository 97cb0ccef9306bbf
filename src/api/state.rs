//! Shared state for API handlers.

use crate::chat::ChatService;

use std::time::Instant;

/// State handed to every handler through `State<Arc<ApiState>>`.
pub struct ApiState {
    pub chat: ChatService,
    /// Port shown on the status page.
    pub port: u16,
    pub started_at: Instant,
}

impl ApiState {
    pub fn new(chat: ChatService, port: u16) -> Self {
        Self {
            chat,
            port,
            started_at: Instant::now(),
        }
    }
}
