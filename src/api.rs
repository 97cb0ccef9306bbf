//! HTTP API for the stylist relay.
//!
//! `POST /api/chat` relays a question to the completion API, `POST
//! /api/reset` forgets a user's history, `GET /api/health` reports status,
//! and `/` serves a small status page.

mod chat;
mod server;
mod state;
mod system;

pub use server::{build_router, start_http_server};
pub use state::ApiState;
