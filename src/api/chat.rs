use super::state::ApiState;
use crate::chat::user_id_or_default;
use crate::error::ChatError;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ChatRequest {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    user_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ResetRequest {
    #[serde(default)]
    user_id: Option<String>,
}

#[derive(Serialize)]
pub(super) struct ChatResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

#[derive(Serialize)]
pub(super) struct ResetResponse {
    success: bool,
}

/// HTTP status for a failed chat. An empty question is answered normally;
/// everything else is a server-side failure.
fn status_for(error: ChatError) -> StatusCode {
    match error {
        ChatError::EmptyMessage => StatusCode::OK,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json")
                || mime.to_ascii_lowercase().ends_with("+json")
        })
}

/// Bodies that are not declared as JSON, or are empty, carry no message.
fn parse_chat_request(
    headers: &HeaderMap,
    body: &[u8],
) -> Result<ChatRequest, serde_json::Error> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ChatRequest::default());
    }
    serde_json::from_slice(body)
}

fn failure(error: ChatError) -> Json<ChatResponse> {
    Json(ChatResponse {
        success: false,
        reply: None,
        error: Some(error.user_message()),
    })
}

pub(super) async fn chat(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<ChatResponse>) {
    let request = match parse_chat_request(&headers, &body) {
        Ok(request) => request,
        Err(error) => {
            tracing::debug!(%error, "invalid chat body");
            return (StatusCode::BAD_REQUEST, failure(ChatError::Failed));
        }
    };

    let user_id = user_id_or_default(request.user_id);
    let message = request.message.unwrap_or_default();

    match state.chat.respond(&user_id, &message).await {
        Ok(reply) => (
            StatusCode::OK,
            Json(ChatResponse {
                success: true,
                reply: Some(reply),
                error: None,
            }),
        ),
        Err(error) => (status_for(error), failure(error)),
    }
}

/// Accepts an empty body so the status page button can post without one.
pub(super) async fn reset(
    State(state): State<Arc<ApiState>>,
    body: Bytes,
) -> Result<Json<ResetResponse>, (StatusCode, String)> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        ResetRequest::default()
    } else {
        serde_json::from_slice::<ResetRequest>(&body).map_err(|error| {
            tracing::debug!(%error, "invalid reset body");
            (
                StatusCode::BAD_REQUEST,
                format!("invalid reset request: {error}"),
            )
        })?
    };

    let user_id = user_id_or_default(request.user_id);
    state.chat.reset(&user_id).await;

    Ok(Json(ResetResponse { success: true }))
}
