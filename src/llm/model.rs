//! YandexGPT completion call: request body, HTTP round trip, reply extraction.

use crate::error::LlmError;
use crate::llm::manager::LlmManager;
use crate::llm::prompt::PromptMessage;
use crate::logging::truncate_for_log;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Sampling temperature for every call.
pub const TEMPERATURE: f32 = 0.7;

/// Upper bound on generated tokens.
pub const MAX_TOKENS: u32 = 800;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompletionRequest<'a> {
    model_uri: &'a str,
    completion_options: CompletionOptions,
    messages: &'a [PromptMessage],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompletionOptions {
    stream: bool,
    temperature: f32,
    max_tokens: u32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            stream: false,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    result: CompletionResult,
}

#[derive(Debug, Deserialize)]
struct CompletionResult {
    #[serde(default)]
    alternatives: Vec<Alternative>,
}

#[derive(Debug, Deserialize)]
struct Alternative {
    message: AlternativeMessage,
}

#[derive(Debug, Deserialize)]
struct AlternativeMessage {
    text: String,
}

/// Completion model bound to an [`LlmManager`].
#[derive(Clone)]
pub struct StyleModel {
    llm_manager: Arc<LlmManager>,
}

impl StyleModel {
    pub fn new(llm_manager: Arc<LlmManager>) -> Self {
        Self { llm_manager }
    }

    pub fn llm_manager(&self) -> &Arc<LlmManager> {
        &self.llm_manager
    }

    /// Send `messages` in one non-streaming call and return the first
    /// alternative's text. Single attempt; the client timeout bounds it.
    pub async fn completion(&self, messages: &[PromptMessage]) -> Result<String, LlmError> {
        let credentials = self.llm_manager.credentials()?;

        let body = CompletionRequest {
            model_uri: &credentials.model_uri,
            completion_options: CompletionOptions::default(),
            messages,
        };

        let response = self
            .llm_manager
            .http_client()
            .post(self.llm_manager.endpoint())
            .header("authorization", format!("Api-Key {}", credentials.api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Transport(e)
                } else {
                    LlmError::Decode(format!("failed to read response body: {e}"))
                }
            })?;

        if !status.is_success() {
            return Err(LlmError::Status {
                status,
                body: truncate_body(&response_text).to_string(),
            });
        }

        parse_completion_response(&response_text)
    }
}

fn parse_completion_response(response_text: &str) -> Result<String, LlmError> {
    let response: CompletionResponse = serde_json::from_str(response_text).map_err(|e| {
        LlmError::Decode(format!(
            "response is not valid JSON: {e}\nBody: {}",
            truncate_body(response_text)
        ))
    })?;

    response
        .result
        .alternatives
        .into_iter()
        .next()
        .map(|alternative| alternative.message.text)
        .ok_or_else(|| LlmError::Decode("response has no alternatives".into()))
}

/// Truncate a response body for error messages.
fn truncate_body(body: &str) -> &str {
    const LIMIT: usize = 500;
    truncate_for_log(body, LIMIT).0
}
