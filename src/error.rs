//! Top-level error types for Stylebot.

use std::sync::Arc;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error enum wrapping domain-specific errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load config from {path}: {source}")]
    Load {
        path: String,
        source: Arc<std::io::Error>,
    },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Completion API errors, carrying enough detail to log what went wrong.
///
/// Callers never show these to users directly; [`LlmError::kind`] collapses
/// them onto the fixed [`ChatError`] vocabulary.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("completion credentials are not configured")]
    MissingCredentials,

    #[error("completion API error ({status}): {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed completion response: {0}")]
    Decode(String),
}

impl LlmError {
    /// Classify this failure by presence of a response and its status code.
    pub fn kind(&self) -> ChatError {
        match self {
            LlmError::MissingCredentials => ChatError::NotConfigured,
            LlmError::Status { status, .. } => ChatError::from_status(*status),
            LlmError::Transport(error) => match error.status() {
                Some(status) => ChatError::from_status(status),
                None if error.is_builder() => ChatError::Failed,
                None => ChatError::Unreachable,
            },
            LlmError::Decode(_) => ChatError::Failed,
        }
    }
}

/// Everything a chat request can fail with, as seen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("completion credentials are not configured")]
    NotConfigured,

    #[error("completion API did not understand the request")]
    BadRequest,

    #[error("completion API rate limit reached")]
    RateLimited,

    #[error("completion API rejected the credentials")]
    Forbidden,

    #[error("completion API is unreachable")]
    Unreachable,

    #[error("completion failed")]
    Failed,
}

impl ChatError {
    /// Map a remote HTTP status onto an error kind. The response body never
    /// takes part in classification.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        match status.as_u16() {
            400 => ChatError::BadRequest,
            403 => ChatError::Forbidden,
            429 => ChatError::RateLimited,
            _ => ChatError::Failed,
        }
    }

    /// Text shown to the user in the `error` field of the response.
    pub fn user_message(self) -> &'static str {
        match self {
            ChatError::EmptyMessage => "Напиши вопрос!",
            ChatError::NotConfigured => "Сервер не настроен.",
            ChatError::BadRequest => "Яндекс не понял запрос",
            ChatError::RateLimited => "Слишком много запросов",
            ChatError::Forbidden => "Проблема с API ключом",
            ChatError::Unreachable => "Яндекс не отвечает",
            ChatError::Failed => "Что-то пошло не так",
        }
    }
}
