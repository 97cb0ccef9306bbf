//! LLM manager: owns the HTTP client and completion credentials.

use crate::config::CompletionConfig;
use crate::error::{LlmError, Result};

use anyhow::Context as _;
use std::time::Duration;

/// Hard limit for a single completion call, connect included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Credentials resolved for one call.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub model_uri: String,
}

/// Holds the shared HTTP client and completion API configuration.
pub struct LlmManager {
    config: CompletionConfig,
    http_client: reqwest::Client,
}

impl LlmManager {
    /// Create a new LLM manager with the given configuration.
    pub fn new(config: CompletionConfig) -> Result<Self> {
        Self::with_timeout(config, REQUEST_TIMEOUT)
    }

    /// Same as [`LlmManager::new`] with a custom per-call timeout.
    pub fn with_timeout(config: CompletionConfig, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .with_context(|| "failed to build HTTP client")?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Whether both the API key and folder id are set.
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Resolve the API key and model URI, or fail without touching the network.
    pub fn credentials(&self) -> std::result::Result<Credentials, LlmError> {
        let (api_key, folder_id) = self
            .config
            .credentials()
            .ok_or(LlmError::MissingCredentials)?;

        Ok(Credentials {
            api_key: api_key.to_string(),
            model_uri: self.config.model_uri(folder_id),
        })
    }

    /// Completion endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Get the HTTP client.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }
}
