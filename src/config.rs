//! Configuration loading and validation.

use crate::error::{ConfigError, Result};

use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use std::sync::Arc;

/// Default listening port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Default YandexGPT completion endpoint.
pub const DEFAULT_COMPLETION_URL: &str =
    "https://llm.api.cloud.yandex.net/foundationModels/v1/completion";

/// Default model name, combined with the folder id into the model URI.
pub const DEFAULT_MODEL: &str = "yandexgpt-lite";

/// Stylebot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on.
    pub port: u16,

    /// Completion API configuration.
    pub completion: CompletionConfig,
}

/// Completion API configuration.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Yandex Cloud API key (`YANDEX_API_KEY`).
    pub api_key: Option<String>,

    /// Yandex Cloud folder id (`YANDEX_FOLDER_ID`).
    pub folder_id: Option<String>,

    /// Completion endpoint URL.
    pub endpoint: String,

    /// Model name within the folder.
    pub model: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            folder_id: None,
            endpoint: DEFAULT_COMPLETION_URL.into(),
            model: DEFAULT_MODEL.into(),
        }
    }
}

impl CompletionConfig {
    /// Both credentials present and non-empty.
    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }

    /// Borrow the API key and folder id, if both are set.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let api_key = self.api_key.as_deref().filter(|key| !key.is_empty())?;
        let folder_id = self.folder_id.as_deref().filter(|id| !id.is_empty())?;
        Some((api_key, folder_id))
    }

    /// `gpt://<folder>/<model>` for the given folder.
    pub fn model_uri(&self, folder_id: &str) -> String {
        format!("gpt://{folder_id}/{}", self.model)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            completion: CompletionConfig::default(),
        }
    }
}

/// On-disk TOML layout. Every key is optional; environment variables win.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    port: Option<u16>,
    #[serde(default)]
    completion: TomlCompletionConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlCompletionConfig {
    api_key: Option<String>,
    folder_id: Option<String>,
    endpoint: Option<String>,
    model: Option<String>,
}

/// Variable lookup used to read the environment.
pub type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_env(process_env())
    }

    /// Load from a TOML file, then apply environment overrides.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Load {
            path: path.display().to_string(),
            source: Arc::new(source),
        })?;
        let file: TomlConfig = toml::from_str(&content).map_err(|error| ConfigError::Parse {
            path: path.display().to_string(),
            message: error.to_string(),
        })?;

        let mut config = Self::default();
        if let Some(port) = file.port {
            config.port = port;
        }
        let completion = &mut config.completion;
        completion.api_key = file.completion.api_key;
        completion.folder_id = file.completion.folder_id;
        if let Some(endpoint) = file.completion.endpoint {
            completion.endpoint = endpoint;
        }
        if let Some(model) = file.completion.model {
            completion.model = model;
        }

        config.apply_env(&process_env())?;
        Ok(config)
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_env(lookup: EnvLookup) -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(&lookup)?;
        Ok(config)
    }

    fn apply_env(&mut self, lookup: &EnvLookup) -> Result<()> {
        if let Some(port) = lookup("PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("PORT is not a valid port: {port}")))?;
        }
        if let Some(api_key) = lookup("YANDEX_API_KEY") {
            self.completion.api_key = Some(api_key);
        }
        if let Some(folder_id) = lookup("YANDEX_FOLDER_ID") {
            self.completion.folder_id = Some(folder_id);
        }
        if let Some(endpoint) = lookup("STYLEBOT_COMPLETION_URL") {
            self.completion.endpoint = endpoint;
        }
        if let Some(model) = lookup("STYLEBOT_MODEL") {
            self.completion.model = model;
        }
        Ok(())
    }

    /// Address the HTTP server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn process_env() -> EnvLookup {
    Arc::new(|key| std::env::var(key).ok())
}
