//! Stylebot CLI entry point.

use anyhow::Context as _;
use clap::Parser;

use std::sync::Arc;

use stylebot::api::{ApiState, start_http_server};
use stylebot::chat::ChatService;
use stylebot::config::Config;
use stylebot::conversation::{ConversationStore, InMemoryConversationStore};
use stylebot::llm::{LlmManager, StyleModel};

#[derive(Parser)]
#[command(name = "stylebot")]
#[command(about = "HTTP relay for an AI fashion stylist backed by YandexGPT")]
struct Cli {
    /// Path to a TOML config file (optional)
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Port to listen on, overriding PORT and the config file
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    stylebot::logging::init_tracing(cli.debug);

    let mut config = if let Some(config_path) = &cli.config {
        Config::load_from_path(config_path)
            .with_context(|| format!("failed to load config from {}", config_path.display()))?
    } else {
        Config::load().with_context(|| "failed to load configuration from environment")?
    };
    if let Some(port) = cli.port {
        config.port = port;
    }

    let api_configured = config.completion.is_configured();
    if !api_configured {
        tracing::warn!("YANDEX_API_KEY or YANDEX_FOLDER_ID is not set; /api/chat will fail");
    }

    let llm_manager = Arc::new(
        LlmManager::new(config.completion.clone())
            .with_context(|| "failed to initialize LLM manager")?,
    );
    let store: Arc<dyn ConversationStore> = Arc::new(InMemoryConversationStore::new());
    let chat = ChatService::new(store, StyleModel::new(llm_manager));
    let state = Arc::new(ApiState::new(chat, config.port));

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let bind = config.bind_addr();
    let server = start_http_server(bind, state.clone(), shutdown_rx)
        .await
        .with_context(|| format!("failed to start HTTP server on {bind}"))?;

    tracing::info!(
        url = %format!("http://localhost:{}", config.port),
        api_configured,
        "stylebot started"
    );

    tokio::signal::ctrl_c()
        .await
        .with_context(|| "failed to listen for shutdown signal")?;
    tracing::info!("shutdown signal received");

    let _ = shutdown_tx.send(true);
    if let Err(error) = server.await {
        tracing::error!(%error, "HTTP server task failed");
    }

    let users = state.chat.user_count().await;
    drop(state);
    tracing::info!(users, "conversation store dropped, stylebot stopped");
    Ok(())
}
