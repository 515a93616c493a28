mod chain;
mod config;
mod cv;
mod documents;
mod errors;
mod forms;
mod interview;
mod llm_client;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::OllamaClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Coach API v{}", env!("CARGO_PKG_VERSION"));

    // One model client for the whole process, shared by every panel and session
    let llm = OllamaClient::new(
        &config.ollama_base_url,
        &config.ollama_model,
        config.llm_timeout_secs,
    )
    .context("Failed to build Ollama HTTP client")?;
    info!(
        "LLM client initialized (model: {}, backend: {})",
        config.ollama_model, config.ollama_base_url
    );

    match config.interview_history_window {
        Some(window) => info!("Interview prompts replay the last {window} turns"),
        None => info!("Interview prompts replay the full conversation"),
    }
    match config.interview_session_ttl() {
        Some(ttl) => info!("Idle interview sessions expire after {}s", ttl.as_secs()),
        None => info!("Interview sessions never expire"),
    }

    let state = AppState::new(Arc::new(llm), config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
