//! PromptOS Compiler HTTP Server
//!
//! Provides the REST API for compiling intents and managing prompt versions.

use anyhow::Result;
use promptos_repository::InMemoryVersionRepository;
use promptos_server::config::ServerConfig;
use promptos_server::{api, engine};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing()?;

    // Load configuration
    let config = ServerConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    // Initialize the prompt compiler
    let compiler = engine::init_engine(&config)?;
    info!("Prompt compiler initialized");

    // Version storage is ephemeral and process-local
    let versions = Arc::new(InMemoryVersionRepository::new());

    // Create router
    let app = api::create_router(Arc::new(compiler), versions);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Compile API: POST http://{}/v1/compile", addr);
    info!("  Versions API: http://{}/v1/versions", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "promptos_server=info,promptos_sdk=info,promptos_llm=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
