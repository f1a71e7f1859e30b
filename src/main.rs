//! # Chat Ingest
//!
//! HTTP intake for chats and messages.
//!
//! This is the application entry point that initializes:
//! - Configuration loading
//! - Tracing/logging subsystem
//! - Redis connection
//! - HTTP server

use anyhow::Result;
use tracing::info;

use chat_ingest::config::Settings;
use chat_ingest::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Settings first: the log format is configurable
    let settings = Settings::load()?;

    chat_ingest::telemetry::init_tracing(settings.log.format);

    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
