//! Azure AI web front-end server
//!
//! Serves the translator and image analysis pages

use anyhow::{Context, Result};
use azure_ai_web::utils::logging::mask_secret;
use azure_ai_web::{create_router, version_info, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before the logger reads RUST_LOG / LOG_FORMAT
    dotenv::dotenv().ok();

    init_logging()?;
    info!("Starting {}", version_info());

    let settings = Settings::new().context("Failed to load server settings")?;
    info!(
        "Settings loaded - translator key: {}, region: {}, vision key: {}",
        mask_secret(settings.translator.api_key.as_deref()),
        settings.translator.region.as_deref().unwrap_or("<unset>"),
        mask_secret(settings.vision.api_key.as_deref()),
    );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let app = create_router(settings).await?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🚀 Server started on http://{}", addr);
    info!("🌐 Translator: http://{}/translate", addr);
    info!("🖼️ Vision: http://{}/vision", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;

    info!("Server stopped");
    Ok(())
}

/// Initialize logging system
fn init_logging() -> Result<()> {
    // Get log level from environment variable, default to info
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    // Check if JSON format should be used
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if log_format == "json" {
        // JSON format logs (production environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(log_level)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .finish(),
        )
    } else {
        // Human readable format (development environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(log_level)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Logging system initialized");
    Ok(())
}

/// Resolve when Ctrl-C is received
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
