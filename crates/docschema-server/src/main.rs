//! docschema Server
//!
//! Serves the built-in collection schemas for introspection and validates
//! documents against them.

use std::sync::Arc;

use clap::Parser;
use docschema::builtin_registry;
use docschema_server::config::Args;
use docschema_server::{router, AppState};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Setup logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let registry = Arc::new(builtin_registry()?);
    let config = args.validation_config();
    info!("Registered {} schemas", registry.len());
    info!("Extra fields: {:?}, strict: {}", config.extra, config.strict);

    let app = router(AppState::new(registry, config));

    let listener = TcpListener::bind(args.bind).await?;
    info!("Starting docschema server on http://{}", args.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => warn!("Unable to listen for shutdown signal: {}", err),
    }
}
