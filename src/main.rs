//! Borrow Book Server
//!
//! REST API server for the library borrowing service.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;

use borrow_book_server::{
    api,
    config::AppConfig,
    db,
    logging,
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let _log_guard = logging::init(&config.logging);

    tracing::info!("Starting Borrow Book Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = db::connect_with_retry(&config.database)
        .await
        .context("Failed to connect to database")?;

    // Run migrations
    db::migrate(&pool)
        .await
        .context("Failed to run database migrations")?;

    let addr = SocketAddr::new(
        config.server.host.parse().context("Invalid host address")?,
        config.server.port,
    );

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = api::router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
