//! Rendezvous backend entry point
//!
//! All operations are exposed via GraphQL at /graphql.

use anyhow::Context;
use tokio::net::TcpListener;

use rendezvous::config::Config;
use rendezvous::db::{Database, Seed};
use rendezvous::services::init_tracing;
use rendezvous::{AppState, build_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    init_tracing(config.log_format);
    tracing::info!("Starting Rendezvous");

    let db = match &config.seed_path {
        Some(path) => Database::from_seed(Seed::from_path(path)?)?,
        None => Database::new(),
    };
    tracing::info!(stats = ?db.stats(), "Store initialized");

    let addr = config.bind_addr();
    let state = AppState::new(config, db);
    let app = build_app(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);
    tracing::info!("GraphQL playground: http://{}/graphql", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
