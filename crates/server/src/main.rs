//! searcher server entry point.
//!
//! Loads configuration, opens the shared session store, and serves the HTTP
//! routes until Ctrl-C. Logs are JSON on stderr.

use std::sync::Arc;

use anyhow::{Context, Result};
use searcher_client::{GoogleClient, GoogleConfig};
use searcher_core::{AppConfig, CacheDb};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod app;
mod error;
mod render;
mod routes;
mod session;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    config.require_google_credentials()?;

    let db = CacheDb::open(&config.db_path)
        .await
        .with_context(|| format!("opening session store at {}", config.db_path.display()))?;
    let fetcher = GoogleClient::new(GoogleConfig::from_app_config(&config)?)?;

    let state = app::AppState::new(Arc::new(db.clone()), Arc::new(fetcher));
    let purge = app::spawn_purge_task(db, config.purge_interval());

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await.with_context(|| format!("binding {addr}"))?;

    tracing::info!(%addr, db_path = %config.db_path.display(), "Starting searcher server");

    axum::serve(listener, app::router(state))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("failed to listen for shutdown signal: {}", e);
            }
        })
        .await?;

    purge.abort();
    tracing::info!("searcher server stopped");

    Ok(())
}
