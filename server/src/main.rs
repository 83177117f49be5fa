//! Job Finder Server
//!
//! Serves the job list, saved jobs and application form screens over a
//! REST API using Axum. The job list comes from the public job feed; saved
//! jobs and applications live in memory for the life of the process.

mod config;
mod errors;
mod feed_controller;
mod routes;
mod state;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use feed::FeedClient;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::feed_controller::Completion;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Finder Server v{}", env!("CARGO_PKG_VERSION"));

    let client = FeedClient::new(
        config.feed_url.clone(),
        Duration::from_secs(config.feed_timeout_secs),
    )?;
    info!(url = %config.feed_url, timeout_secs = config.feed_timeout_secs, "feed client ready");

    let state = AppState::new(Arc::new(client));

    // Initial load of the job list, like opening the app.
    let initial = state.clone();
    tokio::spawn(async move {
        match initial.refresh().await {
            Some(Completion::Applied) => info!("initial job list loaded"),
            Some(Completion::Failed(e)) => warn!("initial job list failed: {e}"),
            Some(Completion::Stale) | None => {}
        }
    });

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🌐 Server running at http://{}", addr);
    info!("   Try: curl 'http://{}/jobs?q=developer'", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
