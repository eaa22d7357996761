//! HTTP serving layer for the exporter.
//!
//! Builds the axum router and owns the shared exporter state. The only
//! data-carrying route is `GET /metrics`; `GET /health` is a liveness
//! probe for scrape targets and orchestrators.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::services::metrics_exporter::MetricsExporter;

/// Application state shared across all handlers.
///
/// The exporter sits behind an async mutex because a scrape both reads
/// and advances the ticket tracker and the snapshot cache.
pub type AppState = Arc<Mutex<MetricsExporter>>;

/// Build the service router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(metrics))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener and serve until shutdown
pub async fn run(listen: &str, exporter: MetricsExporter) -> Result<()> {
    let state: AppState = Arc::new(Mutex::new(exporter));
    let router = create_router(state);

    let listener = TcpListener::bind(listen).await?;
    info!("serving metrics on http://{}/metrics", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}

/// `GET /metrics` - collect a snapshot (cached or fresh) and render it
async fn metrics(State(state): State<AppState>) -> std::result::Result<String, (StatusCode, String)> {
    let mut exporter = state.lock().await;

    match exporter.collect().await {
        Ok(snapshot) => Ok(exporter.render(&snapshot)),
        Err(err) => {
            error!("scrape failed: {err}");
            Err((StatusCode::BAD_GATEWAY, format!("scrape failed: {err}")))
        }
    }
}

/// `GET /health` - liveness probe
async fn health() -> &'static str {
    "OK"
}
