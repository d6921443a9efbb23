//! HTTP surface
//!
//! JSON in and out, camelCase fields, `Cache-Control: no-store` on every
//! response. Failures render as `{ "error": "<message>" }`.

mod calculate;
mod health;
mod reference;
pub mod response;
mod scenarios;

#[cfg(test)]
mod tests;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::presentation::state::{AppState, SharedState};
use yieldlab_domain::shared::DomainError;

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/scenarios",
            get(scenarios::list_scenarios).post(scenarios::create_scenario),
        )
        .route(
            "/api/scenarios/:id",
            get(scenarios::get_scenario).delete(scenarios::delete_scenario),
        )
        .route(
            "/api/calculate/investment",
            post(calculate::calculate_investment),
        )
        .route("/api/calculate/referral", post(calculate::calculate_referral))
        .route("/api/calculate/team", post(calculate::calculate_team))
        .route(
            "/api/reference/release-schedule",
            get(reference::get_release_schedule),
        )
        .route("/api/reference/tiers", get(reference::list_tiers))
        .route("/api/reference/tiers/:name", get(reference::get_tier))
        .fallback(health::not_found_handler)
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C
pub async fn serve(state: AppState) -> Result<(), DomainError> {
    let addr = state.runtime.config.socket_addr()?;
    let state = Arc::new(state);
    let app = build_router(state.clone());

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        DomainError::Infrastructure(format!("Failed to bind {}: {}", addr, e))
    })?;
    info!(
        "YieldLab HTTP API listening on http://{} (storage: {})",
        addr,
        state.runtime.config.storage.as_str()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DomainError::Infrastructure(format!("HTTP server error: {}", e)))?;

    let (created, deleted) = state.runtime.audit.totals();
    info!(
        "Server stopped (scenarios created: {}, deleted: {})",
        created, deleted
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
