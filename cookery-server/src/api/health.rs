//! Liveness endpoint
//!
//! Always answers 200 while the process serves requests; `database` tells
//! whether the store currently responds.

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use crate::AppState;

const MODULE_NAME: &str = "cookery-server";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok", or "degraded" when the database does not answer
    pub status: &'static str,
    pub module: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    /// "ok" or "unavailable"
    pub database: &'static str,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime_seconds = Utc::now()
        .signed_duration_since(state.startup_time)
        .num_seconds()
        .max(0) as u64;

    let database_up = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Health check: database unavailable: {}", e);
            false
        }
    };

    Json(HealthResponse {
        status: if database_up { "ok" } else { "degraded" },
        module: MODULE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds,
        database: if database_up { "ok" } else { "unavailable" },
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
