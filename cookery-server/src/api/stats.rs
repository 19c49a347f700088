//! Platform statistics endpoint

use axum::{extract::State, Json};
use cookery_common::db::Stats;

use crate::AppState;

/// GET /api/stats
pub async fn stats(State(state): State<AppState>) -> Json<Stats> {
    Json(state.store.stats().await)
}
