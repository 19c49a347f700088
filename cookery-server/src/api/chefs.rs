//! Chef endpoints

use axum::{extract::State, Json};
use cookery_common::db::{Chef, NewChef};
use tracing::info;

use super::extract::JsonBody;
use crate::error::ApiResult;
use crate::AppState;

/// GET /api/chefs
pub async fn list_chefs(State(state): State<AppState>) -> ApiResult<Json<Vec<Chef>>> {
    Ok(Json(state.store.list_chefs().await?))
}

/// POST /api/chefs
pub async fn create_chef(
    State(state): State<AppState>,
    JsonBody(chef): JsonBody<NewChef>,
) -> ApiResult<Json<Chef>> {
    let created = state.store.create_chef(chef).await?;
    info!("Created chef {} ({})", created.id, created.name);
    Ok(Json(created))
}
