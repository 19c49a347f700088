//! User endpoints

use axum::{extract::State, Json};
use cookery_common::db::{NewUser, User};
use tracing::info;

use super::extract::JsonBody;
use crate::error::ApiResult;
use crate::AppState;

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.store.list_users().await?))
}

/// POST /api/users
///
/// Duplicate username or email is a store failure (500).
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(user): JsonBody<NewUser>,
) -> ApiResult<Json<User>> {
    let created = state.store.create_user(user).await?;
    info!("Created user {} ({})", created.id, created.username);
    Ok(Json(created))
}
