//! Master class endpoints

use axum::{extract::State, Json};
use cookery_common::db::{MasterClass, NewMasterClass};
use tracing::info;

use super::extract::JsonBody;
use crate::error::ApiResult;
use crate::AppState;

/// GET /api/masterclasses
///
/// Ordered by scheduled datetime, earliest first.
pub async fn list_master_classes(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<MasterClass>>> {
    Ok(Json(state.store.list_master_classes().await?))
}

/// POST /api/masterclasses
pub async fn create_master_class(
    State(state): State<AppState>,
    JsonBody(class): JsonBody<NewMasterClass>,
) -> ApiResult<Json<MasterClass>> {
    let created = state.store.create_master_class(class).await?;
    info!(
        "Created master class {} ({}) at {}",
        created.id, created.title, created.datetime
    );
    Ok(Json(created))
}
