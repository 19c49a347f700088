//! Per-user views: attendance history and followed chefs

use axum::{
    extract::{Query, State},
    Json,
};
use cookery_common::db::{HistoryEntry, UserSubscription};

use super::extract::{required_id, UserIdQuery};
use crate::error::ApiResult;
use crate::AppState;

/// GET /api/user-history?user_id=
pub async fn user_history(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<Vec<HistoryEntry>>> {
    let user_id = required_id(query.user_id.as_deref(), "user_id")?;
    Ok(Json(state.store.user_history(user_id).await?))
}

/// GET /api/user-subscriptions?user_id=
pub async fn user_subscriptions(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<Vec<UserSubscription>>> {
    let user_id = required_id(query.user_id.as_deref(), "user_id")?;
    Ok(Json(state.store.user_subscriptions(user_id).await?))
}
