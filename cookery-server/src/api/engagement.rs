//! Chef subscriptions and master class enrollment

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::extract::JsonBody;
use crate::db::EnrollOutcome;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubscribeRequest {
    pub user_id: i64,
    pub chef_id: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EnrollRequest {
    pub user_id: i64,
    pub master_class_id: i64,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// POST /api/subscribe
///
/// Idempotent: subscribing twice leaves a single row.
pub async fn subscribe(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SubscribeRequest>,
) -> ApiResult<Json<StatusResponse>> {
    state
        .store
        .subscribe(request.user_id, request.chef_id)
        .await?;

    info!("User {} subscribed to chef {}", request.user_id, request.chef_id);
    Ok(Json(StatusResponse {
        status: "subscribed",
    }))
}

/// POST /api/enroll
///
/// 404 for an unknown master class, 409 when no seat is left.
pub async fn enroll(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<EnrollRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let class_id = request.master_class_id;

    let capacity = state
        .store
        .class_capacity(class_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Master class {} not found", class_id)))?;

    if capacity.is_full() {
        return Err(ApiError::Conflict("No available spots".to_string()));
    }

    match state.store.enroll(request.user_id, class_id).await? {
        EnrollOutcome::Enrolled => {
            info!("User {} enrolled in master class {}", request.user_id, class_id);
        }
        EnrollOutcome::AlreadyEnrolled => {
            info!(
                "User {} already enrolled in master class {}",
                request.user_id, class_id
            );
        }
        EnrollOutcome::Full => {
            return Err(ApiError::Conflict("No available spots".to_string()));
        }
    }

    Ok(Json(StatusResponse { status: "enrolled" }))
}
