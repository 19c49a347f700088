//! Master class recommendations
//!
//! Lookup failures for the user's preferences or subscriptions are logged
//! and treated as "none"; only the final class query can fail the request.

use axum::{
    extract::{Query, State},
    Json,
};
use cookery_common::db::MasterClass;
use tracing::{debug, warn};

use super::extract::{required_id, UserIdQuery};
use crate::db::RecommendationQuery;
use crate::error::ApiResult;
use crate::AppState;

/// GET /api/recommendations?user_id=
pub async fn recommendations(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<Vec<MasterClass>>> {
    let user_id = required_id(query.user_id.as_deref(), "user_id")?;

    let preferences = state
        .store
        .user_preferences(user_id)
        .await
        .unwrap_or_else(|e| {
            warn!("Failed to load preferences for user {}: {}", user_id, e);
            None
        })
        .unwrap_or_default();

    let subscribed = state
        .store
        .subscribed_chef_ids(user_id)
        .await
        .unwrap_or_else(|e| {
            warn!("Failed to load subscriptions for user {}: {}", user_id, e);
            Vec::new()
        });

    let plan = RecommendationQuery::for_user(&subscribed, &preferences);
    debug!(
        "Recommendations for user {}: {} subscribed chefs, preferences {:?}",
        user_id,
        subscribed.len(),
        preferences
    );

    Ok(Json(state.store.recommend_master_classes(&plan).await?))
}
