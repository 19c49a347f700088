//! Recipe endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use cookery_common::db::{NewRecipe, Recipe};
use serde::Deserialize;
use tracing::info;

use super::extract::JsonBody;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Query parameters for recipe search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Substring to look for in title, description and ingredients
    pub q: Option<String>,
}

/// GET /api/recipes
pub async fn list_recipes(State(state): State<AppState>) -> ApiResult<Json<Vec<Recipe>>> {
    Ok(Json(state.store.list_recipes().await?))
}

/// POST /api/recipes
pub async fn create_recipe(
    State(state): State<AppState>,
    JsonBody(recipe): JsonBody<NewRecipe>,
) -> ApiResult<Json<Recipe>> {
    let created = state.store.create_recipe(recipe).await?;
    info!("Created recipe {} ({})", created.id, created.title);
    Ok(Json(created))
}

/// GET /api/search?q=
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<Recipe>>> {
    let needle = query
        .q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest("search query is required".to_string()))?;

    Ok(Json(state.store.search_recipes(&needle).await?))
}
