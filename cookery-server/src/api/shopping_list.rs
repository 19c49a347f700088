//! Shopping list generator
//!
//! Passes a recipe's ingredient list through unchanged: no deduplication,
//! no quantity aggregation.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use super::extract::{required_id, RecipeIdQuery};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ShoppingList {
    /// The `recipe_id` query value, echoed as given
    pub recipe_id: String,
    pub shopping_list: Vec<String>,
}

/// GET /api/shopping-list?recipe_id=
pub async fn shopping_list(
    State(state): State<AppState>,
    Query(query): Query<RecipeIdQuery>,
) -> ApiResult<Json<ShoppingList>> {
    let recipe_id = required_id(query.recipe_id.as_deref(), "recipe_id")?;

    let ingredients = state
        .store
        .recipe_ingredients(recipe_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))?;

    Ok(Json(ShoppingList {
        recipe_id: query.recipe_id.unwrap_or_default(),
        shopping_list: ingredients,
    }))
}
