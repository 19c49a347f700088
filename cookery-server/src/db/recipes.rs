//! Recipe queries
//!
//! Ingredients are stored as JSON array text and decoded on the way out.

use cookery_common::db::{decode_ingredients, NewRecipe, Recipe, RecipeRow};
use cookery_common::Result;
use tracing::warn;

use super::{decode_rows, Store};

const RECIPE_SELECT: &str = r#"
    SELECT r.id, r.title, r.description, r.ingredients, r.chef_id,
           c.name AS chef_name, r.video_url, r.created_at
    FROM recipes r
    JOIN chefs c ON r.chef_id = c.id
"#;

/// Turn joined rows into recipes, skipping rows whose ingredients don't decode
fn into_recipes(rows: Vec<RecipeRow>) -> Vec<Recipe> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.id;
            match Recipe::try_from(row) {
                Ok(recipe) => Some(recipe),
                Err(e) => {
                    warn!("Skipping recipe {} with malformed ingredients: {}", id, e);
                    None
                }
            }
        })
        .collect()
}

impl Store {
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let sql = format!("{} ORDER BY r.id", RECIPE_SELECT);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        Ok(into_recipes(decode_rows(&rows, "recipe")))
    }

    /// Insert a recipe and return it with the store-assigned id and timestamp
    pub async fn create_recipe(&self, recipe: NewRecipe) -> Result<Recipe> {
        let ingredients = recipe.ingredients_json()?;

        let (id, created_at): (i64, String) = sqlx::query_as(
            r#"
            INSERT INTO recipes (title, description, ingredients, chef_id, video_url)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, created_at
            "#,
        )
        .bind(&recipe.title)
        .bind(&recipe.description)
        .bind(ingredients)
        .bind(recipe.chef_id)
        .bind(&recipe.video_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(recipe.into_recipe(id, created_at))
    }

    /// Substring match over title, description and the raw ingredient text
    pub async fn search_recipes(&self, needle: &str) -> Result<Vec<Recipe>> {
        let pattern = format!("%{}%", needle);
        let sql = format!(
            "{} WHERE r.title LIKE ? OR r.description LIKE ? OR r.ingredients LIKE ? ORDER BY r.id",
            RECIPE_SELECT
        );

        let rows = sqlx::query(&sql)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await?;

        Ok(into_recipes(decode_rows(&rows, "recipe")))
    }

    /// Ingredient list of one recipe, `None` if the recipe does not exist
    ///
    /// A NULL or undecodable stored list comes back empty.
    pub async fn recipe_ingredients(&self, recipe_id: i64) -> Result<Option<Vec<String>>> {
        let stored: Option<Option<String>> =
            sqlx::query_scalar("SELECT ingredients FROM recipes WHERE id = ?")
                .bind(recipe_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(stored.map(|text| match text {
            None => Vec::new(),
            Some(text) => decode_ingredients(&text).unwrap_or_else(|e| {
                warn!("Recipe {} has malformed ingredients: {}", recipe_id, e);
                Vec::new()
            }),
        }))
    }
}
