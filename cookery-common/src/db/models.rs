//! Database models
//!
//! Row types double as the JSON wire shapes served by the API. Create
//! payloads (`New*`) default every missing field to its zero value, so a
//! partial body still inserts.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Chef {
    pub id: i64,
    pub name: String,
    pub speciality: String,
    pub rating: f64,
    pub avatar: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewChef {
    pub name: String,
    pub speciality: String,
    pub rating: f64,
    pub avatar: String,
    pub description: String,
}

impl NewChef {
    pub fn into_chef(self, id: i64) -> Chef {
        Chef {
            id,
            name: self.name,
            speciality: self.speciality,
            rating: self.rating,
            avatar: self.avatar,
            description: self.description,
        }
    }
}

/// Recipe as served to clients, with the ingredient list decoded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub chef_id: i64,
    pub chef_name: String,
    pub video_url: String,
    pub created_at: String,
}

/// Recipe joined to its chef, ingredients still in stored JSON text form
#[derive(Debug, Clone, FromRow)]
pub struct RecipeRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub chef_id: i64,
    pub chef_name: String,
    pub video_url: String,
    pub created_at: String,
}

impl TryFrom<RecipeRow> for Recipe {
    type Error = serde_json::Error;

    fn try_from(row: RecipeRow) -> Result<Self, Self::Error> {
        Ok(Recipe {
            ingredients: decode_ingredients(&row.ingredients)?,
            id: row.id,
            title: row.title,
            description: row.description,
            chef_id: row.chef_id,
            chef_name: row.chef_name,
            video_url: row.video_url,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub chef_id: i64,
    pub video_url: String,
}

impl NewRecipe {
    /// Ingredient list in the JSON text form stored in `recipes.ingredients`
    pub fn ingredients_json(&self) -> serde_json::Result<String> {
        encode_ingredients(&self.ingredients)
    }

    /// Build the created record once the store has assigned `id` and `created_at`.
    /// `chef_name` stays empty: the insert does not join to chefs.
    pub fn into_recipe(self, id: i64, created_at: String) -> Recipe {
        Recipe {
            id,
            title: self.title,
            description: self.description,
            ingredients: self.ingredients,
            chef_id: self.chef_id,
            chef_name: String::new(),
            video_url: self.video_url,
            created_at,
        }
    }
}

pub fn encode_ingredients(ingredients: &[String]) -> serde_json::Result<String> {
    serde_json::to_string(ingredients)
}

pub fn decode_ingredients(stored: &str) -> serde_json::Result<Vec<String>> {
    serde_json::from_str(stored)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub preferences: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub preferences: String,
}

impl NewUser {
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            preferences: self.preferences,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MasterClass {
    pub id: i64,
    pub title: String,
    pub chef_id: i64,
    pub chef_name: String,
    pub datetime: String,
    pub duration: i64,
    pub price: i64,
    pub max_students: i64,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewMasterClass {
    pub title: String,
    pub chef_id: i64,
    pub datetime: String,
    pub duration: i64,
    pub price: i64,
    pub max_students: i64,
    pub description: String,
}

impl NewMasterClass {
    pub fn into_master_class(self, id: i64) -> MasterClass {
        MasterClass {
            id,
            title: self.title,
            chef_id: self.chef_id,
            chef_name: String::new(),
            datetime: self.datetime,
            duration: self.duration,
            price: self.price,
            max_students: self.max_students,
            description: self.description,
        }
    }
}

/// One `user_history` row with the class title and chef name denormalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct HistoryEntry {
    pub id: i64,
    pub user_id: i64,
    pub master_class_id: i64,
    pub class_title: String,
    pub chef_name: String,
    pub attended_at: String,
}

/// A subscription joined to the followed chef
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserSubscription {
    pub id: i64,
    pub user_id: i64,
    pub chef_id: i64,
    pub chef_name: String,
    pub speciality: String,
    pub chef_rating: f64,
}

/// Platform-wide row counts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_recipes: i64,
    pub total_chefs: i64,
    pub total_users: i64,
    pub total_master_classes: i64,
    pub total_enrollments: i64,
}
