//! User queries

use cookery_common::db::{NewUser, User};
use cookery_common::Result;

use super::{decode_rows, Store};

impl Store {
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query("SELECT id, username, email, preferences FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(decode_rows(&rows, "user"))
    }

    /// Insert a user; UNIQUE violations on username/email surface as database errors
    pub async fn create_user(&self, user: NewUser) -> Result<User> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (username, email, preferences) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.preferences)
        .fetch_one(&self.pool)
        .await?;

        Ok(user.into_user(id))
    }

    /// Preference string of a user, `None` when the user does not exist
    pub async fn user_preferences(&self, user_id: i64) -> Result<Option<String>> {
        let preferences: Option<Option<String>> =
            sqlx::query_scalar("SELECT preferences FROM users WHERE id = ?")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(preferences.map(Option::unwrap_or_default))
    }
}
