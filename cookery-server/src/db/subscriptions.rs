//! Chef subscriptions ("follow" relation)

use cookery_common::db::UserSubscription;
use cookery_common::Result;

use super::{decode_rows, Store};

impl Store {
    /// Follow a chef; repeating the same pair is a no-op
    pub async fn subscribe(&self, user_id: i64, chef_id: i64) -> Result<()> {
        sqlx::query("INSERT OR IGNORE INTO subscriptions (user_id, chef_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(chef_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn subscribed_chef_ids(&self, user_id: i64) -> Result<Vec<i64>> {
        let chef_ids = sqlx::query_scalar(
            "SELECT chef_id FROM subscriptions WHERE user_id = ? AND chef_id IS NOT NULL ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(chef_ids)
    }

    pub async fn user_subscriptions(&self, user_id: i64) -> Result<Vec<UserSubscription>> {
        let rows = sqlx::query(
            r#"
            SELECT s.id, s.user_id, s.chef_id, c.name AS chef_name, c.speciality,
                   c.rating AS chef_rating
            FROM subscriptions s
            JOIN chefs c ON s.chef_id = c.id
            WHERE s.user_id = ?
            ORDER BY s.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(decode_rows(&rows, "subscription"))
    }
}
