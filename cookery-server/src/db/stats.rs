//! Platform-wide counters

use cookery_common::db::Stats;
use tracing::warn;

use super::Store;

impl Store {
    /// Count rows in each table; a failed count reports zero
    pub async fn stats(&self) -> Stats {
        Stats {
            total_recipes: self.count_rows("recipes").await,
            total_chefs: self.count_rows("chefs").await,
            total_users: self.count_rows("users").await,
            total_master_classes: self.count_rows("master_classes").await,
            total_enrollments: self.count_rows("user_history").await,
        }
    }

    async fn count_rows(&self, table: &'static str) -> i64 {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        sqlx::query_scalar(&sql)
            .fetch_one(&self.pool)
            .await
            .unwrap_or_else(|e| {
                warn!("Failed to count {}: {}", table, e);
                0
            })
    }
}
