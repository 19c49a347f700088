//! Chef queries

use cookery_common::db::{Chef, NewChef};
use cookery_common::Result;

use super::{decode_rows, Store};

impl Store {
    pub async fn list_chefs(&self) -> Result<Vec<Chef>> {
        let rows = sqlx::query(
            "SELECT id, name, speciality, rating, avatar, description FROM chefs ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(decode_rows(&rows, "chef"))
    }

    pub async fn create_chef(&self, chef: NewChef) -> Result<Chef> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO chefs (name, speciality, rating, avatar, description)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&chef.name)
        .bind(&chef.speciality)
        .bind(chef.rating)
        .bind(&chef.avatar)
        .bind(&chef.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(chef.into_chef(id))
    }
}
