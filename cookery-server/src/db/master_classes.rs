//! Master class queries

use cookery_common::db::{MasterClass, NewMasterClass};
use cookery_common::Result;

use super::recommendations::RecommendationQuery;
use super::{decode_rows, Store};

pub(crate) const MASTER_CLASS_SELECT: &str = "SELECT mc.id, mc.title, mc.chef_id, c.name AS chef_name, \
     mc.datetime, mc.duration, mc.price, mc.max_students, mc.description \
     FROM master_classes mc \
     JOIN chefs c ON mc.chef_id = c.id";

impl Store {
    /// All master classes with chef names, earliest first
    pub async fn list_master_classes(&self) -> Result<Vec<MasterClass>> {
        let sql = format!("{} ORDER BY mc.datetime", MASTER_CLASS_SELECT);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        Ok(decode_rows(&rows, "master class"))
    }

    pub async fn create_master_class(&self, class: NewMasterClass) -> Result<MasterClass> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO master_classes (title, chef_id, datetime, duration, price, max_students, description)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&class.title)
        .bind(class.chef_id)
        .bind(&class.datetime)
        .bind(class.duration)
        .bind(class.price)
        .bind(class.max_students)
        .bind(&class.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(class.into_master_class(id))
    }

    /// Run a recommendation query built by [`RecommendationQuery`]
    pub async fn recommend_master_classes(
        &self,
        query: &RecommendationQuery,
    ) -> Result<Vec<MasterClass>> {
        let mut builder = query.to_builder();
        let rows = builder.build().fetch_all(&self.pool).await?;

        Ok(decode_rows(&rows, "master class"))
    }
}
