//! Store: database access for the platform API
//!
//! [`Store`] wraps the SQLite pool and is handed to handlers through the
//! router state. Queries live in one submodule per resource, each adding an
//! `impl Store` block.
//!
//! List queries decode row by row. A row that fails to decode is logged and
//! skipped; the rest of the list is still returned.

mod chefs;
mod enrollments;
mod master_classes;
pub mod recommendations;
mod recipes;
mod stats;
mod subscriptions;
mod users;

pub use enrollments::{ClassCapacity, EnrollOutcome};
pub use recommendations::{Predicate, RecommendationQuery};

use cookery_common::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};
use tracing::warn;

/// Shared handle to the platform database
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Round-trip a trivial query to confirm the database answers
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Decode rows into `T`, skipping and logging rows that fail
fn decode_rows<T>(rows: &[SqliteRow], what: &str) -> Vec<T>
where
    T: for<'r> FromRow<'r, SqliteRow>,
{
    rows.iter()
        .filter_map(|row| match T::from_row(row) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Skipping malformed {} row: {}", what, e);
                None
            }
        })
        .collect()
}
