//! Master class enrollment and attendance history
//!
//! Capacity is tracked by counting `user_history` rows per class. The
//! insert itself re-checks capacity inside a single statement, so two
//! requests racing for the last seat cannot both get it.

use cookery_common::db::HistoryEntry;
use cookery_common::Result;

use super::{decode_rows, Store};

/// Seats taken versus seats offered for one master class
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct ClassCapacity {
    pub enrolled: i64,
    pub max_students: i64,
}

impl ClassCapacity {
    pub fn is_full(&self) -> bool {
        self.enrolled >= self.max_students
    }
}

/// Result of a guarded enrollment insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollOutcome {
    Enrolled,
    /// The pair already existed; nothing was inserted
    AlreadyEnrolled,
    /// No seat was left when the insert ran
    Full,
}

impl Store {
    /// Current enrollment count and capacity, `None` for an unknown class
    ///
    /// A NULL `max_students` counts as zero seats.
    pub async fn class_capacity(&self, master_class_id: i64) -> Result<Option<ClassCapacity>> {
        let capacity = sqlx::query_as(
            r#"
            SELECT COUNT(uh.id) AS enrolled, COALESCE(mc.max_students, 0) AS max_students
            FROM master_classes mc
            LEFT JOIN user_history uh ON mc.id = uh.master_class_id
            WHERE mc.id = ?
            GROUP BY mc.id, mc.max_students
            "#,
        )
        .bind(master_class_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(capacity)
    }

    /// Insert a history row only while the class still has a free seat
    pub async fn enroll(&self, user_id: i64, master_class_id: i64) -> Result<EnrollOutcome> {
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO user_history (user_id, master_class_id)
            SELECT ?, ?
            WHERE (SELECT COUNT(*) FROM user_history WHERE master_class_id = ?)
                < (SELECT COALESCE(max_students, 0) FROM master_classes WHERE id = ?)
            "#,
        )
        .bind(user_id)
        .bind(master_class_id)
        .bind(master_class_id)
        .bind(master_class_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 1 {
            return Ok(EnrollOutcome::Enrolled);
        }

        if self.is_enrolled(user_id, master_class_id).await? {
            Ok(EnrollOutcome::AlreadyEnrolled)
        } else {
            Ok(EnrollOutcome::Full)
        }
    }

    pub async fn is_enrolled(&self, user_id: i64, master_class_id: i64) -> Result<bool> {
        let found: Option<i64> = sqlx::query_scalar(
            "SELECT id FROM user_history WHERE user_id = ? AND master_class_id = ?",
        )
        .bind(user_id)
        .bind(master_class_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(found.is_some())
    }

    /// Classes a user signed up for, most recent first
    pub async fn user_history(&self, user_id: i64) -> Result<Vec<HistoryEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT uh.id, uh.user_id, uh.master_class_id, mc.title AS class_title,
                   c.name AS chef_name, uh.attended_at
            FROM user_history uh
            JOIN master_classes mc ON uh.master_class_id = mc.id
            JOIN chefs c ON mc.chef_id = c.id
            WHERE uh.user_id = ?
            ORDER BY uh.attended_at DESC, uh.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(decode_rows(&rows, "history"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_full_at_or_over_limit() {
        let open = ClassCapacity {
            enrolled: 2,
            max_students: 3,
        };
        let full = ClassCapacity {
            enrolled: 3,
            max_students: 3,
        };
        let no_seats = ClassCapacity {
            enrolled: 0,
            max_students: 0,
        };

        assert!(!open.is_full());
        assert!(full.is_full());
        assert!(no_seats.is_full());
    }
}
