//! Recommendation query builder
//!
//! Recommendations are future master classes narrowed by what the user
//! follows and likes. The narrowing is an ordered list of [`Predicate`]s,
//! each ANDed onto the base query and rendered with bound parameters:
//!
//! | subscriptions | preferences | filter |
//! |---|---|---|
//! | yes | yes | `AND (mc.chef_id IN (..) OR c.speciality LIKE ?)` |
//! | yes | no  | `AND (mc.chef_id IN (..))` |
//! | no  | yes | `AND c.speciality LIKE ?` |
//! | no  | no  | none |
//!
//! The preference string is matched whole, as one substring.

use sqlx::{QueryBuilder, Sqlite};

use super::master_classes::MASTER_CLASS_SELECT;

/// Maximum number of recommended classes
pub const RECOMMENDATION_LIMIT: i64 = 10;

/// One filter clause over the master class / chef join
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Class taught by one of these chefs
    ChefIn(Vec<i64>),
    /// Chef speciality contains the text (`LIKE '%text%'`)
    SpecialityContains(String),
    /// Parenthesised OR of the inner predicates
    AnyOf(Vec<Predicate>),
}

impl Predicate {
    fn push_to(&self, builder: &mut QueryBuilder<'static, Sqlite>) {
        match self {
            Predicate::ChefIn(chef_ids) => {
                builder.push("mc.chef_id IN (");
                let mut ids = builder.separated(", ");
                for chef_id in chef_ids {
                    ids.push_bind(*chef_id);
                }
                ids.push_unseparated(")");
            }
            Predicate::SpecialityContains(text) => {
                builder.push("c.speciality LIKE ");
                builder.push_bind(format!("%{}%", text));
            }
            Predicate::AnyOf(inner) => {
                builder.push("(");
                for (i, predicate) in inner.iter().enumerate() {
                    if i > 0 {
                        builder.push(" OR ");
                    }
                    predicate.push_to(builder);
                }
                builder.push(")");
            }
        }
    }
}

/// Future master classes filtered by an ordered list of predicates
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationQuery {
    predicates: Vec<Predicate>,
    limit: i64,
}

impl RecommendationQuery {
    /// Build the filter for a user's subscribed chefs and preference string
    pub fn for_user(subscribed_chefs: &[i64], preferences: &str) -> Self {
        let mut predicates = Vec::new();

        if !subscribed_chefs.is_empty() {
            let mut any = vec![Predicate::ChefIn(subscribed_chefs.to_vec())];
            if !preferences.is_empty() {
                any.push(Predicate::SpecialityContains(preferences.to_string()));
            }
            predicates.push(Predicate::AnyOf(any));
        } else if !preferences.is_empty() {
            predicates.push(Predicate::SpecialityContains(preferences.to_string()));
        }

        Self {
            predicates,
            limit: RECOMMENDATION_LIMIT,
        }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Render into a parameterised statement ready to execute
    pub fn to_builder(&self) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::new(MASTER_CLASS_SELECT);
        builder.push(" WHERE mc.datetime > datetime('now')");

        for predicate in &self.predicates {
            builder.push(" AND ");
            predicate.push_to(&mut builder);
        }

        builder.push(" ORDER BY mc.datetime LIMIT ");
        builder.push_bind(self.limit);
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_sql(query: &RecommendationQuery) -> String {
        let builder = query.to_builder();
        let sql = builder.sql();
        let start = sql.find(" WHERE ").expect("WHERE clause");
        sql[start..].to_string()
    }

    #[test]
    fn test_no_subscriptions_no_preferences_has_no_filter() {
        let query = RecommendationQuery::for_user(&[], "");
        assert!(query.predicates().is_empty());
        assert_eq!(
            filter_sql(&query),
            " WHERE mc.datetime > datetime('now') ORDER BY mc.datetime LIMIT ?"
        );
    }

    #[test]
    fn test_subscriptions_and_preferences_are_or_combined() {
        let query = RecommendationQuery::for_user(&[1, 3], "итальянская");
        assert_eq!(
            query.predicates(),
            &[Predicate::AnyOf(vec![
                Predicate::ChefIn(vec![1, 3]),
                Predicate::SpecialityContains("итальянская".to_string()),
            ])]
        );
        assert_eq!(
            filter_sql(&query),
            " WHERE mc.datetime > datetime('now') AND (mc.chef_id IN (?, ?) OR c.speciality LIKE ?) ORDER BY mc.datetime LIMIT ?"
        );
    }

    #[test]
    fn test_subscriptions_only_stay_parenthesised() {
        let query = RecommendationQuery::for_user(&[2], "");
        assert_eq!(
            filter_sql(&query),
            " WHERE mc.datetime > datetime('now') AND (mc.chef_id IN (?)) ORDER BY mc.datetime LIMIT ?"
        );
    }

    #[test]
    fn test_preferences_only_is_single_and_clause() {
        let query = RecommendationQuery::for_user(&[], "русская,домашняя");
        assert_eq!(
            query.predicates(),
            &[Predicate::SpecialityContains("русская,домашняя".to_string())]
        );
        assert_eq!(
            filter_sql(&query),
            " WHERE mc.datetime > datetime('now') AND c.speciality LIKE ? ORDER BY mc.datetime LIMIT ?"
        );
    }

    #[test]
    fn test_placeholder_count_tracks_subscription_count() {
        let chefs: Vec<i64> = (1..=5).collect();
        let query = RecommendationQuery::for_user(&chefs, "x");
        let builder = query.to_builder();
        // five chef ids, one LIKE pattern, one LIMIT
        assert_eq!(builder.sql().matches('?').count(), 7);
        assert_eq!(query.limit(), RECOMMENDATION_LIMIT);
    }
}
