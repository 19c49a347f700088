//! First-run seed data
//!
//! The dataset is inserted only when the chefs table is empty. Individual
//! insert failures are logged and skipped, so a partially seeded database is
//! tolerated.

use crate::db::models::{encode_ingredients, NewChef, NewMasterClass, NewRecipe, NewUser};
use crate::Result;
use sqlx::SqlitePool;
use tracing::{error, info};

/// Outcome of a seeding attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Chefs already present, nothing inserted
    Skipped,
    /// Seed dataset inserted; counts rows that actually went in
    Seeded { inserted: usize },
}

const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/150";

pub fn seed_chefs() -> Vec<NewChef> {
    vec![
        NewChef {
            name: "Гордон Рамзи".to_string(),
            speciality: "Европейская кухня".to_string(),
            rating: 4.9,
            avatar: PLACEHOLDER_AVATAR.to_string(),
            description: "Мишленовский шеф-повар с мировым именем".to_string(),
        },
        NewChef {
            name: "Юлия Высоцкая".to_string(),
            speciality: "Русская кухня".to_string(),
            rating: 4.7,
            avatar: PLACEHOLDER_AVATAR.to_string(),
            description: "Популярный телеведущий и кулинар".to_string(),
        },
        NewChef {
            name: "Джейми Оливер".to_string(),
            speciality: "Итальянская кухня".to_string(),
            rating: 4.8,
            avatar: PLACEHOLDER_AVATAR.to_string(),
            description: "Британский повар, ресторатор и автор кулинарных книг".to_string(),
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn seed_recipes() -> Vec<NewRecipe> {
    vec![
        NewRecipe {
            title: "Говядина Веллингтон".to_string(),
            description: "Классическое английское блюдо".to_string(),
            ingredients: strings(&["говядина", "тесто слоеное", "грибы", "паштет"]),
            chef_id: 1,
            video_url: "https://www.youtube.com/watch?v=example1".to_string(),
        },
        NewRecipe {
            title: "Борщ украинский".to_string(),
            description: "Традиционный славянский суп".to_string(),
            ingredients: strings(&["свекла", "капуста", "морковь", "лук", "мясо"]),
            chef_id: 2,
            video_url: "https://www.youtube.com/watch?v=example2".to_string(),
        },
        NewRecipe {
            title: "Паста Карбонара".to_string(),
            description: "Римская паста с беконом и яйцами".to_string(),
            ingredients: strings(&["спагетти", "бекон", "яйца", "пармезан", "черный перец"]),
            chef_id: 3,
            video_url: "https://www.youtube.com/watch?v=example3".to_string(),
        },
        NewRecipe {
            title: "Ризотто с грибами".to_string(),
            description: "Кремовое итальянское ризотто".to_string(),
            ingredients: strings(&["рис арборио", "грибы", "лук", "вино белое", "пармезан"]),
            chef_id: 3,
            video_url: "https://www.youtube.com/watch?v=example4".to_string(),
        },
    ]
}

pub fn seed_master_classes() -> Vec<NewMasterClass> {
    vec![
        NewMasterClass {
            title: "Секреты идеального стейка".to_string(),
            chef_id: 1,
            datetime: "2024-06-01 18:00".to_string(),
            duration: 120,
            price: 5000,
            max_students: 15,
            description: "Научитесь готовить стейк как настоящий профессионал".to_string(),
        },
        NewMasterClass {
            title: "Домашняя выпечка".to_string(),
            chef_id: 2,
            datetime: "2024-06-02 16:00".to_string(),
            duration: 180,
            price: 3500,
            max_students: 20,
            description: "Традиционные рецепты русской выпечки".to_string(),
        },
        NewMasterClass {
            title: "Итальянская паста".to_string(),
            chef_id: 3,
            datetime: "2024-06-03 19:00".to_string(),
            duration: 90,
            price: 4000,
            max_students: 12,
            description: "Готовим пасту с нуля до подачи".to_string(),
        },
    ]
}

pub fn seed_users() -> Vec<NewUser> {
    vec![
        NewUser {
            username: "foodlover".to_string(),
            email: "food@example.com".to_string(),
            preferences: "итальянская,европейская".to_string(),
        },
        NewUser {
            username: "homecook".to_string(),
            email: "home@example.com".to_string(),
            preferences: "русская,домашняя".to_string(),
        },
    ]
}

/// Insert the seed dataset if the chefs table is empty
///
/// Only the initial chef count can fail the call; insert errors are logged.
pub async fn seed_database(pool: &SqlitePool) -> Result<SeedOutcome> {
    let chef_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chefs")
        .fetch_one(pool)
        .await?;

    if chef_count > 0 {
        info!("Data already exists, skipping seed");
        return Ok(SeedOutcome::Skipped);
    }

    info!("Seeding database...");
    let mut inserted = 0;

    for chef in seed_chefs() {
        let result = sqlx::query(
            "INSERT INTO chefs (name, speciality, rating, avatar, description) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&chef.name)
        .bind(&chef.speciality)
        .bind(chef.rating)
        .bind(&chef.avatar)
        .bind(&chef.description)
        .execute(pool)
        .await;

        match result {
            Ok(_) => inserted += 1,
            Err(e) => error!("Error inserting chef {}: {}", chef.name, e),
        }
    }

    for recipe in seed_recipes() {
        let ingredients = match encode_ingredients(&recipe.ingredients) {
            Ok(json) => json,
            Err(e) => {
                error!("Error encoding ingredients for {}: {}", recipe.title, e);
                continue;
            }
        };

        let result = sqlx::query(
            "INSERT INTO recipes (title, description, ingredients, chef_id, video_url) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&recipe.title)
        .bind(&recipe.description)
        .bind(ingredients)
        .bind(recipe.chef_id)
        .bind(&recipe.video_url)
        .execute(pool)
        .await;

        match result {
            Ok(_) => inserted += 1,
            Err(e) => error!("Error inserting recipe {}: {}", recipe.title, e),
        }
    }

    for class in seed_master_classes() {
        let result = sqlx::query(
            r#"
            INSERT INTO master_classes (title, chef_id, datetime, duration, price, max_students, description)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&class.title)
        .bind(class.chef_id)
        .bind(&class.datetime)
        .bind(class.duration)
        .bind(class.price)
        .bind(class.max_students)
        .bind(&class.description)
        .execute(pool)
        .await;

        match result {
            Ok(_) => inserted += 1,
            Err(e) => error!("Error inserting master class {}: {}", class.title, e),
        }
    }

    for user in seed_users() {
        let result = sqlx::query("INSERT INTO users (username, email, preferences) VALUES (?, ?, ?)")
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.preferences)
            .execute(pool)
            .await;

        match result {
            Ok(_) => inserted += 1,
            Err(e) => error!("Error inserting user {}: {}", user.username, e),
        }
    }

    info!("Database seeded successfully ({} rows)", inserted);
    Ok(SeedOutcome::Seeded { inserted })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init::create_tables;

    #[tokio::test]
    async fn test_seed_inserts_full_dataset_once() {
        let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
        create_tables(&pool).await;

        let first = seed_database(&pool).await.unwrap();
        assert_eq!(first, SeedOutcome::Seeded { inserted: 12 });

        let second = seed_database(&pool).await.unwrap();
        assert_eq!(second, SeedOutcome::Skipped);

        for (table, expected) in [
            ("chefs", 3),
            ("recipes", 4),
            ("master_classes", 3),
            ("users", 2),
        ] {
            let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
                .fetch_one(&pool)
                .await
                .unwrap();
            assert_eq!(count, expected, "Unexpected row count in {}", table);
        }
    }

    #[tokio::test]
    async fn test_seed_tolerates_insert_failures() {
        let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
        create_tables(&pool).await;

        // A pre-existing user collides with the seeded username
        sqlx::query("INSERT INTO users (username, email, preferences) VALUES ('foodlover', 'other@example.com', '')")
            .execute(&pool)
            .await
            .unwrap();

        let outcome = seed_database(&pool).await.unwrap();
        assert_eq!(outcome, SeedOutcome::Seeded { inserted: 11 });
    }

    #[test]
    fn test_seed_recipes_reference_seed_chefs() {
        let chef_count = seed_chefs().len() as i64;
        for recipe in seed_recipes() {
            assert!(recipe.chef_id >= 1 && recipe.chef_id <= chef_count);
        }
    }
}
