//! Integration tests for database initialization and corruption recovery

use cookery_common::db::init::{init_database, probe_database, ProbeOutcome};
use cookery_common::db::seed::{seed_database, SeedOutcome};
use tempfile::TempDir;

async fn table_count(pool: &sqlx::SqlitePool) -> i64 {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("cooking_platform.db");

    let pool = init_database(&db_path, false)
        .await
        .expect("Database initialization failed");

    assert!(db_path.exists(), "Database file was not created");
    assert_eq!(table_count(&pool).await, 6);
}

#[tokio::test]
async fn test_database_opens_existing_and_keeps_data() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("cooking_platform.db");

    let pool = init_database(&db_path, false).await.unwrap();
    assert_eq!(
        seed_database(&pool).await.unwrap(),
        SeedOutcome::Seeded { inserted: 12 }
    );
    pool.close().await;

    assert_eq!(probe_database(&db_path).await, ProbeOutcome::Healthy);

    let pool = init_database(&db_path, false).await.unwrap();
    assert_eq!(seed_database(&pool).await.unwrap(), SeedOutcome::Skipped);

    let chefs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chefs")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(chefs, 3);
}

#[tokio::test]
async fn test_corrupted_database_is_recreated() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("cooking_platform.db");

    // Not an SQLite file at all
    std::fs::write(&db_path, vec![0x5a_u8; 4096]).unwrap();

    assert!(matches!(
        probe_database(&db_path).await,
        ProbeOutcome::Corrupt(_)
    ));

    let pool = init_database(&db_path, false)
        .await
        .expect("Corrupted database should be replaced");

    assert_eq!(table_count(&pool).await, 6);
    assert_eq!(
        seed_database(&pool).await.unwrap(),
        SeedOutcome::Seeded { inserted: 12 }
    );
}

#[tokio::test]
async fn test_unreadable_path_is_left_untouched() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("cooking_platform.db");

    // A directory where the database file should be
    std::fs::create_dir(&db_path).unwrap();
    let keep = db_path.join("keep.txt");
    std::fs::write(&keep, "do not delete").unwrap();

    assert!(matches!(
        probe_database(&db_path).await,
        ProbeOutcome::Inconclusive(_)
    ));

    assert!(init_database(&db_path, false).await.is_err());
    assert!(db_path.is_dir());
    assert_eq!(std::fs::read_to_string(&keep).unwrap(), "do not delete");
}

#[tokio::test]
async fn test_foreign_key_enforcement_is_configurable() {
    let dir = TempDir::new().unwrap();

    let relaxed = init_database(&dir.path().join("relaxed.db"), false)
        .await
        .unwrap();
    let dangling = sqlx::query("INSERT INTO recipes (title, chef_id) VALUES ('Orphan', 999)")
        .execute(&relaxed)
        .await;
    assert!(dangling.is_ok(), "Dangling chef reference accepted when not enforced");

    let strict = init_database(&dir.path().join("strict.db"), true)
        .await
        .unwrap();
    let dangling = sqlx::query("INSERT INTO recipes (title, chef_id) VALUES ('Orphan', 999)")
        .execute(&strict)
        .await;
    assert!(dangling.is_err(), "Dangling chef reference rejected when enforced");
}
