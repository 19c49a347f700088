//! Database initialization
//!
//! Opens (or creates) the platform database and makes sure the six platform
//! tables exist. An existing file that SQLite reports as corrupt is deleted
//! and rebuilt from scratch before the pool is opened.
//!
//! **Data loss warning:** corruption recovery removes the database file and
//! its WAL/SHM siblings. Only SQLITE_CORRUPT and SQLITE_NOTADB trigger it;
//! any other probe failure is logged and left to the real open to report.

use crate::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, Connection, SqlitePool};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info, warn};

const SQLITE_CORRUPT: i32 = 11;
const SQLITE_NOTADB: i32 = 26;

/// Table name and its idempotent DDL, in dependency order
pub const TABLES: [(&str, &str); 6] = [
    (
        "chefs",
        r#"
        CREATE TABLE IF NOT EXISTS chefs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            speciality TEXT,
            rating REAL DEFAULT 0,
            avatar TEXT,
            description TEXT
        )
        "#,
    ),
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT UNIQUE NOT NULL,
            email TEXT UNIQUE NOT NULL,
            preferences TEXT
        )
        "#,
    ),
    (
        "recipes",
        r#"
        CREATE TABLE IF NOT EXISTS recipes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            ingredients TEXT,
            chef_id INTEGER,
            video_url TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (chef_id) REFERENCES chefs (id)
        )
        "#,
    ),
    (
        "master_classes",
        r#"
        CREATE TABLE IF NOT EXISTS master_classes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            chef_id INTEGER,
            datetime DATETIME,
            duration INTEGER,
            price INTEGER,
            max_students INTEGER,
            description TEXT,
            FOREIGN KEY (chef_id) REFERENCES chefs (id)
        )
        "#,
    ),
    (
        "subscriptions",
        r#"
        CREATE TABLE IF NOT EXISTS subscriptions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER,
            chef_id INTEGER,
            UNIQUE(user_id, chef_id),
            FOREIGN KEY (user_id) REFERENCES users (id),
            FOREIGN KEY (chef_id) REFERENCES chefs (id)
        )
        "#,
    ),
    (
        "user_history",
        r#"
        CREATE TABLE IF NOT EXISTS user_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER,
            master_class_id INTEGER,
            attended_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            UNIQUE(user_id, master_class_id),
            FOREIGN KEY (user_id) REFERENCES users (id),
            FOREIGN KEY (master_class_id) REFERENCES master_classes (id)
        )
        "#,
    ),
];

/// Result of checking an existing database file before opening the pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The metadata query succeeded
    Healthy,
    /// SQLite reported the file as corrupt or not a database
    Corrupt(String),
    /// The probe failed for another reason (permissions, locking, ...)
    Inconclusive(String),
}

/// Initialize database connection and create tables if needed
///
/// Open or connect failures are returned to the caller, which treats them as
/// fatal. Per-table creation failures are logged and skipped.
pub async fn init_database(db_path: &Path, enforce_foreign_keys: bool) -> Result<SqlitePool> {
    if db_path.exists() {
        match probe_database(db_path).await {
            ProbeOutcome::Healthy => {}
            ProbeOutcome::Corrupt(reason) => {
                warn!(
                    "Existing database {} is corrupted ({}), removing and recreating",
                    db_path.display(),
                    reason
                );
                remove_database_files(db_path)?;
            }
            ProbeOutcome::Inconclusive(reason) => {
                warn!(
                    "Could not probe existing database {}: {}",
                    db_path.display(),
                    reason
                );
            }
        }
    }

    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(enforce_foreign_keys)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_millis(5000));

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    if enforce_foreign_keys {
        info!("Foreign key enforcement enabled");
    }

    create_tables(&pool).await;

    Ok(pool)
}

/// Create all platform tables (idempotent)
///
/// Returns the number of tables that are in place afterwards.
pub async fn create_tables(pool: &SqlitePool) -> usize {
    let mut ready = 0;

    for (name, ddl) in TABLES {
        match sqlx::query(ddl).execute(pool).await {
            Ok(_) => {
                ready += 1;
                info!("Table {} ready", name);
            }
            Err(e) => error!("Error creating table {}: {}", name, e),
        }
    }

    ready
}

/// Run a trivial metadata query against an existing database file
pub async fn probe_database(db_path: &Path) -> ProbeOutcome {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(false);

    let result = async {
        let mut conn = options.connect().await?;
        let _count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master")
            .fetch_one(&mut conn)
            .await?;
        conn.close().await?;
        Ok::<_, sqlx::Error>(())
    }
    .await;

    match result {
        Ok(()) => ProbeOutcome::Healthy,
        Err(sqlx::Error::Database(db_err)) => {
            let message = db_err.message().to_string();
            if is_corruption_code(db_err.code().as_deref()) {
                ProbeOutcome::Corrupt(message)
            } else {
                ProbeOutcome::Inconclusive(message)
            }
        }
        Err(e) => ProbeOutcome::Inconclusive(e.to_string()),
    }
}

/// Whether an SQLite result code (possibly extended) means the file is damaged
fn is_corruption_code(code: Option<&str>) -> bool {
    let primary = code
        .and_then(|code| code.parse::<i32>().ok())
        .map(|code| code & 0xff);

    matches!(primary, Some(SQLITE_CORRUPT) | Some(SQLITE_NOTADB))
}

/// Remove a database file along with its WAL and shared-memory siblings
fn remove_database_files(db_path: &Path) -> Result<()> {
    std::fs::remove_file(db_path)?;

    for suffix in ["-wal", "-shm"] {
        let sibling = sibling_path(db_path, suffix);
        match std::fs::remove_file(&sibling) {
            Ok(()) => info!("Removed {}", sibling.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn sibling_path(db_path: &Path, suffix: &str) -> PathBuf {
    let mut name = db_path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
