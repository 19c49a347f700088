//! Test helpers for cookery-server integration tests
//!
//! Provides [`TestApp`]: a seeded database in a temporary directory, a landing
//! page and a static directory, wired into the real router.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use cookery_common::db::{init_database, seed_database, SeedOutcome};
use cookery_server::{build_router, AppState, SiteFiles, Store};
use serde_json::Value;
use sqlx::SqlitePool;
use std::path::PathBuf;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

pub const INDEX_HTML: &str = "<!doctype html><title>Cookery</title>";
pub const STATIC_CSS: &str = "body { margin: 0; }";

/// Router over a freshly seeded temporary database
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub db_path: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    /// Seeded database, foreign keys off (the server default)
    pub async fn start() -> Self {
        Self::start_with(false).await
    }

    /// Seeded database with the given foreign key enforcement
    pub async fn start_with(enforce_foreign_keys: bool) -> Self {
        let dir = TempDir::new().expect("Should create temp dir");
        let db_path = dir.path().join("cooking_platform.db");

        let pool = init_database(&db_path, enforce_foreign_keys)
            .await
            .expect("Should open test database");
        let outcome = seed_database(&pool).await.expect("Should seed");
        assert_eq!(outcome, SeedOutcome::Seeded { inserted: 12 });

        let index_file = dir.path().join("index.html");
        std::fs::write(&index_file, INDEX_HTML).unwrap();
        let static_dir = dir.path().join("static");
        std::fs::create_dir(&static_dir).unwrap();
        std::fs::write(static_dir.join("app.css"), STATIC_CSS).unwrap();

        let site = SiteFiles {
            index_file,
            static_dir,
        };
        let router = build_router(AppState::new(Store::new(pool.clone()), site));

        Self {
            router,
            pool,
            db_path,
            _dir: dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(test_request("GET", uri)).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Response<Body> {
        self.send(json_request("POST", uri, &body.to_string())).await
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

pub fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Extract JSON body from response
pub async fn extract_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

pub async fn extract_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
}
