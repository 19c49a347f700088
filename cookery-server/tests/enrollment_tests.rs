//! Concurrent enrollment tests
//!
//! Many users racing for the last seats of one class must never push the
//! class past capacity.

mod helpers;

use axum::http::StatusCode;
use helpers::TestApp;
use serde_json::json;
use tower::util::ServiceExt; // for `oneshot` method

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_enrollment_never_overbooks() {
    let app = TestApp::start().await;

    let response = app
        .post_json(
            "/api/masterclasses",
            json!({"title": "Knife skills", "chef_id": 1, "datetime": "2099-02-01 10:00", "max_students": 3}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let class_id = helpers::extract_json(response).await["id"].as_i64().unwrap();

    let mut handles = Vec::new();
    for user_id in 1..=12 {
        let router = app.router.clone();
        let body = json!({"user_id": user_id, "master_class_id": class_id}).to_string();
        handles.push(tokio::spawn(async move {
            let request = helpers::json_request("POST", "/api/enroll", &body);
            router.oneshot(request).await.unwrap().status()
        }));
    }

    let mut enrolled = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            StatusCode::OK => enrolled += 1,
            StatusCode::CONFLICT => conflicts += 1,
            other => panic!("Unexpected status {}", other),
        }
    }

    assert_eq!(enrolled, 3);
    assert_eq!(conflicts, 9);

    let rows: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM user_history WHERE master_class_id = ?")
            .bind(class_id)
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(rows, 3);
}

#[tokio::test]
async fn test_zero_capacity_class_rejects_everyone() {
    let app = TestApp::start().await;

    let response = app
        .post_json(
            "/api/masterclasses",
            json!({"title": "Closed", "chef_id": 2, "datetime": "2099-02-01 10:00"}),
        )
        .await;
    let class_id = helpers::extract_json(response).await["id"].as_i64().unwrap();

    let response = app
        .post_json("/api/enroll", json!({"user_id": 1, "master_class_id": class_id}))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(app.count("user_history").await, 0);
}
