//! Health Check API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use chat_ingest::infrastructure::store::StoreOperation;

use crate::common::{body_json, TestApp};

/// Test basic health check endpoint returns 200 OK
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"status": "ok"}));
}

/// Liveness does not depend on the store
#[tokio::test]
async fn test_health_check_ignores_store_outage() {
    let app = TestApp::new().await;
    app.store.fail_on(StoreOperation::Ping);

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_probe() {
    let app = TestApp::new().await;

    let response = app.get("/health/ready").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"status": "ready"}));
}

#[tokio::test]
async fn test_readiness_probe_reports_store_outage() {
    let app = TestApp::new().await;
    app.store.fail_on(StoreOperation::Ping);

    let response = app.get("/health/ready").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"status": "unavailable"})
    );
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_counters() {
    let app = TestApp::new().await;
    app.create_chat("abc").await;

    let response = app.get("/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("chat_ingest_sequence_allocations_total"));
    assert!(text.contains("chat_ingest_jobs_enqueued_total"));
}
