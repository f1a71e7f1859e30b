//! Chat Creation API Tests

use std::collections::BTreeSet;
use std::sync::Arc;

use axum::http::StatusCode;
use futures::future::join_all;
use pretty_assertions::assert_eq;

use chat_ingest::infrastructure::store::StoreOperation;

use crate::common::{body_json, TestApp, CHAT_QUEUE};

#[tokio::test]
async fn test_first_chat_gets_number_one() {
    let app = TestApp::new().await;

    let response = app.create_chat("abc").await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["chat"]["number"], 1);
    assert_eq!(json["chat"]["application_token"], "abc");
    assert!(json["chat"]["timestamp"].is_string());

    assert_eq!(app.store.value("application:abc").as_deref(), Some("1"));
    assert_eq!(app.store.value("application:abc:chat:1").as_deref(), Some("0"));
    assert_eq!(
        app.store.value("application:abc:last_chat_number").as_deref(),
        Some("1")
    );
}

#[tokio::test]
async fn test_chat_numbers_increase() {
    let app = TestApp::new().await;

    for expected in 1..=3 {
        let json = body_json(app.create_chat("abc").await).await;
        assert_eq!(json["chat"]["number"], expected);
    }
    assert_eq!(app.store.value("application:abc").as_deref(), Some("3"));
}

#[tokio::test]
async fn test_applications_are_numbered_independently() {
    let app = TestApp::new().await;
    app.register_application("xyz").await;

    app.create_chat("abc").await;
    app.create_chat("abc").await;
    let json = body_json(app.create_chat("xyz").await).await;

    assert_eq!(json["chat"]["number"], 1);
}

#[tokio::test]
async fn test_unknown_application_is_not_found_and_writes_nothing() {
    let app = TestApp::new().await;
    let keys_before = app.store.keys();
    let writes_before = app.store.write_count();

    let response = app.create_chat("ghost").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Application with token ghost not found"})
    );
    assert_eq!(app.store.keys(), keys_before);
    assert_eq!(app.store.write_count(), writes_before);
}

#[tokio::test]
async fn test_job_descriptor_on_queue() {
    let app = TestApp::new().await;

    app.create_chat("abc").await;

    let queue = app.store.list(CHAT_QUEUE);
    assert_eq!(queue.len(), 1);
    let job: serde_json::Value = serde_json::from_str(&queue[0]).unwrap();
    assert_eq!(job["class"], "ChatsCreatorJob");
    assert_eq!(job["queue"], "chats_creation_queue");
    assert_eq!(job["retry"], true);
    assert_eq!(job["args"][0]["number"], 1);
    assert_eq!(job["args"][0]["application_token"], "abc");

    let jid = job["jid"].as_str().unwrap();
    assert_eq!(jid.len(), 24);
    assert!(jid.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    assert_eq!(job["created_at"], job["enqueued_at"]);
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let app = TestApp::new().await;
    app.store.fail_on(StoreOperation::Incr);

    let response = app.create_chat("abc").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Internal server error"})
    );
    assert!(app.store.list(CHAT_QUEUE).is_empty());
}

#[tokio::test]
async fn test_failed_enqueue_leaves_gap_not_duplicate() {
    let app = TestApp::new().await;
    app.store.fail_on(StoreOperation::RPush);

    let response = app.create_chat("abc").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    app.store.heal();
    let json = body_json(app.create_chat("abc").await).await;
    assert_eq!(json["chat"]["number"], 2);
}

#[tokio::test]
async fn test_concurrent_chats_are_dense_and_unique() {
    let app = Arc::new(TestApp::new().await);

    let responses = join_all((0..40).map(|_| {
        let app = app.clone();
        tokio::spawn(async move { body_json(app.create_chat("abc").await).await })
    }))
    .await;

    let numbers: BTreeSet<i64> = responses
        .into_iter()
        .map(|r| r.unwrap()["chat"]["number"].as_i64().unwrap())
        .collect();

    assert_eq!(numbers, (1..=40).collect::<BTreeSet<i64>>());
    assert_eq!(app.store.list(CHAT_QUEUE).len(), 40);
}
