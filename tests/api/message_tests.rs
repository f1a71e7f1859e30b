//! Message Creation API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use test_case::test_case;

use chat_ingest::infrastructure::store::StoreOperation;

use crate::common::{body_json, TestApp, MESSAGE_QUEUE};

async fn app_with_chat() -> TestApp {
    let app = TestApp::new().await;
    let response = app.create_chat("abc").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    app
}

#[tokio::test]
async fn test_messages_numbered_within_chat() {
    let app = app_with_chat().await;

    let first = app.create_message("abc", "1", "hi").await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let first = body_json(first).await;
    assert_eq!(first["message"]["number"], 1);
    assert_eq!(first["message"]["body"], "hi");
    assert_eq!(first["message"]["chat_number"], 1);
    assert_eq!(first["message"]["application_token"], "abc");

    let second = body_json(app.create_message("abc", "1", "there").await).await;
    assert_eq!(second["message"]["number"], 2);

    assert_eq!(app.store.value("application:abc:chat:1").as_deref(), Some("2"));
    assert_eq!(
        app.store
            .value("application:abc:chat:1:last_message_number")
            .as_deref(),
        Some("2")
    );
}

#[tokio::test]
async fn test_chats_are_numbered_independently() {
    let app = app_with_chat().await;
    app.create_chat("abc").await;

    app.create_message("abc", "1", "a").await;
    app.create_message("abc", "1", "b").await;
    let json = body_json(app.create_message("abc", "2", "c").await).await;

    assert_eq!(json["message"]["number"], 1);
    assert_eq!(json["message"]["chat_number"], 2);
}

#[tokio::test]
async fn test_job_descriptor_on_queue() {
    let app = app_with_chat().await;

    app.create_message("abc", "1", "hi").await;

    let queue = app.store.list(MESSAGE_QUEUE);
    assert_eq!(queue.len(), 1);
    let job: serde_json::Value = serde_json::from_str(&queue[0]).unwrap();
    assert_eq!(job["class"], "MessageCreatorJob");
    assert_eq!(job["queue"], "messages_creation_queue");
    assert_eq!(job["retry"], true);
    assert_eq!(
        job["args"][0],
        serde_json::json!({
            "number": 1,
            "body": "hi",
            "chat_number": 1,
            "application_token": "abc",
            "timestamp": job["args"][0]["timestamp"],
        })
    );
}

#[tokio::test]
async fn test_unknown_chat_is_not_found() {
    let app = app_with_chat().await;
    let writes_before = app.store.write_count();

    let response = app.create_message("abc", "9", "hi").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Chat 9 not found for application abc"})
    );
    assert_eq!(app.store.write_count(), writes_before);
    assert_eq!(app.store.value("application:abc:chat:9:last_message_number"), None);
}

#[tokio::test]
async fn test_unknown_application_is_not_found() {
    let app = app_with_chat().await;
    let writes_before = app.store.write_count();

    let response = app.create_message("ghost", "1", "hi").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Application with token ghost not found"})
    );
    assert_eq!(app.store.write_count(), writes_before);
}

#[test_case("abc" ; "not a number")]
#[test_case("1.5" ; "fractional")]
#[test_case("99999999999999999999" ; "out of range")]
#[tokio::test]
async fn test_malformed_chat_number_is_bad_request(chat_number: &str) {
    let app = app_with_chat().await;
    let writes_before = app.store.write_count();

    let response = app.create_message("abc", chat_number, "hi").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Invalid chat number format"})
    );
    assert_eq!(app.store.write_count(), writes_before);
}

#[test_case("0" ; "zero")]
#[test_case("-1" ; "negative")]
#[tokio::test]
async fn test_non_positive_chat_number_is_not_found(chat_number: &str) {
    let app = app_with_chat().await;
    let writes_before = app.store.write_count();

    let response = app.create_message("abc", chat_number, "hi").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({
            "error": format!("Chat {} not found for application abc", chat_number)
        })
    );
    assert_eq!(app.store.write_count(), writes_before);
    assert!(app.store.list(MESSAGE_QUEUE).is_empty());
}

#[test_case(r#"{"message": {"body": ""}}"# ; "empty body")]
#[test_case(r#"{"message": {}}"# ; "missing body")]
#[test_case(r#"{}"# ; "missing message")]
#[test_case("not json" ; "malformed json")]
#[tokio::test]
async fn test_invalid_body_is_bad_request(payload: &str) {
    let app = app_with_chat().await;
    let writes_before = app.store.write_count();

    let response = app
        .post_json("/api/v1/applications/abc/chats/1/messages", payload)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().starts_with("Invalid request body"));
    assert_eq!(app.store.write_count(), writes_before);
    assert!(app.store.list(MESSAGE_QUEUE).is_empty());
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let app = app_with_chat().await;
    app.store.fail_on(StoreOperation::Exists);

    let response = app.create_message("abc", "1", "hi").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Internal server error"})
    );
}
