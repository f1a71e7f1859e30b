//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use tower::ServiceExt;

use chat_ingest::config::{
    LogFormat, LogSettings, RedisSettings, RequestSettings, ServerSettings, Settings,
};
use chat_ingest::infrastructure::store::{keys, InMemoryStore, KeyValueStore};
use chat_ingest::startup::{build_router, AppState};

/// Application token registered by `TestApp::new`
pub const APP_TOKEN: &str = "abc";

pub const CHAT_QUEUE: &str = "queue:chats_creation_queue";
pub const MESSAGE_QUEUE: &str = "queue:messages_creation_queue";

/// Test application backed by an in-process store
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
}

impl TestApp {
    /// Create a test application with `APP_TOKEN` registered
    pub async fn new() -> Self {
        let app = Self::empty(test_settings());
        app.register_application(APP_TOKEN).await;
        app
    }

    /// Create a test application with no applications registered
    pub fn empty(settings: Settings) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let state = AppState::new(store.clone(), settings);

        Self {
            router: build_router(state),
            store,
        }
    }

    /// Register an application the way the application service would
    pub async fn register_application(&self, token: &str) {
        self.store
            .set_int(&keys::application(token), 0)
            .await
            .unwrap();
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// POST /api/v1/applications/{token}/chats
    pub async fn create_chat(&self, token: &str) -> Response {
        self.post_json(&format!("/api/v1/applications/{}/chats", token), "")
            .await
    }

    /// POST /api/v1/applications/{token}/chats/{chat_number}/messages
    pub async fn create_message(&self, token: &str, chat_number: &str, body: &str) -> Response {
        let payload = serde_json::json!({ "message": { "body": body } }).to_string();
        self.post_json(
            &format!(
                "/api/v1/applications/{}/chats/{}/messages",
                token, chat_number
            ),
            &payload,
        )
        .await
    }
}

/// Settings with short timeouts for tests
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        redis: RedisSettings {
            url: "redis://localhost:6379/0".into(),
            connect_timeout_secs: 1,
            command_timeout_ms: 500,
        },
        request: RequestSettings { timeout_secs: 2 },
        log: LogSettings {
            format: LogFormat::Pretty,
        },
        environment: "test".into(),
    }
}

/// Read a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
