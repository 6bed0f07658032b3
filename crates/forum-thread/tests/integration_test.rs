use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use forum_client::StorageClient;
use forum_persist::{InMemoryMessageStore, MessageStore};
use forum_thread::{build_router, config::Config, state::AppState};
use serde_json::Value;
use tower::ServiceExt;

async fn spawn_storage_api() -> (String, Arc<dyn MessageStore>) {
    let store: Arc<dyn MessageStore> = Arc::new(InMemoryMessageStore::new());
    let state = Arc::new(forum_api::state::AppState::new(
        forum_api::config::Config::default(),
        Arc::clone(&store),
    ));
    let app = forum_api::build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), store)
}

async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn thread_app(api_url: &str) -> Router {
    let storage = StorageClient::new(api_url, Duration::from_secs(5)).unwrap();
    build_router(Arc::new(AppState::new(Config::default(), storage)))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, String, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_thread_page_lists_messages_newest_first() {
    let (api_url, store) = spawn_storage_api().await;
    store.create(Some("User1"), Some("Message 1")).await.unwrap();
    store.create(Some("User2"), Some("Message 2")).await.unwrap();
    let app = thread_app(&api_url);

    let (status, content_type, text) = call(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/html; charset=utf-8");
    assert!(text.contains("messages"));
    assert!(text.find("Message 2").unwrap() < text.find("Message 1").unwrap());
}

#[tokio::test]
async fn test_thread_page_with_empty_store() {
    let (api_url, _) = spawn_storage_api().await;
    let app = thread_app(&api_url);

    let (status, _, text) = call(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("No messages yet."));
}

#[tokio::test]
async fn test_thread_page_degrades_when_storage_unreachable() {
    let app = thread_app(&unreachable_url().await);

    let (status, content_type, text) = call(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(text.contains("messages"));
    assert!(text.contains("storage service is unavailable"));
}

#[tokio::test]
async fn test_messages_json() {
    let (api_url, store) = spawn_storage_api().await;
    store.create(Some("User1"), Some("Message 1")).await.unwrap();
    store.create(Some("User2"), Some("Message 2")).await.unwrap();
    let app = thread_app(&api_url);

    let (status, content_type, text) = call(&app, get("/messages")).await;
    let body: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "application/json");
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 2);
    assert_eq!(body["messages"][0]["content"], "Message 2");
    assert!(body["messages"][0]["_id"].is_string());
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_messages_json_when_storage_unreachable() {
    let app = thread_app(&unreachable_url().await);

    let (status, content_type, text) = call(&app, get("/messages")).await;
    let body: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "application/json");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "storage service unavailable");
    assert!(!text.contains("http://"));
}

#[tokio::test]
async fn test_messages_json_when_storage_fails() {
    let (api_url, store) = spawn_storage_api().await;
    store.close().await.unwrap();
    let app = thread_app(&api_url);

    let (status, _, text) = call(&app, get("/messages")).await;
    let body: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "storage service answered 500");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = thread_app(&unreachable_url().await);

    let (status, _, _) = call(&app, get("/route-inexistante")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_on_known_path_is_not_found() {
    let app = thread_app(&unreachable_url().await);

    for (method, uri) in [("POST", "/messages"), ("POST", "/"), ("DELETE", "/health")] {
        let request = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
        let (status, content_type, _) = call(&app, request).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert!(content_type.starts_with("text/html"));
    }
}

#[tokio::test]
async fn test_health() {
    let app = thread_app(&unreachable_url().await);

    let (status, _, text) = call(&app, get("/health")).await;
    let body: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}
