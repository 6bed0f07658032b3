use std::sync::Arc;
use std::time::Duration;

use forum_api::{build_router, config::Config, state::AppState};
use forum_client::{StorageClient, UpstreamError};
use forum_persist::{InMemoryMessageStore, MessageStore};

async fn spawn_storage_api() -> (String, Arc<dyn MessageStore>) {
    let store: Arc<dyn MessageStore> = Arc::new(InMemoryMessageStore::new());
    let state = Arc::new(AppState::new(Config::default(), Arc::clone(&store)));
    let app = build_router(state);

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

fn client(base_url: &str) -> StorageClient {
    StorageClient::new(base_url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_create_then_list() {
    let (base_url, _) = spawn_storage_api().await;
    let client = client(&base_url);

    let first = client.create_message("User1", "Message 1").await.unwrap();
    let second = client.create_message("  User2 ", "Message 2").await.unwrap();
    assert_eq!(second.username, "User2");

    let listed = client.list_messages().await.unwrap();
    assert_eq!(listed, vec![second, first]);
}

#[tokio::test]
async fn test_refusal_carries_error_text() {
    let (base_url, store) = spawn_storage_api().await;
    let client = client(&base_url);

    let err = client.create_message("TestUser", "   ").await.unwrap_err();

    match err {
        UpstreamError::Refused(reason) => assert_eq!(reason, "content must not be empty"),
        other => panic!("expected refusal, got {other:?}"),
    }
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_server_error_status() {
    let (base_url, store) = spawn_storage_api().await;
    store.close().await.unwrap();

    let err = client(&base_url).list_messages().await.unwrap_err();
    assert!(matches!(err, UpstreamError::Status(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn test_unreachable_service() {
    let client = client(&unreachable_url().await);

    assert!(client.list_messages().await.unwrap_err().is_unavailable());
    assert!(client.create_message("a", "b").await.unwrap_err().is_unavailable());
}
