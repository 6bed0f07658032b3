use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use forum_types::{HealthResponse, StorageHealth};

use crate::state::AppState;

/// Health check endpoint. Answers 503 when the message store does not respond.
pub async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let backend = state.store.backend();

    let (code, status, storage_status) = match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "healthy", "connected"),
        Err(e) => {
            tracing::warn!(%backend, "Message store ping failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "disconnected")
        }
    };

    let mut body = HealthResponse::healthy(env!("CARGO_PKG_VERSION"));
    body.status = status.to_string();
    body.storage = Some(StorageHealth {
        backend: backend.to_string(),
        status: storage_status.to_string(),
    });

    (code, Json(body))
}
