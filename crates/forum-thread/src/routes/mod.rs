pub mod messages;

use std::sync::Arc;

use axum::{
    http::{StatusCode, Uri},
    response::Html,
    routing::get,
    Json, Router,
};
use forum_types::HealthResponse;

use crate::{state::AppState, templates};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(messages::show_thread).fallback(not_found))
        .route("/messages", get(messages::list_messages).fallback(not_found))
        .route("/health", get(health_check).fallback(not_found))
        .fallback(not_found)
        .with_state(state)
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

async fn not_found(uri: Uri) -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(templates::render_not_found(uri.path())))
}
