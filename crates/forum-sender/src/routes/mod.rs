pub mod form;

use std::sync::Arc;

use axum::{
    http::{StatusCode, Uri},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use forum_types::HealthResponse;

use crate::{state::AppState, templates};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(form::show_form).fallback(not_found))
        .route("/send", post(form::send_message).fallback(not_found))
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
