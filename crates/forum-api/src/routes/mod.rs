pub mod health;
pub mod messages;

use std::sync::Arc;

use axum::{http::Uri, routing::get, Router};

use crate::{error::ApiError, state::AppState};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check).fallback(not_found))
        .route(
            "/api/messages",
            get(messages::list_messages)
                .post(messages::create_message)
                .fallback(not_found),
        )
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
