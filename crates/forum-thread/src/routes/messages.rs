use std::sync::Arc;

use axum::{extract::State, response::Html, Json};
use forum_types::MessageFeed;

use crate::{state::AppState, templates};

/// `GET /`: the thread page. Renders a notice instead of the list when the
/// storage API cannot be reached.
pub async fn show_thread(State(state): State<Arc<AppState>>) -> Html<String> {
    let messages = state.storage.list_messages().await.map_err(|e| {
        tracing::warn!("Failed to fetch messages: {}", e);
        e
    });

    Html(templates::render_thread(messages.as_deref()))
}

/// `GET /messages`: always 200, `success` tells whether the fetch worked.
pub async fn list_messages(State(state): State<Arc<AppState>>) -> Json<MessageFeed> {
    match state.storage.list_messages().await {
        Ok(messages) => Json(MessageFeed::loaded(messages)),
        Err(e) => {
            tracing::warn!("Failed to fetch messages: {}", e);
            Json(MessageFeed::unavailable(e.summary()))
        }
    }
}
