use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use forum_service::{Payload, PayloadRejection};
use forum_types::{CreateMessageRequest, Message};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

/// `GET /api/messages`: every message, newest first.
pub async fn list_messages(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Message>>> {
    let messages = state.store.list_all().await?;
    Ok(Json(messages))
}

/// `POST /api/messages`: validate and store a message.
pub async fn create_message(
    State(state): State<Arc<AppState>>,
    payload: Result<Payload<CreateMessageRequest>, PayloadRejection>,
) -> ApiResult<(StatusCode, Json<Message>)> {
    let Payload(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let message = state
        .store
        .create(req.username.as_deref(), req.content.as_deref())
        .await?;

    tracing::info!(id = %message.id, username = %message.username, "Message created");
    Ok((StatusCode::CREATED, Json(message)))
}
