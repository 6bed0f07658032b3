use std::sync::Arc;

use axum::{extract::State, response::Html};
use forum_service::{Payload, PayloadRejection};

use crate::{
    state::AppState,
    submission::{self, MessageForm},
    templates::{self, FormView},
};

/// `GET /`: empty submission form.
pub async fn show_form(State(state): State<Arc<AppState>>) -> Html<String> {
    let view = FormView::blank(state.config.ui.thread_url.clone());
    Html(templates::render_form(&view))
}

/// `POST /send`: always 200, the outcome is rendered in the page.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    payload: Result<Payload<MessageForm>, PayloadRejection>,
) -> Html<String> {
    let form = match payload {
        Ok(Payload(form)) => form,
        Err(rejection) => {
            tracing::debug!("Unreadable form submission: {}", rejection);
            MessageForm::default()
        }
    };

    let outcome = submission::submit(&state.storage, &form).await;

    let view = FormView::after(
        &outcome,
        form.username.as_deref().unwrap_or_default(),
        form.content.as_deref().unwrap_or_default(),
        state.config.ui.thread_url.clone(),
    );
    Html(templates::render_form(&view))
}
