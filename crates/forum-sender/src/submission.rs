//! One submission attempt, from the posted form to its final state.
//!
//! ```text
//! Draft ──(local validation)──> Rejected
//!   └──> Submitted ──> Stored | Refused | Failed
//! ```
//! There is no retry: every state reached here is terminal.

use forum_client::{StorageClient, UpstreamError};
use forum_types::{require_field, validate, Field, Message, ValidationError};
use serde::Deserialize;

/// Fields posted by the submission form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageForm {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl MessageForm {
    /// Every failing field, so the notice can name them all.
    pub fn problems(&self) -> Vec<ValidationError> {
        [
            (Field::Username, self.username.as_deref()),
            (Field::Content, self.content.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| require_field(field, value).err())
        .collect()
    }
}

#[derive(Debug)]
pub enum Outcome {
    /// Caught before contacting the storage API.
    Rejected(Vec<ValidationError>),
    Stored(Message),
    /// The storage API answered 400.
    Refused(String),
    Failed(UpstreamError),
}

pub async fn submit(storage: &StorageClient, form: &MessageForm) -> Outcome {
    let new = match validate(form.username.as_deref(), form.content.as_deref()) {
        Ok(new) => new,
        Err(_) => return Outcome::Rejected(form.problems()),
    };

    match storage.create_message(&new.username, &new.content).await {
        Ok(message) => {
            tracing::info!(id = %message.id, username = %message.username, "Message forwarded");
            Outcome::Stored(message)
        }
        Err(UpstreamError::Refused(reason)) => {
            tracing::info!("Storage service refused message: {}", reason);
            Outcome::Refused(reason)
        }
        Err(e) => {
            tracing::warn!("Failed to forward message: {}", e);
            Outcome::Failed(e)
        }
    }
}
