//! JSON bodies exchanged between the services.

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Body of `POST /api/messages`. Both fields are optional so that a missing
/// field reaches validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl CreateMessageRequest {
    pub fn new(username: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            content: Some(content.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Summary served by the thread service on `GET /messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageFeed {
    pub success: bool,
    pub messages: Vec<Message>,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageFeed {
    pub fn loaded(messages: Vec<Message>) -> Self {
        Self {
            success: true,
            count: messages.len(),
            messages,
            error: None,
        }
    }

    pub fn unavailable(error: impl Into<String>) -> Self {
        Self {
            success: false,
            messages: Vec::new(),
            count: 0,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageHealth {
    pub backend: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageHealth>,
}

impl HealthResponse {
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            version: version.into(),
            storage: None,
        }
    }
}
