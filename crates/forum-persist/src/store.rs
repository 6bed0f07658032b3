use std::fmt;

use async_trait::async_trait;
use forum_types::Message;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which storage engine backs a [`MessageStore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Memory,
    MongoDb,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Memory => "memory",
            Backend::MongoDb => "mongodb",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered message collection with validation at the write boundary.
///
/// Implementations must serialize the "assign timestamp and append" step so
/// that concurrent `create` calls get distinct ids and timestamps that follow
/// their relative arrival order.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// All messages, most recent first. Equal timestamps list the later insertion first.
    async fn list_all(&self) -> Result<Vec<Message>>;

    /// Validate, stamp and append a message, returning the stored record.
    async fn create(&self, username: Option<&str>, content: Option<&str>) -> Result<Message>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<()>;

    /// Release backend resources. Later calls fail with `PersistError::Closed`.
    async fn close(&self) -> Result<()>;

    fn backend(&self) -> Backend;
}
