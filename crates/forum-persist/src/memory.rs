use async_trait::async_trait;
use forum_types::{validate, Message};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::clock::MonotonicClock;
use crate::error::{PersistError, Result};
use crate::store::{Backend, MessageStore};

/// Process-local store. Messages live as long as the store; nothing is written to disk.
#[derive(Debug, Default)]
pub struct InMemoryMessageStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Insertion order, oldest first.
    messages: Vec<Message>,
    clock: MonotonicClock,
    closed: bool,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn list_all(&self) -> Result<Vec<Message>> {
        let inner = self.inner.read().await;
        if inner.closed {
            return Err(PersistError::Closed);
        }
        Ok(inner.messages.iter().rev().cloned().collect())
    }

    async fn create(&self, username: Option<&str>, content: Option<&str>) -> Result<Message> {
        let new = validate(username, content)?;

        let mut inner = self.inner.write().await;
        if inner.closed {
            return Err(PersistError::Closed);
        }
        let created_at = inner.clock.tick();
        let message = Message::from_new(new, Uuid::new_v4().simple().to_string(), created_at);
        inner.messages.push(message.clone());

        tracing::debug!(id = %message.id, "message stored in memory");
        Ok(message)
    }

    async fn ping(&self) -> Result<()> {
        if self.inner.read().await.closed {
            return Err(PersistError::Closed);
        }
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.inner.write().await.closed = true;
        Ok(())
    }

    fn backend(&self) -> Backend {
        Backend::Memory
    }
}
