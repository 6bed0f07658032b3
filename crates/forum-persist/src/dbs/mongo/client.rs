use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use forum_types::{validate, Message};
use mongodb::bson::doc;
use mongodb::Client;
use tokio::sync::Mutex;

use crate::clock::MonotonicClock;
use crate::dbs::mongo::models::MongoMessage;
use crate::dbs::mongo::repositories::MongoMessageRepository;
use crate::error::{PersistError, Result};
use crate::store::{Backend, MessageStore};

pub struct MongoMessageStore {
    client: Client,
    database: String,
    repo: MongoMessageRepository,
    /// Held while stamping and inserting, so timestamps and ObjectIds follow arrival order.
    clock: Mutex<MonotonicClock>,
    closed: AtomicBool,
}

impl MongoMessageStore {
    /// Connect to MongoDB, verify the server answers and make sure the listing index exists.
    pub async fn connect(mongodb_uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        client
            .database(database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        let repo = MongoMessageRepository::new(&client, database);
        repo.ensure_indexes().await?;

        tracing::info!(database, "MongoDB message store ready");

        Ok(Self {
            client,
            database: database.to_string(),
            repo,
            clock: Mutex::new(MonotonicClock::new()),
            closed: AtomicBool::new(false),
        })
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(PersistError::Closed);
        }
        Ok(())
    }
}

#[async_trait]
impl MessageStore for MongoMessageStore {
    async fn list_all(&self) -> Result<Vec<Message>> {
        self.ensure_open()?;
        let docs = self.repo.list_newest_first().await?;
        Ok(docs.into_iter().map(Message::from).collect())
    }

    async fn create(&self, username: Option<&str>, content: Option<&str>) -> Result<Message> {
        let new = validate(username, content)?;

        let mut clock = self.clock.lock().await;
        self.ensure_open()?;
        let doc = MongoMessage::new(new, clock.tick());
        self.repo.insert(&doc).await?;
        drop(clock);

        tracing::debug!(id = %doc.id, "message stored in MongoDB");
        Ok(doc.into())
    }

    async fn ping(&self) -> Result<()> {
        self.ensure_open()?;
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        self.client.clone().shutdown().await;
        Ok(())
    }

    fn backend(&self) -> Backend {
        Backend::MongoDb
    }
}
