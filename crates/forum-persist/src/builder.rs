use std::sync::Arc;

use crate::error::{PersistError, Result};
use crate::memory::InMemoryMessageStore;
use crate::store::{Backend, MessageStore};

/// Opens the configured [`MessageStore`] at service start.
pub struct StoreBuilder {
    backend: Backend,
    mongodb_uri: Option<String>,
    database: Option<String>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self {
            backend: Backend::Memory,
            mongodb_uri: None,
            database: None,
        }
    }

    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn mongodb_uri(mut self, uri: impl Into<String>) -> Self {
        self.mongodb_uri = Some(uri.into());
        self
    }

    pub fn database(mut self, db: impl Into<String>) -> Self {
        self.database = Some(db.into());
        self
    }

    pub async fn build(self) -> Result<Arc<dyn MessageStore>> {
        match self.backend {
            Backend::Memory => Ok(Arc::new(InMemoryMessageStore::new())),
            Backend::MongoDb => self.build_mongodb().await,
        }
    }

    #[cfg(feature = "mongodb")]
    async fn build_mongodb(self) -> Result<Arc<dyn MessageStore>> {
        let uri = self
            .mongodb_uri
            .filter(|uri| !uri.is_empty())
            .ok_or_else(|| PersistError::Config("mongodb_uri is required".to_string()))?;
        let database = self
            .database
            .ok_or_else(|| PersistError::Config("database is required".to_string()))?;

        let store = crate::dbs::mongo::MongoMessageStore::connect(&uri, &database).await?;
        Ok(Arc::new(store))
    }

    #[cfg(not(feature = "mongodb"))]
    async fn build_mongodb(self) -> Result<Arc<dyn MessageStore>> {
        Err(PersistError::Config(
            "built without the `mongodb` feature".to_string(),
        ))
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
