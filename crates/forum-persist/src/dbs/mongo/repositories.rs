use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, IndexModel};

use crate::dbs::mongo::models::MongoMessage;
use crate::error::Result;

const COLLECTION: &str = "messages";

#[derive(Clone)]
pub struct MongoMessageRepository {
    collection: Collection<MongoMessage>,
}

impl MongoMessageRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection(COLLECTION);
        Self { collection }
    }

    /// Index backing the newest-first listing.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "created_at": -1, "_id": -1 })
            .build();
        self.collection.create_index(index).await?;
        Ok(())
    }

    pub async fn insert(&self, message: &MongoMessage) -> Result<()> {
        self.collection.insert_one(message).await?;
        Ok(())
    }

    /// All messages, newest first. `_id` breaks timestamp ties: ObjectIds
    /// minted by one process grow with insertion order.
    pub async fn list_newest_first(&self) -> Result<Vec<MongoMessage>> {
        let messages = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1, "_id": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(messages)
    }
}
