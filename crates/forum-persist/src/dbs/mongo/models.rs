use chrono::{DateTime, Utc};
use forum_types::{Message, NewMessage};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// MongoDB document for a message. `created_at` is stored as a BSON date so
/// that sorting happens on the timestamp rather than on its string form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoMessage {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub content: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl MongoMessage {
    pub fn new(new: NewMessage, created_at: DateTime<Utc>) -> Self {
        Self {
            id: ObjectId::new(),
            username: new.username,
            content: new.content,
            created_at,
        }
    }
}

impl From<MongoMessage> for Message {
    fn from(doc: MongoMessage) -> Self {
        Self {
            id: doc.id.to_hex(),
            username: doc.username,
            content: doc.content,
            created_at: doc.created_at,
        }
    }
}
