use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::NewMessage;

/// A stored board message.
///
/// `id` and `created_at` are assigned by the store and never change afterwards.
/// On the wire the identifier is `_id` and the timestamp is `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub username: String,
    pub content: String,
    #[serde(rename = "createdAt", with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Attach store-generated fields to an already validated message.
    pub fn from_new(new: NewMessage, id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            username: new.username,
            content: new.content,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample() -> Message {
        Message {
            id: "6710a1f2c3d4e5f601234567".to_string(),
            username: "U1".to_string(),
            content: "Hello".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_wire_shape_uses_underscore_id_and_camel_case_timestamp() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["_id"], "6710a1f2c3d4e5f601234567");
        assert_eq!(value["username"], "U1");
        assert_eq!(value["content"], "Hello");
        assert_eq!(value["createdAt"], "2026-10-19T08:30:00.000Z");
        assert!(value.get("id").is_none());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_decoding_accepts_plain_id_alias() {
        let value = json!({
            "id": "abc",
            "username": "U1",
            "content": "Hello",
            "createdAt": "2026-10-19T08:30:00.000Z"
        });

        let message: Message = serde_json::from_value(value).unwrap();
        assert_eq!(message.id, "abc");
        assert_eq!(message, Message { id: "abc".to_string(), ..sample() });
    }

    #[test]
    fn test_decoding_rejects_malformed_timestamp() {
        let value = json!({
            "_id": "abc",
            "username": "U1",
            "content": "Hello",
            "createdAt": "yesterday"
        });

        assert!(serde_json::from_value::<Message>(value).is_err());
    }
}
