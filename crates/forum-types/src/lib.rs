pub mod bodies;
pub mod message;
pub mod timestamp;
pub mod validation;

pub use bodies::{CreateMessageRequest, ErrorBody, HealthResponse, MessageFeed, StorageHealth};
pub use message::Message;
pub use validation::{require_field, validate, Field, NewMessage, ValidationError};
