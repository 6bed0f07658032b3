pub mod client;
pub mod models;
pub mod repositories;

pub use client::MongoMessageStore;
pub use models::MongoMessage;
pub use repositories::MongoMessageRepository;
