pub mod builder;
pub mod clock;
pub mod error;
pub mod memory;
pub mod store;

#[cfg(feature = "mongodb")]
pub mod dbs;

pub use builder::StoreBuilder;
pub use clock::MonotonicClock;
pub use error::{PersistError, Result};
pub use memory::InMemoryMessageStore;
pub use store::{Backend, MessageStore};

#[cfg(feature = "mongodb")]
pub use dbs::mongo::MongoMessageStore;
