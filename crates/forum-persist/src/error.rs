use forum_types::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[cfg(feature = "mongodb")]
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Store is closed")]
    Closed,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PersistError {
    pub fn is_validation(&self) -> bool {
        matches!(self, PersistError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, PersistError>;
