pub mod client;
pub mod config;
pub mod error;

pub use client::StorageClient;
pub use config::UpstreamConfig;
pub use error::UpstreamError;
