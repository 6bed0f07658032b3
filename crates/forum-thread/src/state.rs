use std::sync::Arc;

use forum_client::StorageClient;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub storage: StorageClient,
}

impl AppState {
    pub fn new(config: Config, storage: StorageClient) -> Self {
        Self {
            config: Arc::new(config),
            storage,
        }
    }
}
