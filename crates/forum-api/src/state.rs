use std::sync::Arc;

use forum_persist::MessageStore;

use crate::config::Config;

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn MessageStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn MessageStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
