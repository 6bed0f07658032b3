use config::ConfigError;
use forum_persist::Backend;
use forum_service::{load_layered, CorsConfig, LoggingConfig, ServerConfig};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,

    // Secrets (from ENV only)
    #[serde(skip)]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: Backend,
    pub database: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Memory,
            database: "forum".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `config/api/*.toml` and `FORUM_API__*` variables.
    ///
    /// `DATABASE_URL` is read from the environment and is required for the
    /// MongoDB backend.
    pub fn load() -> Result<Self, ConfigError> {
        let mut cfg: Config = load_layered("api", "FORUM_API")?;

        cfg.database_url = std::env::var("DATABASE_URL").unwrap_or_default();
        if cfg.storage.backend == Backend::MongoDb && cfg.database_url.is_empty() {
            return Err(ConfigError::Message(
                "DATABASE_URL environment variable is required for the mongodb backend".to_string(),
            ));
        }

        Ok(cfg)
    }
}
