use config::ConfigError;
use forum_client::UpstreamConfig;
use forum_service::{load_layered, LoggingConfig, ServerConfig};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_server")]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_server() -> ServerConfig {
    ServerConfig::with_port(3002)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: default_server(),
            upstream: UpstreamConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `config/thread/*.toml` and `FORUM_THREAD__*`
    /// variables. `API_URL` overrides `upstream.base_url`.
    pub fn load() -> Result<Self, ConfigError> {
        let mut cfg: Config = load_layered("thread", "FORUM_THREAD")?;

        if let Ok(api_url) = std::env::var("API_URL") {
            cfg.upstream.base_url = api_url;
        }

        Ok(cfg)
    }
}
