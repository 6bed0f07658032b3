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
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Public URL of the thread page, linked under the form.
    pub thread_url: Option<String>,
}

fn default_server() -> ServerConfig {
    ServerConfig::with_port(3001)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: default_server(),
            upstream: UpstreamConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `config/sender/*.toml` and `FORUM_SENDER__*`
    /// variables. `API_URL` overrides `upstream.base_url`.
    pub fn load() -> Result<Self, ConfigError> {
        let mut cfg: Config = load_layered("sender", "FORUM_SENDER")?;

        if let Ok(api_url) = std::env::var("API_URL") {
            cfg.upstream.base_url = api_url;
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_structure() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [upstream]
            base_url = "http://api:3000"
            timeout_ms = 2000

            [ui]
            thread_url = "http://localhost:3002"

            [logging]
            level = "debug"
            format = "pretty"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.upstream.base_url, "http://api:3000");
        assert_eq!(config.upstream.timeout_ms, 2000);
        assert_eq!(config.ui.thread_url.as_deref(), Some("http://localhost:3002"));
    }

    #[test]
    fn test_default_port() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3001);
        assert!(config.ui.thread_url.is_none());
    }
}
