use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
    pub origins: Vec<String>,
}

/// Load a service configuration.
///
/// Hierarchy (weakest to strongest):
/// 1. serde defaults of `T`
/// 2. config/{service}/default.toml
/// 3. config/{service}/{ENV}.toml (ENV defaults to "dev")
/// 4. Environment variables `{PREFIX}__SECTION__KEY`
pub fn load_layered<T: DeserializeOwned>(service: &str, env_prefix: &str) -> Result<T, ConfigError> {
    let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

    ConfigLoader::builder()
        .add_source(File::with_name(&format!("config/{service}/default")).required(false))
        .add_source(File::with_name(&format!("config/{service}/{env}")).required(false))
        .add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default)]
        server: ServerConfig,
        #[serde(default)]
        logging: LoggingConfig,
        #[serde(default)]
        cors: CorsConfig,
    }

    #[test]
    fn test_sections_fall_back_to_defaults() {
        let sample: Sample = toml::from_str("[server]\nport = 4000\n").unwrap();

        assert_eq!(sample.server.port, 4000);
        assert_eq!(sample.server.host, "0.0.0.0");
        assert_eq!(sample.logging.level, "info");
        assert!(!sample.cors.enabled);
    }

    #[test]
    fn test_full_structure() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 3001
            request_timeout_secs = 5

            [logging]
            level = "debug"
            format = "json"

            [cors]
            enabled = true
            origins = ["http://localhost:3001"]
        "#;

        let sample: Sample = toml::from_str(toml).unwrap();
        assert_eq!(sample.server.addr(), "127.0.0.1:3001");
        assert_eq!(sample.server.request_timeout_secs, 5);
        assert_eq!(sample.logging.format, "json");
        assert_eq!(sample.cors.origins, vec!["http://localhost:3001".to_string()]);
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let sample: Sample = load_layered("does-not-exist", "FORUM_SERVICE_CONFIG_TEST").unwrap();
        assert_eq!(sample.server.port, 3000);
    }
}
