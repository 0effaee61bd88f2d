use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolution::ResolutionConfig;
use super::server::ServerConfig;
use super::store::StoreConfig;

const LOCAL_CONFIG_PATH: &str = "redis-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/redis-dns/config.toml";

/// Main configuration structure for Redis DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (ports, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Record store connection
    #[serde(default)]
    pub store: StoreConfig,

    /// Alias chasing limits
    #[serde(default)]
    pub resolution: ResolutionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. redis-dns.toml in current directory
    /// 3. /etc/redis-dns/config.toml
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied on top of whichever was found.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.or_else(|| Self::get_config_path()) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.udp_port {
            self.server.udp_port = port;
        }
        if let Some(port) = overrides.tcp_port {
            self.server.tcp_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(url) = overrides.store_url {
            self.store.url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Checks settings every command depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution.max_cname_depth == 0 {
            return Err(ConfigError::Validation(
                "resolution.max_cname_depth must be at least 1".to_string(),
            ));
        }
        if self.store.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "store.timeout_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Checks that the server has something to listen on.
    pub fn validate_listeners(&self) -> Result<(), ConfigError> {
        if self.server.udp_port == 0 && self.server.tcp_port == 0 {
            return Err(ConfigError::Validation(
                "UDP and TCP ports are both 0, nothing to listen on".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the path to the configuration file that would be used by default
    pub fn get_config_path() -> Option<&'static str> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| Path::new(path).exists())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub udp_port: Option<u16>,
    pub tcp_port: Option<u16>,
    pub bind_address: Option<String>,
    pub store_url: Option<String>,
    pub log_level: Option<String>,
}
