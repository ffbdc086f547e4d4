use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::keep_alive::KeepAliveConfig;
use super::logging::LoggingConfig;
use super::rate_limit::RateLimitConfig;
use super::server::ServerConfig;

/// Main configuration structure for doh-relay
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Per-client rate limiting
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Keep-alive self-ping task
    #[serde(default)]
    pub keep_alive: KeepAliveConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. doh-relay.toml in current directory
    /// 3. /etc/doh-relay/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("doh-relay.toml").exists() {
            Self::from_file("doh-relay.toml")?
        } else if std::path::Path::new("/etc/doh-relay/config.toml").exists() {
            Self::from_file("/etc/doh-relay/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(max) = overrides.max_requests {
            self.rate_limit.max_requests = max;
        }
        if let Some(window) = overrides.window_seconds {
            self.rate_limit.window_seconds = window;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.rate_limit.max_requests == 0 {
            return Err(ConfigError::Validation(
                "rate_limit.max_requests must be at least 1".to_string(),
            ));
        }

        if self.rate_limit.window_seconds == 0 {
            return Err(ConfigError::Validation(
                "rate_limit.window_seconds must be at least 1".to_string(),
            ));
        }

        if self.keep_alive.enabled && self.keep_alive.interval_seconds == 0 {
            return Err(ConfigError::Validation(
                "keep_alive.interval_seconds must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub max_requests: Option<usize>,
    pub window_seconds: Option<u64>,
    pub log_level: Option<String>,
}
