use super::{
    ConfigError, DatabaseConfig, DnsConfig, InvalidationConfig, LoggingConfig, ServerConfig,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub invalidation: InvalidationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_url: Option<String>,
    pub debug: bool,
}

impl Config {
    /// Load from `path` (falling back to defaults when the file does not
    /// exist) and apply CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) if Path::new(p).exists() => Self::from_file(p)?,
            _ => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::parse(&content, path)
    }

    pub fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(url) = overrides.database_url {
            self.database.url = url;
        }
        if overrides.debug {
            self.logging.level = "debug".to_string();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.upstream_servers.is_empty() {
            return Err(ConfigError::Validation(
                "dns.upstream_servers must list at least one resolver".to_string(),
            ));
        }
        self.dns.upstream_addrs()?;

        if self.dns.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "dns.query_timeout must be greater than zero".to_string(),
            ));
        }

        if self.invalidation.enabled && self.invalidation.channel.trim().is_empty() {
            return Err(ConfigError::Validation(
                "invalidation.channel cannot be empty".to_string(),
            ));
        }

        match self.logging.level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                other
            ))),
        }
    }
}
