use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::client::ClientConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::records::default_records;
use super::server::ServerConfig;
use crate::domain_name::validate_domain_name;
use crate::HostRecord;

const LOCAL_CONFIG_PATH: &str = "minidns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/minidns/config.toml";

/// Main configuration structure for minidns
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listening socket of `minidns serve`
    #[serde(default)]
    pub server: ServerConfig,

    /// Target and timeout used by `minidns client` / `minidns lookup`
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Static name-to-address table, served in file order
    #[serde(default = "default_records")]
    pub records: Vec<HostRecord>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            client: ClientConfig::default(),
            logging: LoggingConfig::default(),
            records: default_records(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. minidns.toml in current directory
    /// 3. /etc/minidns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(server) = overrides.server {
            self.client.server = server;
        }
        if let Some(timeout) = overrides.query_timeout {
            self.client.query_timeout = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.client.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "Query timeout must be at least 1 second".to_string(),
            ));
        }

        let format = self.logging.format.to_ascii_lowercase();
        if format != "text" && format != "json" {
            return Err(ConfigError::Validation(format!(
                "Unknown log format '{}' (expected 'text' or 'json')",
                self.logging.format
            )));
        }

        if self.records.is_empty() {
            return Err(ConfigError::Validation(
                "No records configured".to_string(),
            ));
        }

        let mut seen = FxHashSet::default();
        for record in &self.records {
            validate_domain_name(&record.domain).map_err(|e| {
                ConfigError::Validation(format!("Record '{}': {}", record.domain, e))
            })?;

            if record.addresses.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Record '{}' has no addresses",
                    record.domain
                )));
            }

            if !seen.insert(record.domain.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "Record '{}' is defined more than once",
                    record.domain
                )));
            }
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = self.to_toml()?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub server: Option<String>,
    pub query_timeout: Option<u64>,
    pub log_level: Option<String>,
}
