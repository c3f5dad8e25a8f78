use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use super::codec::CodecConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::transport::TransportConfig;

const LOCAL_CONFIG_PATH: &str = "mdns-wire.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/mdns-wire/config.toml";

/// Main configuration structure for mdns-wire
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Packet buffer and decode limits
    #[serde(default)]
    pub codec: CodecConfig,

    /// Multicast group, port and interface
    #[serde(default)]
    pub transport: TransportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. mdns-wire.toml in current directory
    /// 3. /etc/mdns-wire/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
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
        if let Some(interface) = overrides.interface {
            self.transport.interface = interface;
        }
        if let Some(port) = overrides.port {
            self.transport.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(512..=65_535).contains(&self.codec.buffer_capacity) {
            return Err(ConfigError::Validation(format!(
                "buffer_capacity must be between 512 and 65535, got {}",
                self.codec.buffer_capacity
            )));
        }

        if !(2..=crate::MAX_NAME_LEN).contains(&self.codec.max_name_len) {
            return Err(ConfigError::Validation(format!(
                "max_name_len must be between 2 and {}, got {}",
                crate::MAX_NAME_LEN,
                self.codec.max_name_len
            )));
        }

        if !self.transport.multicast_group.is_multicast() {
            return Err(ConfigError::Validation(format!(
                "{} is not a multicast address",
                self.transport.multicast_group
            )));
        }

        if self.transport.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if self.transport.multicast_ttl == 0 || self.transport.multicast_ttl > 255 {
            return Err(ConfigError::Validation(format!(
                "multicast_ttl must be between 1 and 255, got {}",
                self.transport.multicast_ttl
            )));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
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
    pub interface: Option<Ipv4Addr>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}
