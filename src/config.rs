//! # Configuration Management
//!
//! Configuration for codec policy and logging.
//!
//! The bare record codecs take no configuration. [`CodecConfig`] only steers
//! the packet-level helpers in [`crate::protocol::packet`], which decide how
//! strictly a received packet is checked against its own header.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment overrides via `from_env()` (`IPREF_WIRE_*`)

use crate::error::{constants, ProtocolError, Result};
use crate::protocol::constants::{V1_HDR_LEN, V1_MAX_PKT_LEN};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct WireConfig {
    /// Packet decoding policy
    #[serde(default)]
    pub codec: CodecConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WireConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut contents = String::new();
        File::open(path)?.read_to_string(&mut contents)?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| {
                ProtocolError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_PARSE))
            })
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("IPREF_WIRE_VERIFY_PACKET_LENGTH") {
            if let Ok(val) = v.parse::<bool>() {
                config.codec.verify_packet_length = val;
            }
        }

        if let Ok(v) = std::env::var("IPREF_WIRE_ALLOW_MIXED_GATEWAY_FAMILY") {
            if let Ok(val) = v.parse::<bool>() {
                config.codec.allow_mixed_gateway_family = val;
            }
        }

        if let Ok(v) = std::env::var("IPREF_WIRE_MAX_PACKET_LEN") {
            if let Ok(val) = v.parse::<usize>() {
                config.codec.max_packet_len = val;
            }
        }

        if let Ok(v) = std::env::var("IPREF_WIRE_LOG_LEVEL") {
            if let Ok(level) = v.parse::<Level>() {
                config.logging.log_level = level;
            }
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration.
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.codec.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProtocolError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Packet-level decoding policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Reject packets whose header length field differs from the bytes received
    pub verify_packet_length: bool,

    /// Accept records whose GW family differs from the EA/IP family
    pub allow_mixed_gateway_family: bool,

    /// Largest packet accepted for decoding
    pub max_packet_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            verify_packet_length: true,
            allow_mixed_gateway_family: true,
            max_packet_len: V1_MAX_PKT_LEN,
        }
    }
}

impl CodecConfig {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_packet_len < V1_HDR_LEN {
            errors.push(format!(
                "Max packet length too small: {} (minimum: {V1_HDR_LEN})",
                self.max_packet_len
            ));
        } else if self.max_packet_len > V1_MAX_PKT_LEN {
            errors.push(format!(
                "Max packet length too large: {} (length field holds at most {V1_MAX_PKT_LEN})",
                self.max_packet_len
            ));
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("ipref-wire"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
