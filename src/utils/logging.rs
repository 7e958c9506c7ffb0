//! Structured logging setup.
//!
//! The codec only emits `tracing` events. Binaries and tests that want to
//! see them install a subscriber here.

use crate::config::LoggingConfig;
use crate::error::{constants, ProtocolError, Result};
use tracing_subscriber::fmt;

/// Install a global fmt subscriber at the configured level.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = fmt().with_max_level(config.log_level).with_target(true);

    let result = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| {
        ProtocolError::ConfigError(format!("{}: {e}", constants::ERR_SUBSCRIBER_SET))
    })?;
    tracing::info!(app = %config.app_name, level = %config.log_level, "logging initialized");
    Ok(())
}
