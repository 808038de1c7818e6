//! Structured logging configuration.
//!
//! Thin wrapper around `tracing-subscriber` so binaries embedding the codec
//! can initialize diagnostics with one call. The `RUST_LOG` environment
//! variable always wins over the configured default level.

use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber with the given default level.
///
/// # Errors
/// Returns `CodecError::ConfigError` if a global subscriber is already set.
pub fn init(default_level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| CodecError::ConfigError(format!("Failed to initialize logging: {e}")))
}

/// Initialize logging from a [`CodecConfig`].
pub fn init_from_config(config: &CodecConfig) -> Result<()> {
    init(&config.log_level)
}
