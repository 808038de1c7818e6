//! # Configuration Management
//!
//! Centralized configuration for the codec library.
//!
//! This module holds the wire and cryptographic constants shared by every
//! strategy, plus the structured runtime configuration consumed by
//! [`CodecProvider`](crate::provider::CodecProvider).
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment variable overrides via `from_env()`
//!
//! ## Security Considerations
//! - The default key-derivation cost (100k iterations) balances login-scale
//!   latency against brute-force resistance
//! - Decoders cap the iteration count read from an envelope so a crafted
//!   input cannot pin a CPU in key derivation
//! - The fallback passkey exists for interoperability with unconfigured
//!   deployments; production callers should always configure their own

use crate::error::{CodecError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Current byte-stream format version
pub const STREAM_VERSION: u8 = 1;

/// Magic bytes identifying a serialized value stream (0x4F424A53 → "OBJS")
pub const STREAM_MAGIC: [u8; 4] = [0x4F, 0x42, 0x4A, 0x53];

/// Stream header length: magic (4) + version (1) + type tag (8)
pub const STREAM_HEADER_LEN: usize = 13;

/// Max allowed byte-stream size (16 MB)
pub const MAX_STREAM_SIZE: usize = 16 * 1024 * 1024;

/// Current cipher envelope format version
pub const ENVELOPE_VERSION: u8 = 1;

/// Key-derivation salt length in bytes
pub const SALT_LEN: usize = 16;

/// ChaCha20-Poly1305 nonce length in bytes
pub const NONCE_LEN: usize = 12;

/// Derived symmetric key length in bytes (256 bits)
pub const KEY_LEN: usize = 32;

/// Default PBKDF2 iteration count for key derivation
pub const DEFAULT_KDF_ITERATIONS: u32 = 100_000;

/// Upper bound on the iteration count accepted from an envelope or a config
pub const MAX_KDF_ITERATIONS: u32 = 10_000_000;

/// Fallback passkey used when no passkey is configured.
///
/// Kept for interoperability with text produced by unconfigured deployments.
/// Anything security-sensitive must configure its own passkey before first
/// cipher-codec use.
pub const DEFAULT_PASSKEY: &str = "NR#BQqq-P:QsrF>R\"C";

/// Main codec configuration structure that contains all configurable settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Passkey for the cipher codec; `None` selects the built-in fallback
    #[serde(default)]
    pub passkey: Option<String>,

    /// PBKDF2 iteration count used when encrypting
    #[serde(default = "default_kdf_iterations")]
    pub kdf_iterations: u32,

    /// Default log level for the tracing subscriber (e.g. "info", "debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_kdf_iterations() -> u32 {
    DEFAULT_KDF_ITERATIONS
}

fn default_log_level() -> String {
    String::from("info")
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            passkey: None,
            kdf_iterations: DEFAULT_KDF_ITERATIONS,
            log_level: default_log_level(),
        }
    }
}

impl CodecConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| CodecError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| CodecError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| CodecError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Start with defaults
        let mut config = Self::default();

        // Override with environment variables
        if let Ok(passkey) = std::env::var("OBJECT_CODEC_PASSKEY") {
            config.passkey = Some(passkey);
        }

        if let Ok(iterations) = std::env::var("OBJECT_CODEC_KDF_ITERATIONS") {
            if let Ok(val) = iterations.parse::<u32>() {
                config.kdf_iterations = val;
            }
        }

        if let Ok(level) = std::env::var("OBJECT_CODEC_LOG_LEVEL") {
            config.log_level = level;
        }

        Ok(config)
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if let Some(passkey) = &self.passkey {
            if passkey.is_empty() {
                errors.push("Passkey cannot be empty".to_string());
            }
        }

        if self.kdf_iterations == 0 {
            errors.push("KDF iteration count must be greater than zero".to_string());
        }

        if self.kdf_iterations > MAX_KDF_ITERATIONS {
            errors.push(format!(
                "KDF iteration count {} exceeds maximum {MAX_KDF_ITERATIONS}",
                self.kdf_iterations
            ));
        }

        if self.log_level.parse::<tracing::Level>().is_err() {
            errors.push(format!("Invalid log level: {}", self.log_level));
        }

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CodecError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}
