//! # Error Types
//!
//! Comprehensive error handling for the codec library.
//!
//! This module defines all error variants that can occur while converting
//! values to text and back, from serialization failures to cryptographic
//! authentication failures.
//!
//! ## Error Categories
//! - **Encoding Errors**: A value contains state that cannot be captured
//! - **Decoding Errors**: A byte stream is structurally invalid
//! - **Type Resolution Errors**: A stream was produced for a different type
//! - **Transport Errors**: Malformed text or cipher envelope
//! - **Cryptographic Errors**: Encryption/decryption failures
//!
//! All errors implement `std::error::Error` for interoperability. Failures
//! are always reported to the caller as typed values, never as a partially
//! decoded result, and nothing is retried internally.
//!
//! ## Example Usage
//! ```rust
//! use object_codec::error::{CodecError, Result};
//! use object_codec::{Codec, TransportCodec};
//! use tracing::warn;
//!
//! fn parse_record(text: &str) -> Result<Vec<u8>> {
//!     let codec = TransportCodec::new();
//!     codec.decode(text)
//! }
//!
//! match parse_record("not base64!") {
//!     Ok(_) => unreachable!(),
//!     Err(CodecError::TransportDecoding(reason)) => warn!(%reason, "rejected input"),
//!     Err(e) => warn!(error = %e, "unexpected failure"),
//! }
//! ```

use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
/// Static strings are borrowed, avoiding heap allocations for common error cases.
pub mod constants {
    /// Byte-stream validation errors
    pub const ERR_INVALID_HEADER: &str = "Invalid stream header";
    pub const ERR_TRUNCATED_STREAM: &str = "Byte stream truncated";

    /// Cipher envelope errors
    pub const ERR_ENVELOPE_TOO_SHORT: &str = "Cipher envelope too short";
    pub const ERR_IMPLAUSIBLE_ITERATIONS: &str = "Implausible key-derivation iteration count";
    pub const ERR_RECOVERED_TEXT_INVALID: &str = "Recovered plaintext is not valid text";

    /// Provider errors
    pub const ERR_PASSKEY_ALREADY_BOUND: &str =
        "Passkey change ignored, a cipher codec is already bound in the provider";
}

// CodecError is the primary error type for all codec operations
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("Type resolution error: {0}")]
    TypeResolution(String),

    #[error("Transport decoding error: {0}")]
    TransportDecoding(String),

    #[error("Encryption failed")]
    EncryptionFailure,

    #[error("Decryption failed")]
    DecryptionFailure,

    #[error("Byte stream too large: {0} bytes")]
    OversizedStream(usize),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;
