//! # Transport Text Encoding
//!
//! Wraps the byte-stream representation of a value in a printable text
//! encoding so results can live in strings, log lines, or text-based
//! configuration.
//!
//! The encoding is standard base64: 3-byte input groups become 4 output
//! characters from the 64-symbol alphabet, `=`-padded to a multiple of 4.
//! Decoding is strict: characters outside the alphabet, a length that is
//! not a multiple of 4, or invalid padding are all rejected.

use crate::core::codec::Codec;
use crate::core::stream;
use crate::error::{CodecError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Codec strategy producing plain (unencrypted) transport text.
///
/// Stateless and immutable; a single instance may be shared across threads
/// without restriction.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransportCodec;

impl TransportCodec {
    /// Create a new transport codec.
    pub fn new() -> Self {
        Self
    }
}

impl Codec for TransportCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String> {
        let bytes = stream::to_bytes(value)?;
        Ok(STANDARD.encode(bytes))
    }

    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T> {
        let bytes = STANDARD
            .decode(text)
            .map_err(|e| CodecError::TransportDecoding(e.to_string()))?;
        stream::from_bytes(&bytes)
    }
}
