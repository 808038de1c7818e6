//! # Byte-Stream Framing
//!
//! Converts an arbitrary serializable value to an opaque, framed byte
//! sequence and back. This is the shared leaf every strategy builds on:
//! pure, stateless, and deterministic modulo the value's own representation.
//!
//! ## Wire Format
//! ```text
//! [Magic(4)] [Version(1)] [TypeTag(8)] [Bincode Payload(N)]
//! ```
//!
//! The type tag is the first 8 bytes of the SHA-256 digest of the concrete
//! Rust type name. Decoding with a different target type fails with a type
//! resolution error instead of misinterpreting the payload. Tags are only
//! meaningful within one trust domain; the stream is not a cross-language
//! interchange format.

use crate::config::{MAX_STREAM_SIZE, STREAM_HEADER_LEN, STREAM_MAGIC, STREAM_VERSION};
use crate::error::{constants, CodecError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::trace;

/// Length of the truncated type digest embedded in the header
const TYPE_TAG_LEN: usize = 8;

/// Compute the stream type tag for `T`.
fn type_tag<T>() -> [u8; TYPE_TAG_LEN] {
    let digest = Sha256::digest(std::any::type_name::<T>().as_bytes());
    let mut tag = [0u8; TYPE_TAG_LEN];
    tag.copy_from_slice(&digest[..TYPE_TAG_LEN]);
    tag
}

/// Convert a serializable value into a framed byte stream.
///
/// # Errors
/// Returns `CodecError::Encoding` if the value contains state that cannot be
/// captured (a `Serialize` implementation reporting failure), or
/// `CodecError::OversizedStream` if the serialized payload exceeds
/// [`MAX_STREAM_SIZE`].
pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    trace!(ty = std::any::type_name::<T>(), "serializing value");

    let payload = bincode::serialize(value).map_err(|e| CodecError::Encoding(e.to_string()))?;

    if payload.len() > MAX_STREAM_SIZE {
        return Err(CodecError::OversizedStream(payload.len()));
    }

    let mut bytes = Vec::with_capacity(STREAM_HEADER_LEN + payload.len());
    bytes.extend_from_slice(&STREAM_MAGIC);
    bytes.push(STREAM_VERSION);
    bytes.extend_from_slice(&type_tag::<T>());
    bytes.extend_from_slice(&payload);

    Ok(bytes)
}

/// Reconstruct a value from a framed byte stream.
///
/// Every structural check runs before the payload is touched, so foreign or
/// corrupted input is rejected with a diagnosable error rather than decoded
/// into garbage.
///
/// # Errors
/// - `CodecError::Decoding`: truncated stream, wrong magic, unsupported
///   version, or a malformed payload
/// - `CodecError::TypeResolution`: the stream was produced for a different
///   type than the requested one
/// - `CodecError::OversizedStream`: the stream exceeds [`MAX_STREAM_SIZE`]
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    if bytes.len() < STREAM_HEADER_LEN {
        return Err(CodecError::Decoding(
            constants::ERR_TRUNCATED_STREAM.to_string(),
        ));
    }

    if bytes.len() > STREAM_HEADER_LEN + MAX_STREAM_SIZE {
        return Err(CodecError::OversizedStream(bytes.len()));
    }

    if bytes[..4] != STREAM_MAGIC {
        return Err(CodecError::Decoding(
            constants::ERR_INVALID_HEADER.to_string(),
        ));
    }

    let version = bytes[4];
    if version != STREAM_VERSION {
        return Err(CodecError::Decoding(format!(
            "Unsupported stream version: {version}"
        )));
    }

    if bytes[5..STREAM_HEADER_LEN] != type_tag::<T>() {
        return Err(CodecError::TypeResolution(format!(
            "Stream was not produced for type {}",
            std::any::type_name::<T>()
        )));
    }

    trace!(ty = std::any::type_name::<T>(), "deserializing stream");

    bincode::deserialize(&bytes[STREAM_HEADER_LEN..])
        .map_err(|e| CodecError::Decoding(e.to_string()))
}
