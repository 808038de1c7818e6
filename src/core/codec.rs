//! # Codec Capability
//!
//! The uniform contract every encoding strategy satisfies: serialize a value
//! to transportable text, and parse such text back into a value.
//!
//! Strategies are independent types composing the shared byte-stream helpers
//! in [`crate::core::stream`]; there is no base-type hierarchy.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A paired encode/decode strategy satisfying the round-trip contract.
///
/// For every value `v` without transient fields, `decode(encode(v))`
/// reconstructs a value observably equal to `v`, provided both calls go
/// through the same strategy (and, for the cipher strategy, the same
/// passkey). Text produced by one strategy is rejected by the other with a
/// typed error.
///
/// Fields marked `#[serde(skip)]` are transient: they are never written to
/// the byte stream and come back as `Default::default()` after a round trip.
/// This is documented, intentional loss rather than a defect.
///
/// Implementations hold no per-call mutable state and are safe for unlimited
/// concurrent use once constructed.
pub trait Codec {
    /// Serialize a value into a transportable text string.
    fn encode<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Parse text previously produced by [`Codec::encode`] back into a value.
    ///
    /// Input that was not produced by a compatible encoder fails with a
    /// diagnosable error; it never panics and never yields a partial value.
    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T>;

    /// Parse a character-sequence form of encoded text.
    ///
    /// Equivalent to [`Codec::decode`] on the collected string; both forms
    /// decode identically.
    fn decode_chars<T: DeserializeOwned>(&self, chars: &[char]) -> Result<T> {
        let text: String = chars.iter().collect();
        self.decode(&text)
    }
}
