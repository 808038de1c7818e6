//! # Password Cipher Encoding
//!
//! Wraps the byte-stream representation of a value in password-derived
//! authenticated encryption before text-encoding it, and reverses the whole
//! stack on input.
//!
//! ## Pipeline
//! ```text
//! value → byte stream → base64 text → PBKDF2-HMAC-SHA256 key → ChaCha20-Poly1305
//!       → [Version(1)] [Salt(16)] [Iterations(4)] [Nonce(12)] [Ciphertext+Tag]
//!       → base64 envelope text
//! ```
//!
//! The byte stream is transport-encoded *before* encryption so arbitrary
//! binary content survives the text round trip. Encryption happens after
//! value conversion, keeping this layer value-type-agnostic.
//!
//! ## Security
//! - Key derivation is salted per encryption call (fresh OS-random salt), so
//!   two encodings of the same value under the same passkey differ and the
//!   shared default passkey cannot be attacked with precomputed tables
//! - Derivation parameters travel inside the envelope; decoding needs only
//!   the envelope plus the passkey
//! - The AEAD tag authenticates the ciphertext: a wrong passkey and a
//!   tampered envelope are both reported as decryption failure, never as a
//!   different valid value
//! - Iteration counts read from an envelope are bounded, so crafted input
//!   cannot pin a CPU in key derivation

use crate::config::{
    DEFAULT_KDF_ITERATIONS, DEFAULT_PASSKEY, ENVELOPE_VERSION, KEY_LEN, MAX_KDF_ITERATIONS,
    NONCE_LEN, SALT_LEN,
};
use crate::core::codec::Codec;
use crate::core::stream;
use crate::error::{constants, CodecError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chacha20poly1305::{
    aead::{Aead, KeyInit, OsRng},
    ChaCha20Poly1305, Nonce,
};
use pbkdf2::pbkdf2_hmac;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::Sha256;
use tracing::{debug, trace};
use zeroize::Zeroizing;

/// Envelope header length: version (1) + salt + iteration count (4) + nonce
const ENVELOPE_HEADER_LEN: usize = 1 + SALT_LEN + 4 + NONCE_LEN;

/// ChaCha20-Poly1305 authentication tag length
const TAG_LEN: usize = 16;

/// Derive the symmetric key for one envelope.
fn derive_key(passkey: &str, salt: &[u8], iterations: u32) -> Zeroizing<[u8; KEY_LEN]> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(passkey.as_bytes(), salt, iterations, &mut *key);
    key
}

/// Codec strategy producing password-encrypted transport text.
///
/// The passkey is fixed at construction and cannot be changed for the
/// lifetime of the instance; to use a different key, construct a new codec.
/// Instances are immutable after construction and safe for concurrent use;
/// per-call salt and nonce generation goes through the OS CSPRNG.
pub struct CipherCodec {
    passkey: Zeroizing<String>,
    kdf_iterations: u32,
}

impl CipherCodec {
    /// Create a cipher codec using the built-in fallback passkey.
    pub fn new() -> Self {
        debug!("constructing cipher codec with default passkey");
        Self {
            passkey: Zeroizing::new(DEFAULT_PASSKEY.to_string()),
            kdf_iterations: DEFAULT_KDF_ITERATIONS,
        }
    }

    /// Create a cipher codec with an explicit passkey.
    pub fn with_passkey(passkey: impl Into<String>) -> Self {
        debug!("constructing cipher codec with custom passkey");
        Self {
            passkey: Zeroizing::new(passkey.into()),
            kdf_iterations: DEFAULT_KDF_ITERATIONS,
        }
    }

    /// Create a cipher codec with an explicit passkey and key-derivation cost.
    ///
    /// # Errors
    /// Returns `CodecError::ConfigError` if the iteration count is zero or
    /// exceeds [`MAX_KDF_ITERATIONS`].
    pub fn with_params(passkey: impl Into<String>, kdf_iterations: u32) -> Result<Self> {
        if kdf_iterations == 0 || kdf_iterations > MAX_KDF_ITERATIONS {
            return Err(CodecError::ConfigError(format!(
                "Invalid KDF iteration count: {kdf_iterations}"
            )));
        }
        Ok(Self::with_validated_params(passkey.into(), kdf_iterations))
    }

    /// Internal constructor for parameters validated by the caller.
    pub(crate) fn with_validated_params(passkey: String, kdf_iterations: u32) -> Self {
        debug!(kdf_iterations, "constructing cipher codec with custom passkey");
        Self {
            passkey: Zeroizing::new(passkey),
            kdf_iterations,
        }
    }
}

impl Default for CipherCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for CipherCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String> {
        let bytes = stream::to_bytes(value)?;
        let inner = STANDARD.encode(bytes);

        use chacha20poly1305::aead::rand_core::RngCore;
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce_bytes);

        let key = derive_key(&self.passkey, &salt, self.kdf_iterations);
        let cipher =
            ChaCha20Poly1305::new_from_slice(&*key).map_err(|_| CodecError::EncryptionFailure)?;
        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce_bytes), inner.as_bytes())
            .map_err(|_| CodecError::EncryptionFailure)?;

        trace!(envelope_bytes = ENVELOPE_HEADER_LEN + ciphertext.len(), "sealed envelope");

        let mut envelope = Vec::with_capacity(ENVELOPE_HEADER_LEN + ciphertext.len());
        envelope.push(ENVELOPE_VERSION);
        envelope.extend_from_slice(&salt);
        envelope.extend_from_slice(&self.kdf_iterations.to_be_bytes());
        envelope.extend_from_slice(&nonce_bytes);
        envelope.extend_from_slice(&ciphertext);

        Ok(STANDARD.encode(envelope))
    }

    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T> {
        let envelope = STANDARD
            .decode(text)
            .map_err(|e| CodecError::TransportDecoding(format!("Malformed cipher envelope: {e}")))?;

        if envelope.len() < ENVELOPE_HEADER_LEN + TAG_LEN {
            return Err(CodecError::TransportDecoding(
                constants::ERR_ENVELOPE_TOO_SHORT.to_string(),
            ));
        }

        let version = envelope[0];
        if version != ENVELOPE_VERSION {
            return Err(CodecError::TransportDecoding(format!(
                "Unsupported envelope version: {version}"
            )));
        }

        let salt = &envelope[1..1 + SALT_LEN];
        let mut iteration_bytes = [0u8; 4];
        iteration_bytes.copy_from_slice(&envelope[1 + SALT_LEN..1 + SALT_LEN + 4]);
        let iterations = u32::from_be_bytes(iteration_bytes);
        if iterations == 0 || iterations > MAX_KDF_ITERATIONS {
            return Err(CodecError::TransportDecoding(
                constants::ERR_IMPLAUSIBLE_ITERATIONS.to_string(),
            ));
        }

        let nonce = &envelope[ENVELOPE_HEADER_LEN - NONCE_LEN..ENVELOPE_HEADER_LEN];
        let ciphertext = &envelope[ENVELOPE_HEADER_LEN..];

        let key = derive_key(&self.passkey, salt, iterations);
        let cipher =
            ChaCha20Poly1305::new_from_slice(&*key).map_err(|_| CodecError::DecryptionFailure)?;
        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| CodecError::DecryptionFailure)?;

        // Authentication passed; anything wrong past this point is a
        // structural problem in the inner content, not a key problem.
        let inner = std::str::from_utf8(&plaintext)
            .map_err(|_| CodecError::Decoding(constants::ERR_RECOVERED_TEXT_INVALID.to_string()))?;
        let bytes = STANDARD
            .decode(inner)
            .map_err(|e| CodecError::Decoding(format!("Recovered text is not a value stream: {e}")))?;

        stream::from_bytes(&bytes)
    }
}
