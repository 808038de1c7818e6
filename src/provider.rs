//! # Codec Provider
//!
//! Construct-once, reuse-everywhere holder for the codec strategies.
//!
//! A [`CodecProvider`] is built once at process start and passed by
//! reference to consumers. It lazily constructs and caches exactly one
//! instance per strategy kind; cached instances are never evicted or
//! replaced for the provider's lifetime.
//!
//! The cipher passkey is accepted exactly once, before the first
//! [`CodecProvider::cipher_codec`] call. A later [`CodecProvider::set_passkey`]
//! is a no-op: it returns `false` and emits a warning, because the already
//! cached codec keeps the key it was constructed with.

use crate::config::{CodecConfig, DEFAULT_KDF_ITERATIONS, DEFAULT_PASSKEY};
use crate::core::cipher::CipherCodec;
use crate::core::transport::TransportCodec;
use crate::error::{constants, Result};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// Lazily constructed, cached codec instances plus the staged cipher
/// parameters used for the first (and only) cipher construction.
struct ProviderState {
    passkey: Option<String>,
    kdf_iterations: u32,
    transport: Option<Arc<TransportCodec>>,
    cipher: Option<Arc<CipherCodec>>,
}

/// Injectable provider caching one instance of each codec strategy.
///
/// All paths are serialized by one mutex, so concurrent first-time calls
/// construct exactly one instance per strategy, and a `set_passkey` racing
/// the first cipher construction resolves deterministically: either the
/// write lands before the construction reads it, or it is rejected.
pub struct CodecProvider {
    state: Mutex<ProviderState>,
}

impl CodecProvider {
    /// Create a provider with default settings.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ProviderState {
                passkey: None,
                kdf_iterations: DEFAULT_KDF_ITERATIONS,
                transport: None,
                cipher: None,
            }),
        }
    }

    /// Create a provider from a validated configuration.
    ///
    /// # Errors
    /// Returns `CodecError::ConfigError` if the configuration fails
    /// validation.
    pub fn from_config(config: &CodecConfig) -> Result<Self> {
        config.validate_strict()?;
        Ok(Self {
            state: Mutex::new(ProviderState {
                passkey: config.passkey.clone(),
                kdf_iterations: config.kdf_iterations,
                transport: None,
                cipher: None,
            }),
        })
    }

    // Strategy construction never panics while the lock is held, so a
    // poisoned mutex still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, ProviderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the cached transport codec, constructing it on first call.
    pub fn transport_codec(&self) -> Arc<TransportCodec> {
        let mut state = self.lock();
        state
            .transport
            .get_or_insert_with(|| {
                debug!("constructing transport codec");
                Arc::new(TransportCodec::new())
            })
            .clone()
    }

    /// Return the cached cipher codec, constructing it on first call from
    /// the currently staged passkey (or the built-in fallback).
    pub fn cipher_codec(&self) -> Arc<CipherCodec> {
        let mut state = self.lock();
        if let Some(cipher) = &state.cipher {
            return cipher.clone();
        }

        let passkey = state
            .passkey
            .clone()
            .unwrap_or_else(|| DEFAULT_PASSKEY.to_string());
        let cipher = Arc::new(CipherCodec::with_validated_params(
            passkey,
            state.kdf_iterations,
        ));
        state.cipher = Some(cipher.clone());
        cipher
    }

    /// Stage the passkey to use for the next cipher-codec construction.
    ///
    /// Returns `true` if the passkey was recorded. Once a cipher codec has
    /// been constructed the call is an observable no-op: it returns `false`
    /// and logs a warning, and subsequently returned instances keep their
    /// original key.
    pub fn set_passkey(&self, passkey: impl Into<String>) -> bool {
        let mut state = self.lock();
        if state.cipher.is_some() {
            warn!("{}", constants::ERR_PASSKEY_ALREADY_BOUND);
            return false;
        }
        state.passkey = Some(passkey.into());
        true
    }
}

impl Default for CodecProvider {
    fn default() -> Self {
        Self::new()
    }
}
