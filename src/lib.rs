//! # Object Codec
//!
//! Pluggable object-to-text codec for Rust applications and services.
//!
//! Converts an in-memory structured value into a transportable text string
//! (and back), optionally applying confidentiality protection. Two
//! interchangeable strategies satisfy one uniform [`Codec`] contract:
//!
//! - [`TransportCodec`]: plain reversible base64 text encoding
//! - [`CipherCodec`]: password-derived authenticated encryption
//!
//! Any strategy, given its own output, reconstructs the original value
//! exactly; corrupted or foreign input is rejected with a typed error from
//! [`error::CodecError`], never silently decoded into garbage.
//!
//! ## Components
//! - **[`core::stream`]**: Framed byte representation shared by all strategies
//! - **[`core::codec`]**: The `encode`/`decode` capability trait
//! - **[`provider`]**: Construct-once provider caching one instance per strategy
//! - **[`config`]**: Wire constants and runtime configuration
//!
//! ## Example
//! ```rust
//! use object_codec::{Codec, CodecProvider};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Account {
//!     name: String,
//!     age: u32,
//! }
//!
//! # fn main() -> object_codec::error::Result<()> {
//! let provider = CodecProvider::new();
//! let codec = provider.transport_codec();
//!
//! let account = Account { name: "alice".to_string(), age: 30 };
//! let text = codec.encode(&account)?;
//! let recovered: Account = codec.decode(&text)?;
//! assert_eq!(account, recovered);
//! # Ok(())
//! # }
//! ```
//!
//! ## Security
//! - Cipher envelopes are self-describing: salt, key-derivation cost, and
//!   nonce travel with the ciphertext
//! - Key derivation is salted per call; tampering and wrong keys fail
//!   authenticated decryption
//! - Passkeys and derived keys are zeroized (zeroize crate)

pub mod config;
pub mod core;
pub mod error;
pub mod provider;
pub mod utils;

pub use crate::core::cipher::CipherCodec;
pub use crate::core::codec::Codec;
pub use crate::core::transport::TransportCodec;
pub use crate::error::{CodecError, Result};
pub use crate::provider::CodecProvider;
