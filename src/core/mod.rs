//! # Core Codec Components
//!
//! Low-level value framing and the interchangeable encoding strategies.
//!
//! This module provides the foundation for the library: the byte-stream
//! format every strategy shares, the strategy capability trait, and the two
//! built-in strategies.
//!
//! ## Components
//! - **Stream**: Framed byte representation of a value (magic, version, type tag)
//! - **Codec**: The `encode`/`decode` capability implemented by each strategy
//! - **Transport**: Printable base64 text encoding of a byte stream
//! - **Cipher**: Password-derived authenticated encryption around the stream
//!
//! ## Wire Format
//! ```text
//! [Magic(4)] [Version(1)] [TypeTag(8)] [Payload(N)]
//! ```
//!
//! ## Security
//! - Maximum stream size: 16MB (prevents memory exhaustion)
//! - Magic bytes prevent accidental misinterpretation
//! - Cipher envelopes are authenticated; tampering fails decryption

pub mod cipher;
pub mod codec;
pub mod stream;
pub mod transport;
