#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Comprehensive edge-case tests for production-grade reliability
//! Tests boundary conditions, malformed input, tampering, and cross-strategy confusion

use base64::{engine::general_purpose::STANDARD, Engine as _};
use object_codec::config::{MAX_STREAM_SIZE, SALT_LEN, STREAM_MAGIC};
use object_codec::{CipherCodec, Codec, CodecError, TransportCodec};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Account {
    name: String,
    age: u32,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Empty {}

fn alice() -> Account {
    Account {
        name: "alice".to_string(),
        age: 30,
    }
}

fn cipher(passkey: &str) -> CipherCodec {
    CipherCodec::with_params(passkey, 1_000).expect("valid params")
}

// ============================================================================
// VALUE SHAPE EDGE CASES
// ============================================================================

#[test]
fn empty_struct_round_trips() {
    let codec = TransportCodec::new();
    let text = codec.encode(&Empty {}).expect("encode");
    let recovered: Empty = codec.decode(&text).expect("decode");
    assert_eq!(Empty {}, recovered);
}

#[test]
fn unicode_content_round_trips() {
    let codec = TransportCodec::new();
    let account = Account {
        name: "ålïçé \u{1F512} 暗号".to_string(),
        age: 30,
    };
    let text = codec.encode(&account).expect("encode");
    let recovered: Account = codec.decode(&text).expect("decode");
    assert_eq!(account, recovered);
}

#[test]
fn large_payload_round_trips() {
    let codec = TransportCodec::new();
    let blob: Vec<u8> = (0..1_000_000u32).map(|i| (i & 0xFF) as u8).collect();
    let text = codec.encode(&blob).expect("encode");
    let recovered: Vec<u8> = codec.decode(&text).expect("decode");
    assert_eq!(blob, recovered);
}

#[test]
fn binary_content_survives_cipher() {
    // Every byte value, including NUL and invalid UTF-8 sequences, must
    // survive the encrypt/decrypt round trip.
    let codec = cipher("secret");
    let blob: Vec<u8> = (0..=255u8).collect();
    let text = codec.encode(&blob).expect("encode");
    let recovered: Vec<u8> = codec.decode(&text).expect("decode");
    assert_eq!(blob, recovered);
}

#[test]
fn oversized_value_rejected() {
    let codec = TransportCodec::new();
    let blob = vec![0xABu8; MAX_STREAM_SIZE + 1];
    let result = codec.encode(&blob);
    assert!(matches!(result, Err(CodecError::OversizedStream(_))));
}

// ============================================================================
// MALFORMED INPUT
// ============================================================================

#[test]
fn empty_text_rejected_by_transport() {
    let codec = TransportCodec::new();
    // Empty text is valid base64 of zero bytes; the stream layer rejects it.
    let result: Result<Account, _> = codec.decode("");
    assert!(matches!(result, Err(CodecError::Decoding(_))));
}

#[test]
fn empty_text_rejected_by_cipher() {
    let codec = cipher("secret");
    let result: Result<Account, _> = codec.decode("");
    assert!(matches!(result, Err(CodecError::TransportDecoding(_))));
}

#[test]
fn unpadded_length_rejected() {
    let codec = TransportCodec::new();
    let result: Result<Account, _> = codec.decode("QUJD1");
    assert!(matches!(result, Err(CodecError::TransportDecoding(_))));
}

#[test]
fn whitespace_rejected() {
    let codec = TransportCodec::new();
    let text = codec.encode(&alice()).expect("encode");
    let broken = format!("{} {}", &text[..4], &text[4..]);
    let result: Result<Account, _> = codec.decode(&broken);
    assert!(matches!(result, Err(CodecError::TransportDecoding(_))));
}

#[test]
fn foreign_magic_rejected() {
    let codec = TransportCodec::new();
    let mut raw = STANDARD.decode(codec.encode(&alice()).expect("encode")).unwrap();
    raw[0] ^= 0x20;
    assert_ne!(raw[..4], STREAM_MAGIC);

    let result: Result<Account, _> = codec.decode(&STANDARD.encode(raw));
    assert!(matches!(result, Err(CodecError::Decoding(_))));
}

// ============================================================================
// TAMPER DETECTION
// ============================================================================

#[test]
fn every_flipped_envelope_byte_is_detected() {
    let codec = cipher("secret");
    let text = codec.encode(&alice()).expect("encode");
    let envelope = STANDARD.decode(&text).expect("valid base64");

    // Header region: version, salt, iteration count, nonce.
    let header_len = 1 + SALT_LEN + 4 + 12;

    for index in 0..envelope.len() {
        let mut tampered = envelope.clone();
        tampered[index] ^= 0x01;
        let result: Result<Account, _> = codec.decode(&STANDARD.encode(&tampered));

        // Flips in the ciphertext region must fail authentication; header
        // flips may instead trip structural checks before key derivation.
        match result {
            Ok(_) => panic!("flipping byte {index} produced a valid value"),
            Err(CodecError::DecryptionFailure) => {}
            Err(CodecError::TransportDecoding(_)) if index < header_len => {}
            Err(other) => panic!("flipping byte {index} produced unexpected error: {other}"),
        }
    }
}

#[test]
fn truncated_envelope_rejected() {
    let codec = cipher("secret");
    let text = codec.encode(&alice()).expect("encode");
    let envelope = STANDARD.decode(&text).expect("valid base64");

    let truncated = &envelope[..envelope.len() / 2];
    let result: Result<Account, _> = codec.decode(&STANDARD.encode(truncated));
    assert!(result.is_err());
}

// ============================================================================
// CROSS-STRATEGY CONFUSION
// ============================================================================

#[test]
fn transport_text_rejected_by_cipher() {
    let transport = TransportCodec::new();
    let encrypted = cipher("secret");

    let text = transport.encode(&alice()).expect("encode");
    let result: Result<Account, _> = encrypted.decode(&text);
    assert!(result.is_err(), "plain text must not decrypt");
}

#[test]
fn cipher_text_rejected_by_transport() {
    let transport = TransportCodec::new();
    let encrypted = cipher("secret");

    let text = encrypted.encode(&alice()).expect("encode");
    let result: Result<Account, _> = transport.decode(&text);
    assert!(
        matches!(result, Err(CodecError::Decoding(_))),
        "an envelope is not a value stream"
    );
}
