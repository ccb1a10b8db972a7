//! # Multikey Encoding
//!
//! Multibase/multicodec encoding and decoding of Ed25519 key material and
//! signature values, as used on the wire by data-integrity proofs:
//!
//! - public keys: `z` multibase header, base58-btc, `0xed 0x01` multicodec
//!   prefix, 32 key bytes (`z6Mk…`);
//! - secret seeds: same shape with the `0x80 0x26` multicodec prefix
//!   (`z3u2…`);
//! - signature values (`proofValue`): `z` multibase header over the raw
//!   64 signature bytes, no multicodec prefix.
//!
//! Decoding checks the multibase base, the multicodec header, and the
//! payload length, and reports every failure as a
//! [`CryptoError::KeyError`](dsig_core::CryptoError) with the offending
//! detail.

use multibase::Base;

use dsig_core::CryptoError;

use crate::ed25519::{Ed25519PublicKey, Ed25519Signature};

/// Multicodec prefix for an Ed25519 public key.
pub const ED25519_PUB_CODEC: [u8; 2] = [0xed, 0x01];

/// Multicodec prefix for an Ed25519 secret key seed.
pub const ED25519_SECRET_CODEC: [u8; 2] = [0x80, 0x26];

/// Encode an Ed25519 public key in multikey form (`z6Mk…`).
pub fn encode_public_key(key: &Ed25519PublicKey) -> String {
    let mut data = Vec::with_capacity(ED25519_PUB_CODEC.len() + 32);
    data.extend_from_slice(&ED25519_PUB_CODEC);
    data.extend_from_slice(key.as_bytes());
    multibase::encode(Base::Base58Btc, data)
}

/// Decode a multikey-form Ed25519 public key (`z6Mk…`).
pub fn decode_public_key(encoded: &str) -> Result<Ed25519PublicKey, CryptoError> {
    let bytes = decode_multicodec(encoded, &ED25519_PUB_CODEC, "public key")?;
    to_key_array(&bytes).map(Ed25519PublicKey::from_bytes)
}

/// Encode an Ed25519 public key in the legacy `publicKeyBase58`
/// representation: bare base58-btc, no multibase header, no multicodec
/// prefix.
pub fn encode_public_key_base58(key: &Ed25519PublicKey) -> String {
    Base::Base58Btc.encode(key.as_bytes())
}

/// Decode a bare base58-btc Ed25519 public key, the legacy
/// `publicKeyBase58` representation with no multibase header and no
/// multicodec prefix.
pub fn decode_public_key_base58(encoded: &str) -> Result<Ed25519PublicKey, CryptoError> {
    let bytes = Base::Base58Btc
        .decode(encoded)
        .map_err(|e| CryptoError::KeyError(format!("invalid base58 public key: {e}")))?;
    to_key_array(&bytes).map(Ed25519PublicKey::from_bytes)
}

/// Encode an Ed25519 secret seed in multikey form (`z3u2…`).
pub fn encode_secret_seed(seed: &[u8; 32]) -> String {
    let mut data = Vec::with_capacity(ED25519_SECRET_CODEC.len() + 32);
    data.extend_from_slice(&ED25519_SECRET_CODEC);
    data.extend_from_slice(seed);
    multibase::encode(Base::Base58Btc, data)
}

/// Decode a multikey-form Ed25519 secret seed (`z3u2…`).
pub fn decode_secret_seed(encoded: &str) -> Result<[u8; 32], CryptoError> {
    let bytes = decode_multicodec(encoded, &ED25519_SECRET_CODEC, "secret key")?;
    to_key_array(&bytes)
}

/// Encode a signature value for the `proofValue` field.
pub fn encode_signature(signature: &Ed25519Signature) -> String {
    multibase::encode(Base::Base58Btc, signature.as_bytes())
}

/// Decode a `proofValue` signature string.
pub fn decode_signature(encoded: &str) -> Result<Ed25519Signature, CryptoError> {
    let (base, bytes) = multibase::decode(encoded)
        .map_err(|e| CryptoError::KeyError(format!("invalid multibase signature: {e}")))?;
    if base != Base::Base58Btc {
        return Err(CryptoError::KeyError(format!(
            "signature must be base58-btc multibase, got {base:?}"
        )));
    }
    let arr: [u8; 64] = bytes.as_slice().try_into().map_err(|_| {
        CryptoError::KeyError(format!("signature must be 64 bytes, got {}", bytes.len()))
    })?;
    Ok(Ed25519Signature::from_bytes(arr))
}

fn decode_multicodec(
    encoded: &str,
    codec: &[u8; 2],
    what: &str,
) -> Result<Vec<u8>, CryptoError> {
    let (base, bytes) = multibase::decode(encoded)
        .map_err(|e| CryptoError::KeyError(format!("invalid multibase {what}: {e}")))?;
    if base != Base::Base58Btc {
        return Err(CryptoError::KeyError(format!(
            "{what} must be base58-btc multibase, got {base:?}"
        )));
    }
    match bytes.strip_prefix(codec.as_slice()) {
        Some(rest) => Ok(rest.to_vec()),
        None => Err(CryptoError::KeyError(format!(
            "{what} has wrong multicodec header"
        ))),
    }
}

fn to_key_array(bytes: &[u8]) -> Result<[u8; 32], CryptoError> {
    bytes.try_into().map_err(|_| {
        CryptoError::KeyError(format!("key must be 32 bytes, got {}", bytes.len()))
    })
}
