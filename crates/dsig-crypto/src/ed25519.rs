//! # Ed25519 Signing and Verification
//!
//! Ed25519 key generation, signing, and verification for data-integrity
//! proofs.
//!
//! ## Security Invariant
//!
//! - Signing input MUST be `&VerifyData`. You cannot sign raw bytes: this
//!   enforces that every signature covers the canonicalize-hash-concatenate
//!   pipeline output and nothing else.
//! - Private keys are never serialized or logged. `Ed25519KeyPair` does not
//!   implement `Serialize` and its `Debug` output is redacted.
//!
//! ## Serde
//!
//! Public keys and signatures serialize as multibase base58-btc strings, the
//! wire representation data-integrity proofs use for key material and
//! `proofValue`.

use ed25519_dalek::{Signer as _, Verifier as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use dsig_core::{CryptoError, VerifyData};

use crate::multikey;

/// An Ed25519 public key (32 bytes) for signature verification.
///
/// Serializes as a multikey string (`z6Mk…`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519PublicKey([u8; 32]);

/// An Ed25519 signature (64 bytes).
///
/// Serializes as a multibase base58-btc string, the `proofValue` encoding.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519Signature([u8; 64]);

/// An Ed25519 key pair for signing operations.
///
/// Does not implement `Serialize`: private keys must not leak into logs,
/// responses, or artifacts.
pub struct Ed25519KeyPair {
    signing_key: ed25519_dalek::SigningKey,
}

impl Ed25519PublicKey {
    /// Create a public key from raw 32 bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw 32-byte public key.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the key in multikey form (`z6Mk…`).
    pub fn to_multibase(&self) -> String {
        multikey::encode_public_key(self)
    }

    /// Parse a key from multikey form.
    pub fn from_multibase(encoded: &str) -> Result<Self, CryptoError> {
        multikey::decode_public_key(encoded)
    }

    /// Convert to an `ed25519_dalek::VerifyingKey` for verification.
    pub fn to_verifying_key(&self) -> Result<ed25519_dalek::VerifyingKey, CryptoError> {
        ed25519_dalek::VerifyingKey::from_bytes(&self.0)
            .map_err(|e| CryptoError::KeyError(format!("invalid public key: {e}")))
    }
}

impl Serialize for Ed25519PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_multibase())
    }
}

impl<'de> Deserialize<'de> for Ed25519PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Self::from_multibase(&encoded).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let encoded = self.to_multibase();
        write!(f, "Ed25519PublicKey({}...)", &encoded[..12.min(encoded.len())])
    }
}

impl std::fmt::Display for Ed25519PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_multibase())
    }
}

impl Ed25519Signature {
    /// Create a signature from raw 64 bytes.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// The raw 64-byte signature.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Render the signature in `proofValue` form (`z…`).
    pub fn to_multibase(&self) -> String {
        multikey::encode_signature(self)
    }

    /// Parse a signature from `proofValue` form.
    pub fn from_multibase(encoded: &str) -> Result<Self, CryptoError> {
        multikey::decode_signature(encoded)
    }
}

impl Serialize for Ed25519Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_multibase())
    }
}

impl<'de> Deserialize<'de> for Ed25519Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Self::from_multibase(&encoded).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let encoded = self.to_multibase();
        write!(f, "Ed25519Signature({}...)", &encoded[..12.min(encoded.len())])
    }
}

impl std::fmt::Display for Ed25519Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_multibase())
    }
}

impl Ed25519KeyPair {
    /// Generate a new random Ed25519 key pair.
    pub fn generate() -> Self {
        let mut csprng = rand::rngs::OsRng;
        let signing_key = ed25519_dalek::SigningKey::generate(&mut csprng);
        Self { signing_key }
    }

    /// Create a key pair from a raw 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = ed25519_dalek::SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// Create a key pair from a multikey-encoded secret seed (`z3u2…`).
    pub fn from_secret_multibase(encoded: &str) -> Result<Self, CryptoError> {
        let seed = multikey::decode_secret_seed(encoded)?;
        Ok(Self::from_seed(&seed))
    }

    /// The public half of this key pair.
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign verify data.
    ///
    /// Ed25519 signing is deterministic: the same key and verify data always
    /// produce the same signature, which is what makes fixed test vectors
    /// reproducible across implementations.
    pub fn sign(&self, data: &VerifyData) -> Ed25519Signature {
        let sig = self.signing_key.sign(data.as_ref());
        Ed25519Signature(sig.to_bytes())
    }

    /// Bind this key pair into a host-facing signer capability.
    ///
    /// `id` is the verification-method identifier the resulting proofs will
    /// reference, typically `<controller>#<key-id>`.
    pub fn into_signer(self, id: impl Into<String>) -> Ed25519Signer {
        Ed25519Signer {
            keypair: self,
            id: id.into(),
        }
    }
}

impl std::fmt::Debug for Ed25519KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ed25519KeyPair(<private>)")
    }
}

/// The signer capability a host supplies when constructing a proof.
///
/// Exposes an algorithm tag the host checks against the suite's required
/// algorithm, an identifier for the proof's `verificationMethod` field, and
/// the signing operation over verify data.
pub struct Ed25519Signer {
    keypair: Ed25519KeyPair,
    id: String,
}

impl Ed25519Signer {
    /// The signature algorithm this signer implements.
    pub fn algorithm(&self) -> &'static str {
        "Ed25519"
    }

    /// The verification-method identifier bound to this signer.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sign verify data.
    pub fn sign(&self, data: &VerifyData) -> Ed25519Signature {
        self.keypair.sign(data)
    }
}

impl std::fmt::Debug for Ed25519Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519Signer")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Verify an Ed25519 signature over verify data.
///
/// Returns `Ok(())` if the signature is valid,
/// `Err(CryptoError::VerificationFailed)` otherwise.
pub fn verify(
    data: &VerifyData,
    signature: &Ed25519Signature,
    verifying_key: &ed25519_dalek::VerifyingKey,
) -> Result<(), CryptoError> {
    let sig = ed25519_dalek::Signature::from_bytes(&signature.0);
    verifying_key
        .verify(data.as_ref(), &sig)
        .map_err(|e| CryptoError::VerificationFailed(format!("Ed25519 verification failed: {e}")))
}
