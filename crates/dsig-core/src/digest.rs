//! # Digest Computation and Verify Data
//!
//! SHA-256 digests computed exclusively from [`CanonicalJson`], and the
//! `VerifyData` byte sequence built from a pair of them.
//!
//! ## Security Invariant
//!
//! The signature `sha(algorithm, data: &CanonicalJson)` makes it a compile
//! error to hash raw bytes that did not pass through canonicalization.
//! `VerifyData` can only be built from two [`Sha256Digest`] values, with the
//! proof digest first, so the concatenation order is fixed by position and
//! cannot depend on evaluation order anywhere upstream.

use sha2::{Digest, Sha256};

use crate::canonical::CanonicalJson;
use crate::error::DigestError;

/// The digest algorithm this cryptosuite requires. There is no negotiation.
pub const SUITE_DIGEST_ALGORITHM: &str = "SHA-256";

/// A SHA-256 digest over a canonical JSON form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha256Digest([u8; 32]);

impl Sha256Digest {
    /// Output length in bytes.
    pub const LENGTH: usize = 32;

    /// Wrap raw digest bytes. Prefer [`sha()`] for computing digests.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw 32-byte digest.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Compute the digest of a canonical form.
///
/// The `algorithm` tag must equal [`SUITE_DIGEST_ALGORITHM`]; the parameter
/// exists so hosts driving multiple cryptosuites surface a configuration
/// mismatch here instead of producing wrong bytes silently.
///
/// # Errors
///
/// Returns [`DigestError::UnsupportedAlgorithm`] for any other tag.
pub fn sha(algorithm: &str, data: &CanonicalJson) -> Result<Sha256Digest, DigestError> {
    if algorithm != SUITE_DIGEST_ALGORITHM {
        return Err(DigestError::UnsupportedAlgorithm(algorithm.to_string()));
    }
    Ok(sha256(data))
}

/// Compute the SHA-256 digest of a canonical form.
pub fn sha256(data: &CanonicalJson) -> Sha256Digest {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    Sha256Digest(bytes)
}

/// The exact byte sequence that is signed or checked against a signature:
/// the proof-options digest followed by the document digest.
///
/// Ephemeral: constructed fresh per sign or verify call, never persisted.
/// Signing and verification functions accept `&VerifyData` rather than raw
/// slices, so only bytes assembled here can be signed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerifyData([u8; 64]);

impl VerifyData {
    /// Total length in bytes: two SHA-256 digests.
    pub const LENGTH: usize = 2 * Sha256Digest::LENGTH;

    /// Concatenate the two digests, proof first, document second.
    ///
    /// The order is part of the wire contract on both the sign and verify
    /// paths; it is fixed here by parameter position.
    pub fn new(proof_digest: Sha256Digest, document_digest: Sha256Digest) -> Self {
        let mut bytes = [0u8; Self::LENGTH];
        bytes[..Sha256Digest::LENGTH].copy_from_slice(proof_digest.as_bytes());
        bytes[Sha256Digest::LENGTH..].copy_from_slice(document_digest.as_bytes());
        Self(bytes)
    }

    /// The full 64-byte sequence.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// The proof-options digest half.
    pub fn proof_digest(&self) -> &[u8] {
        &self.0[..Sha256Digest::LENGTH]
    }

    /// The document digest half.
    pub fn document_digest(&self) -> &[u8] {
        &self.0[Sha256Digest::LENGTH..]
    }
}

impl AsRef<[u8]> for VerifyData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
