//! # dsig-crypto — Ed25519 Key Material
//!
//! The signing-side and key-decoding building blocks consumed by the
//! cryptosuite:
//!
//! - **Ed25519** key pairs, public keys, signatures, and the host-facing
//!   signer capability.
//! - **Multikey encoding** (`multikey`): multibase base58-btc with multicodec
//!   headers for public keys and secret seeds, and bare multibase encoding
//!   for signature values.
//!
//! ## Security Invariant
//!
//! Signing input MUST be `&VerifyData`. You cannot sign raw bytes: the only
//! way to obtain a `VerifyData` is the canonicalize-hash-concatenate pipeline
//! in `dsig-core`, so every signature in the system covers canonical bytes.
//! Private keys are never serialized or logged; `Ed25519KeyPair` does not
//! implement `Serialize` and its `Debug` output is redacted.
//!
//! ## Crate Policy
//!
//! - Depends only on `dsig-core` internally.
//! - No mocking of cryptographic operations in tests: real Ed25519, real
//!   multibase vectors.

pub mod ed25519;
pub mod multikey;

pub use ed25519::{verify, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature, Ed25519Signer};
