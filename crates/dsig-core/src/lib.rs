//! # dsig-core — Foundational Types for the dsig Stack
//!
//! This crate is the bedrock of the dsig data-integrity workspace. It defines
//! the primitives every byte that gets signed or verified must flow through,
//! enforcing correctness guarantees at compile time. Every other crate in the
//! workspace depends on `dsig-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`CanonicalJson` newtype.** ALL digest computation flows through
//!    `CanonicalJson::new()`, which applies RFC 8785 (JSON Canonicalization
//!    Scheme) serialization. No raw `serde_json::to_string()` for digests.
//!    Ever. This prevents the canonicalization split defect class by
//!    construction: two code paths serializing the same logical value
//!    differently and signing one while verifying the other.
//!
//! 2. **`sha()` accepts only `&CanonicalJson`.** Compile-time enforcement
//!    that all digest paths flow through canonicalization.
//!
//! 3. **`VerifyData` newtype.** The exact byte sequence a signer signs and a
//!    verifier checks. Constructed only from a (proof digest, document digest)
//!    pair, fixing the concatenation order by position. Signing and
//!    verification functions accept `&VerifyData`, never raw slices.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `dsig-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All errors use `thiserror` enums defined in [`error`].

pub mod canonical;
pub mod digest;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalJson;
pub use digest::{sha, Sha256Digest, VerifyData, SUITE_DIGEST_ALGORITHM};
pub use error::{CanonicalizationError, CryptoError, DigestError, SuiteError};
