//! # dsig-suite — The eddsa-jcs-2022 Cryptosuite
//!
//! Implements the `eddsa-jcs-2022` data-integrity cryptosuite: the exact
//! byte sequence a signer signs and a verifier checks is built by
//! canonicalizing the proof options and the secured document independently
//! with JCS (RFC 8785), hashing each with SHA-256, and concatenating the two
//! digests, proof digest first.
//!
//! - **Suite descriptors** (`suite.rs`): [`create_sign_cryptosuite()`] and
//!   [`create_verify_cryptosuite()`] produce the two variants of one
//!   [`Cryptosuite`], differing only in the context-reconciliation policy and
//!   in whether the verifier factory is enabled.
//!
//! - **Verify data** (`verify_data.rs`): context reconciliation,
//!   `proofValue` stripping, and the canonicalize-hash-concatenate pipeline.
//!
//! - **Verifier factory** (`verifier.rs`): turns a verification-method
//!   descriptor (`Multikey`, `Ed25519VerificationKey2020`,
//!   `Ed25519VerificationKey2018`) into an [`Ed25519Verifier`] capability.
//!
//! - **Proof options** (`proof.rs`): typed assembly of the proof metadata a
//!   host binds into the signed digest.
//!
//! This crate performs no JSON-LD expansion, resolves no context URLs, and
//! does no I/O. Outer orchestration (document loading, proof-purpose checks,
//! embedding proofs in documents) belongs to the host framework.

pub mod proof;
pub mod suite;
pub mod verifier;
pub mod verify_data;

pub use proof::{ProofOptions, ProofPurpose, PROOF_TYPE};
pub use suite::{
    create_sign_cryptosuite, create_verify_cryptosuite, Cryptosuite, SuiteMode,
    REQUIRED_ALGORITHM, SUITE_NAME,
};
pub use verifier::{Ed25519Verifier, VerificationMethod};
pub use verify_data::VerifyDataParams;
