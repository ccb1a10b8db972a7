//! # Error Types
//!
//! The error taxonomy for the dsig stack. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Errors are raised synchronously at the point of detection and never
//!   retried internally.
//! - Message text is stable. Interoperability test suites compare on the
//!   exact wording, so changing a message is a breaking change.
//! - No partial results accompany an error: verify-data construction is
//!   all-or-nothing.

use thiserror::Error;

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// The value falls outside the JSON data model.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Error in digest computation.
#[derive(Error, Debug)]
pub enum DigestError {
    /// A caller asked for a digest algorithm other than the suite's fixed one.
    #[error("unsupported digest algorithm \"{0}\"; this cryptosuite requires SHA-256")]
    UnsupportedAlgorithm(String),
}

/// Error in key handling or signature verification.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Key generation, decoding, or parsing failed.
    #[error("key error: {0}")]
    KeyError(String),

    /// Signature verification failed.
    #[error("signature verification failed: {0}")]
    VerificationFailed(String),
}

/// Top-level error type returned by cryptosuite operations.
#[derive(Error, Debug)]
pub enum SuiteError {
    /// A verify-data request named a cryptosuite other than this one.
    #[error("\"cryptosuite.name\" must be \"{expected}\".")]
    SuiteMismatch {
        /// The fixed name of this suite.
        expected: &'static str,
    },

    /// The secured document's context does not extend the proof's context.
    #[error("document.@context does not start with proof.@context")]
    ContextMismatch,

    /// The verifier factory was given an unrecognized verification method type.
    #[error("Unsupported key type \"{0}\".")]
    UnsupportedKeyType(String),

    /// The sign-configured suite's verifier factory was invoked.
    #[error("This cryptosuite must only be used with \"sign\".")]
    SignUsage,

    /// A host supplied a signer whose algorithm disagrees with the suite's.
    #[error("The signer's algorithm \"{actual}\" does not match the required algorithm for the cryptosuite \"{required}\".")]
    AlgorithmMismatch {
        /// The algorithm the signer reported.
        actual: String,
        /// The algorithm this suite requires.
        required: &'static str,
    },

    /// Canonicalization failed.
    #[error(transparent)]
    Canonicalization(#[from] CanonicalizationError),

    /// Digest computation failed.
    #[error(transparent)]
    Digest(#[from] DigestError),

    /// Key handling or signature verification failed.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}
