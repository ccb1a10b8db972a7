//! # Suite Descriptors
//!
//! The cryptosuite object a host signing/verification framework drives. The
//! sign and verify configurations are two variants of one type, selected at
//! construction time: they share the canonicalizer, the digest function, and
//! the verify-data skeleton, and differ only in the context-reconciliation
//! policy and in whether the verifier factory is enabled.

use serde::Serialize;

use dsig_core::{CanonicalJson, CanonicalizationError, SuiteError, VerifyData};

use crate::verifier::{self, Ed25519Verifier, VerificationMethod};
use crate::verify_data::{self, VerifyDataParams};

/// The fixed identifier of this cryptosuite.
pub const SUITE_NAME: &str = "eddsa-jcs-2022";

/// The signature algorithm this cryptosuite requires.
pub const REQUIRED_ALGORITHM: &str = "Ed25519";

/// Whether a suite instance is configured for proof creation or proof
/// verification. Fixed at construction, never per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuiteMode {
    /// Proof creation: the proof options inherit the document's context.
    Sign,
    /// Proof verification: the document's context must extend the proof's
    /// context, and the verifier factory is enabled.
    Verify,
}

/// The `eddsa-jcs-2022` cryptosuite descriptor.
///
/// Construct with [`create_sign_cryptosuite()`] or
/// [`create_verify_cryptosuite()`].
#[derive(Debug, Clone, Copy)]
pub struct Cryptosuite {
    mode: SuiteMode,
}

/// Create the suite configured for proof creation.
///
/// Its [`Cryptosuite::create_verifier()`] fails with the usage error.
pub fn create_sign_cryptosuite() -> Cryptosuite {
    Cryptosuite {
        mode: SuiteMode::Sign,
    }
}

/// Create the suite configured for proof verification.
pub fn create_verify_cryptosuite() -> Cryptosuite {
    Cryptosuite {
        mode: SuiteMode::Verify,
    }
}

impl Cryptosuite {
    /// The fixed suite identifier, `eddsa-jcs-2022`.
    pub const fn name(&self) -> &'static str {
        SUITE_NAME
    }

    /// The signature algorithm this suite requires, `Ed25519`.
    pub const fn required_algorithm(&self) -> &'static str {
        REQUIRED_ALGORITHM
    }

    /// Which configuration this instance carries.
    pub const fn mode(&self) -> SuiteMode {
        self.mode
    }

    /// Canonicalize a value with this suite's canonicalizer (JCS).
    ///
    /// # Errors
    ///
    /// Fails if the value falls outside the JSON data model.
    pub fn canonize(&self, value: &impl Serialize) -> Result<CanonicalJson, CanonicalizationError> {
        CanonicalJson::new(value)
    }

    /// Build the verify data for a document and proof options.
    ///
    /// Applies this suite's context-reconciliation policy, strips
    /// `proofValue` from the proof options, canonicalizes and hashes proof
    /// options and document independently, and concatenates the digests,
    /// proof digest first. The caller's maps are never mutated.
    ///
    /// # Errors
    ///
    /// - [`SuiteError::SuiteMismatch`] if `params.cryptosuite` is not this
    ///   suite's name.
    /// - [`SuiteError::ContextMismatch`] in verify mode when the document's
    ///   context does not start with the proof's context.
    /// - Canonicalization and digest failures propagate.
    pub fn create_verify_data(
        &self,
        params: &VerifyDataParams<'_>,
    ) -> Result<VerifyData, SuiteError> {
        verify_data::create_verify_data(self.mode, params)
    }

    /// Build a verifier capability from a verification-method descriptor.
    ///
    /// Enabled only in verify mode.
    ///
    /// # Errors
    ///
    /// - [`SuiteError::SignUsage`] if this suite was created for signing.
    /// - [`SuiteError::UnsupportedKeyType`] for an unrecognized method type.
    /// - Key-decoding failures propagate as crypto errors.
    pub fn create_verifier(
        &self,
        method: &VerificationMethod,
    ) -> Result<Ed25519Verifier, SuiteError> {
        match self.mode {
            SuiteMode::Sign => Err(SuiteError::SignUsage),
            SuiteMode::Verify => verifier::create_verifier(method),
        }
    }

    /// Check a host-supplied signer's algorithm against this suite.
    ///
    /// Hosts enforce this contract when constructing a proof; the suite
    /// itself never signs.
    ///
    /// # Errors
    ///
    /// [`SuiteError::AlgorithmMismatch`] when the algorithms disagree.
    pub fn check_signer_algorithm(&self, algorithm: &str) -> Result<(), SuiteError> {
        if algorithm != REQUIRED_ALGORITHM {
            return Err(SuiteError::AlgorithmMismatch {
                actual: algorithm.to_string(),
                required: REQUIRED_ALGORITHM,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_expose_fixed_identity() {
        for suite in [create_sign_cryptosuite(), create_verify_cryptosuite()] {
            assert_eq!(suite.name(), "eddsa-jcs-2022");
            assert_eq!(suite.required_algorithm(), "Ed25519");
        }
        assert_eq!(create_sign_cryptosuite().mode(), SuiteMode::Sign);
        assert_eq!(create_verify_cryptosuite().mode(), SuiteMode::Verify);
    }

    #[test]
    fn canonize_uses_jcs() {
        let suite = create_sign_cryptosuite();
        let c = suite.canonize(&serde_json::json!({"b": 1, "a": 2})).unwrap();
        assert_eq!(c.as_str(), r#"{"a":2,"b":1}"#);
    }

    #[test]
    fn sign_suite_refuses_verifier_creation() {
        let suite = create_sign_cryptosuite();
        let method = VerificationMethod {
            method_type: "Multikey".to_string(),
            id: "did:example:1234#key-1".to_string(),
            controller: None,
            public_key_multibase: None,
            public_key_base58: None,
        };
        let err = suite.create_verifier(&method).unwrap_err();
        assert_eq!(
            err.to_string(),
            "This cryptosuite must only be used with \"sign\"."
        );
    }

    #[test]
    fn signer_algorithm_check() {
        let suite = create_sign_cryptosuite();
        assert!(suite.check_signer_algorithm("Ed25519").is_ok());
        let err = suite.check_signer_algorithm("wrong-algorithm").unwrap_err();
        assert_eq!(
            err.to_string(),
            "The signer's algorithm \"wrong-algorithm\" does not match the \
             required algorithm for the cryptosuite \"Ed25519\"."
        );
    }
}
