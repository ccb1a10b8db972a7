//! # Proof Options
//!
//! Typed assembly of the proof metadata a host binds into the signed digest.
//! The field set is rigid and `proofValue` is structurally absent: the
//! signature value is the output being protected and can never appear in the
//! options this type produces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use dsig_core::CanonicalizationError;

use crate::suite::SUITE_NAME;

/// The proof type every data-integrity proof carries.
pub const PROOF_TYPE: &str = "DataIntegrityProof";

/// The purpose of a cryptographic proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProofPurpose {
    /// The issuer asserts the secured claims are true.
    AssertionMethod,
    /// Authentication of the document's presenter.
    Authentication,
}

impl std::fmt::Display for ProofPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProofPurpose::AssertionMethod => write!(f, "assertionMethod"),
            ProofPurpose::Authentication => write!(f, "authentication"),
        }
    }
}

/// Proof metadata for a `DataIntegrityProof`, minus the signature value.
///
/// Serializes with W3C field names. In sign mode the `context` field is
/// overwritten by the document's context during verify-data construction;
/// setting it here matters only for the verify-mode prefix comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofOptions {
    /// Context the proof is declared under.
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// The proof type, [`PROOF_TYPE`].
    #[serde(rename = "type")]
    pub proof_type: String,

    /// The cryptosuite identifier, [`SUITE_NAME`].
    pub cryptosuite: String,

    /// When the proof was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// DID URL of the verification method.
    #[serde(rename = "verificationMethod")]
    pub verification_method: String,

    /// The purpose of this proof.
    #[serde(rename = "proofPurpose")]
    pub proof_purpose: ProofPurpose,
}

impl ProofOptions {
    /// Proof options for an assertion by `verification_method`, with no
    /// context and no timestamp.
    pub fn new(verification_method: impl Into<String>) -> Self {
        Self {
            context: None,
            proof_type: PROOF_TYPE.to_string(),
            cryptosuite: SUITE_NAME.to_string(),
            created: None,
            verification_method: verification_method.into(),
            proof_purpose: ProofPurpose::AssertionMethod,
        }
    }

    /// Set the creation timestamp.
    pub fn created_at(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Set the proof purpose.
    pub fn for_purpose(mut self, purpose: ProofPurpose) -> Self {
        self.proof_purpose = purpose;
        self
    }

    /// Convert into the map shape the verify-data builder consumes.
    pub fn into_map(self) -> Result<Map<String, Value>, CanonicalizationError> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            // A struct always serializes to an object.
            _ => unreachable!("ProofOptions serializes to a JSON object"),
        }
    }
}
