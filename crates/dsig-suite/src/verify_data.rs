//! # Verify-Data Construction
//!
//! Builds the byte sequence that is signed or checked against a signature:
//! SHA-256 over the JCS form of the proof options, then SHA-256 over the JCS
//! form of the document, concatenated proof-first.
//!
//! Context reconciliation runs before canonicalization and is the one place
//! the sign and verify configurations differ:
//!
//! - signing: the proof options inherit the document's `@context` verbatim,
//!   so the signed proof declares the context it was bound under;
//! - verifying: the document's `@context` must start with every term of the
//!   proof's `@context`, in order, and the document is then canonicalized
//!   under exactly the proof's context, not its own possibly-longer one.
//!
//! All work happens on cloned maps. The caller's document and proof options
//! are never mutated, and no partial result survives an error.

use serde_json::{Map, Value};

use dsig_core::{sha, CanonicalJson, SuiteError, VerifyData, SUITE_DIGEST_ALGORITHM};

use crate::suite::{SuiteMode, SUITE_NAME};

const CONTEXT: &str = "@context";
const PROOF_VALUE: &str = "proofValue";

/// The inputs to verify-data construction, as supplied by the host.
///
/// `cryptosuite` is the name of the suite the host believes it is driving;
/// it must equal [`SUITE_NAME`].
#[derive(Debug, Clone, Copy)]
pub struct VerifyDataParams<'a> {
    /// Name of the cryptosuite the host is driving.
    pub cryptosuite: &'a str,
    /// The document being secured or verified, without its `proof` field.
    pub document: &'a Map<String, Value>,
    /// The proof options; a present `proofValue` is ignored.
    pub proof: &'a Map<String, Value>,
}

pub(crate) fn create_verify_data(
    mode: SuiteMode,
    params: &VerifyDataParams<'_>,
) -> Result<VerifyData, SuiteError> {
    if params.cryptosuite != SUITE_NAME {
        return Err(SuiteError::SuiteMismatch {
            expected: SUITE_NAME,
        });
    }

    let mut document = params.document.clone();
    let mut proof = params.proof.clone();
    match mode {
        SuiteMode::Verify => reconcile_verify(&mut document, &proof)?,
        SuiteMode::Sign => reconcile_sign(&document, &mut proof),
    }

    // The signature value is the output being protected, never an input to
    // its own computation.
    proof.remove(PROOF_VALUE);

    // The two branches are independent pure computations; order between them
    // is not observable because concatenation is fixed by position.
    let proof_canonical = CanonicalJson::new(&proof)?;
    let document_canonical = CanonicalJson::new(&document)?;
    let proof_digest = sha(SUITE_DIGEST_ALGORITHM, &proof_canonical)?;
    let document_digest = sha(SUITE_DIGEST_ALGORITHM, &document_canonical)?;

    tracing::debug!(
        ?mode,
        proof_len = proof_canonical.len(),
        document_len = document_canonical.len(),
        "built verify data"
    );
    Ok(VerifyData::new(proof_digest, document_digest))
}

/// Verify-mode policy: the document's context must start with all terms of
/// the proof's context, in order; the working document is then canonicalized
/// under the proof's context value verbatim.
fn reconcile_verify(
    document: &mut Map<String, Value>,
    proof: &Map<String, Value>,
) -> Result<(), SuiteError> {
    let Some(proof_context) = proof.get(CONTEXT) else {
        return Ok(());
    };
    let proof_terms = context_terms(proof_context);
    let document_terms: &[Value] = match document.get(CONTEXT) {
        Some(value) => context_terms(value),
        None => &[],
    };
    for (i, term) in proof_terms.iter().enumerate() {
        // A proof context longer than the document's is a mismatch: the
        // missing element cannot equal the proof's term.
        if document_terms.get(i) != Some(term) {
            return Err(SuiteError::ContextMismatch);
        }
    }
    document.insert(CONTEXT.to_string(), proof_context.clone());
    Ok(())
}

/// Sign-mode policy: the proof options inherit the document's context.
fn reconcile_sign(document: &Map<String, Value>, proof: &mut Map<String, Value>) {
    if let Some(context) = document.get(CONTEXT) {
        proof.insert(CONTEXT.to_string(), context.clone());
    }
}

/// A context value as a sequence of terms: a bare value counts as a
/// one-element sequence. Terms are compared structurally, never resolved.
fn context_terms(context: &Value) -> &[Value] {
    match context {
        Value::Array(terms) => terms,
        other => std::slice::from_ref(other),
    }
}
