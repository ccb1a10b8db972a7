//! # Verifier Factory
//!
//! Turns a verification-method descriptor into an [`Ed25519Verifier`]
//! capability. Dispatch is over a closed set of key representations; the
//! embedded public key is decoded once, at factory time, so a returned
//! verifier can never fail on key material.

use serde::{Deserialize, Serialize};

use dsig_core::{CryptoError, SuiteError, VerifyData};
use dsig_crypto::{multikey, Ed25519PublicKey, Ed25519Signature};

use crate::suite::REQUIRED_ALGORITHM;

/// A verification-method descriptor, as found in a controller document.
///
/// Unknown fields (`@context` and friends) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationMethod {
    /// The key representation, e.g. `Multikey`.
    #[serde(rename = "type")]
    pub method_type: String,

    /// The method identifier, typically `<controller>#<key-id>`.
    pub id: String,

    /// The controller of this key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,

    /// Multibase-encoded public key (`Multikey`,
    /// `Ed25519VerificationKey2020`).
    #[serde(
        rename = "publicKeyMultibase",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub public_key_multibase: Option<String>,

    /// Bare base58-encoded public key (`Ed25519VerificationKey2018`).
    #[serde(
        rename = "publicKeyBase58",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub public_key_base58: Option<String>,
}

/// The closed set of key representations this suite verifies with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyRepresentation {
    Multikey,
    VerificationKey2020,
    VerificationKey2018,
}

impl KeyRepresentation {
    fn from_type(method_type: &str) -> Option<Self> {
        match method_type {
            "Multikey" => Some(Self::Multikey),
            "Ed25519VerificationKey2020" => Some(Self::VerificationKey2020),
            "Ed25519VerificationKey2018" => Some(Self::VerificationKey2018),
            _ => None,
        }
    }

    /// Decode the representation's public-key field into the signature
    /// algorithm's native key form.
    fn decode(self, method: &VerificationMethod) -> Result<Ed25519PublicKey, CryptoError> {
        match self {
            Self::Multikey | Self::VerificationKey2020 => {
                let encoded = method.public_key_multibase.as_deref().ok_or_else(|| {
                    CryptoError::KeyError(
                        "verification method is missing publicKeyMultibase".to_string(),
                    )
                })?;
                multikey::decode_public_key(encoded)
            }
            Self::VerificationKey2018 => {
                let encoded = method.public_key_base58.as_deref().ok_or_else(|| {
                    CryptoError::KeyError(
                        "verification method is missing publicKeyBase58".to_string(),
                    )
                })?;
                multikey::decode_public_key_base58(encoded)
            }
        }
    }
}

pub(crate) fn create_verifier(method: &VerificationMethod) -> Result<Ed25519Verifier, SuiteError> {
    let representation = KeyRepresentation::from_type(&method.method_type)
        .ok_or_else(|| SuiteError::UnsupportedKeyType(method.method_type.clone()))?;
    let public_key = representation.decode(method)?;
    // Reject keys off the curve now so verification can never fail on
    // malformed key material later.
    public_key.to_verifying_key()?;
    tracing::debug!(id = %method.id, ?representation, "created verifier");
    Ok(Ed25519Verifier {
        id: method.id.clone(),
        public_key,
    })
}

/// A verification capability bound to one decoded public key.
///
/// Stateless beyond the key and identifier; created once per verification
/// call.
#[derive(Debug, Clone)]
pub struct Ed25519Verifier {
    id: String,
    public_key: Ed25519PublicKey,
}

impl Ed25519Verifier {
    /// The signature algorithm this verifier checks, `Ed25519`.
    pub fn algorithm(&self) -> &'static str {
        REQUIRED_ALGORITHM
    }

    /// The verification-method identifier this capability was built from.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The decoded public key.
    pub fn public_key(&self) -> &Ed25519PublicKey {
        &self.public_key
    }

    /// Check a signature over verify data. Returns `true` iff valid.
    pub fn verify(&self, data: &VerifyData, signature: &Ed25519Signature) -> bool {
        let Ok(verifying_key) = self.public_key.to_verifying_key() else {
            return false;
        };
        dsig_crypto::verify(data, signature, &verifying_key).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::create_verify_cryptosuite;
    use dsig_core::{digest::sha256, CanonicalJson};
    use dsig_crypto::Ed25519KeyPair;

    fn multikey_method(kp: &Ed25519KeyPair) -> VerificationMethod {
        let public = kp.public_key().to_multibase();
        VerificationMethod {
            method_type: "Multikey".to_string(),
            id: format!("did:key:{public}#{public}"),
            controller: Some(format!("did:key:{public}")),
            public_key_multibase: Some(public),
            public_key_base58: None,
        }
    }

    fn verify_data() -> VerifyData {
        let c = CanonicalJson::new(&serde_json::json!({"a": 1})).unwrap();
        VerifyData::new(sha256(&c), sha256(&c))
    }

    #[test]
    fn creates_verifier_from_multikey() {
        let kp = Ed25519KeyPair::generate();
        let method = multikey_method(&kp);
        let verifier = create_verify_cryptosuite().create_verifier(&method).unwrap();
        assert_eq!(verifier.algorithm(), "Ed25519");
        assert_eq!(verifier.id(), method.id);
    }

    #[test]
    fn creates_verifier_from_verification_key_2020() {
        let kp = Ed25519KeyPair::generate();
        let mut method = multikey_method(&kp);
        method.method_type = "Ed25519VerificationKey2020".to_string();
        assert!(create_verify_cryptosuite().create_verifier(&method).is_ok());
    }

    #[test]
    fn creates_verifier_from_verification_key_2018() {
        let kp = Ed25519KeyPair::generate();
        let method = VerificationMethod {
            method_type: "Ed25519VerificationKey2018".to_string(),
            id: "did:example:1234#key-1".to_string(),
            controller: Some("did:example:1234".to_string()),
            public_key_multibase: None,
            public_key_base58: Some(multikey::encode_public_key_base58(&kp.public_key())),
        };
        let verifier = create_verify_cryptosuite().create_verifier(&method).unwrap();
        assert_eq!(verifier.public_key(), &kp.public_key());
    }

    #[test]
    fn rejects_unknown_key_type() {
        let kp = Ed25519KeyPair::generate();
        let mut method = multikey_method(&kp);
        method.method_type = "BadKeyType".to_string();
        let err = create_verify_cryptosuite()
            .create_verifier(&method)
            .unwrap_err();
        assert_eq!(err.to_string(), "Unsupported key type \"BadKeyType\".");
    }

    #[test]
    fn rejects_missing_key_material() {
        let method = VerificationMethod {
            method_type: "Multikey".to_string(),
            id: "did:example:1234#key-1".to_string(),
            controller: None,
            public_key_multibase: None,
            public_key_base58: None,
        };
        let err = create_verify_cryptosuite()
            .create_verifier(&method)
            .unwrap_err();
        assert!(err.to_string().contains("publicKeyMultibase"));
    }

    #[test]
    fn verifier_accepts_good_and_rejects_bad_signatures() {
        let kp = Ed25519KeyPair::generate();
        let method = multikey_method(&kp);
        let verifier = create_verify_cryptosuite().create_verifier(&method).unwrap();

        let data = verify_data();
        let sig = kp.sign(&data);
        assert!(verifier.verify(&data, &sig));

        let mut bad = *sig.as_bytes();
        bad[0] ^= 0x01;
        assert!(!verifier.verify(&data, &Ed25519Signature::from_bytes(bad)));
    }

    #[test]
    fn deserializes_from_controller_document_json() {
        let json = serde_json::json!({
            "@context": "https://w3id.org/security/multikey/v1",
            "id": "did:key:z6MkrJVnaZkeFzdQyMZu1cgjg7k1pZZ6pvBQ7XJPt4swbTQ2#z6MkrJVnaZkeFzdQyMZu1cgjg7k1pZZ6pvBQ7XJPt4swbTQ2",
            "type": "Multikey",
            "controller": "did:key:z6MkrJVnaZkeFzdQyMZu1cgjg7k1pZZ6pvBQ7XJPt4swbTQ2",
            "publicKeyMultibase": "z6MkrJVnaZkeFzdQyMZu1cgjg7k1pZZ6pvBQ7XJPt4swbTQ2"
        });
        let method: VerificationMethod = serde_json::from_value(json).unwrap();
        let verifier = create_verify_cryptosuite().create_verifier(&method).unwrap();
        assert_eq!(
            verifier.id(),
            "did:key:z6MkrJVnaZkeFzdQyMZu1cgjg7k1pZZ6pvBQ7XJPt4swbTQ2#z6MkrJVnaZkeFzdQyMZu1cgjg7k1pZZ6pvBQ7XJPt4swbTQ2"
        );
    }
}
