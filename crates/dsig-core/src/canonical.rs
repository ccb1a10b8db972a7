//! # Canonical Serialization — JCS Byte Production
//!
//! This module defines `CanonicalJson`, the sole construction path for the
//! strings that get hashed during verify-data computation.
//!
//! ## Security Invariant
//!
//! The `CanonicalJson` newtype has a private inner field. The only way to
//! construct it is through `CanonicalJson::new()`, which serializes the value
//! with `serde_jcs` (RFC 8785, JSON Canonicalization Scheme): object keys
//! sorted by UTF-16 code units, no insignificant whitespace, ES6 number
//! serialization, standard JSON string escaping.
//!
//! Any function that hashes data for signing or verification must accept
//! `&CanonicalJson`, and the only way to produce one is through this
//! constructor. Two independent implementations canonicalizing the same
//! logical value therefore hash identical bytes, which is the whole game:
//! a single divergent byte invalidates every signature.

use serde::Serialize;

use crate::error::CanonicalizationError;

/// A JSON value serialized in RFC 8785 canonical form.
///
/// # Invariants
///
/// - The only constructor is [`CanonicalJson::new()`].
/// - Object keys are sorted; there is no insignificant whitespace.
/// - Numbers use the ES6 shortest-round-trip serialization.
/// - The inner string is valid UTF-8 JSON.
///
/// These invariants are enforced by the constructor and cannot be violated
/// by downstream code because the inner `String` is private.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalJson(String);

impl CanonicalJson {
    /// Canonicalize any serializable value.
    ///
    /// Pure function of the logical input: key insertion order, formatting,
    /// and other representation details do not affect the output.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalizationError::SerializationFailed`] if the value
    /// falls outside the JSON data model (non-finite floats, map keys that
    /// are not strings, structures `serde_json` cannot represent).
    pub fn new(value: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let s = serde_jcs::to_string(value)?;
        Ok(Self(s))
    }

    /// The canonical form as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical form as bytes, the exact input to digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length of the canonical form in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical form is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the wrapper and return the canonical string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CanonicalJson {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CanonicalJson {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_object_keys() {
        let data = serde_json::json!({"b": 1, "a": 2});
        let c = CanonicalJson::new(&data).expect("should canonicalize");
        assert_eq!(c.as_str(), r#"{"a":2,"b":1}"#);
    }

    #[test]
    fn no_insignificant_whitespace() {
        let data = serde_json::json!({"z": 1, "m": [1, 2, 3], "a": {"y": true}});
        let c = CanonicalJson::new(&data).unwrap();
        assert_eq!(c.as_str(), r#"{"a":{"y":true},"m":[1,2,3],"z":1}"#);
    }

    #[test]
    fn nested_objects_sorted() {
        let data = serde_json::json!({
            "outer": {"b": 2, "a": 1},
            "list": [3, 2, 1]
        });
        let c = CanonicalJson::new(&data).unwrap();
        assert_eq!(c.as_str(), r#"{"list":[3,2,1],"outer":{"a":1,"b":2}}"#);
    }

    #[test]
    fn deterministic() {
        let data = serde_json::json!({"x": [1, "two", null], "y": {"k": false}});
        let a = CanonicalJson::new(&data).unwrap();
        let b = CanonicalJson::new(&data).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn integer_and_float_forms() {
        // ES6 number serialization: integral floats lose the fraction dot.
        let c = CanonicalJson::new(&serde_json::json!({"n": 42})).unwrap();
        assert_eq!(c.as_str(), r#"{"n":42}"#);
        let c = CanonicalJson::new(&serde_json::json!({"n": 1.5})).unwrap();
        assert_eq!(c.as_str(), r#"{"n":1.5}"#);
        let c = CanonicalJson::new(&serde_json::json!({"n": 10.0})).unwrap();
        assert_eq!(c.as_str(), r#"{"n":10}"#);
    }

    #[test]
    fn empty_object_and_array() {
        assert_eq!(CanonicalJson::new(&serde_json::json!({})).unwrap().as_str(), "{}");
        assert_eq!(CanonicalJson::new(&serde_json::json!([])).unwrap().as_str(), "[]");
    }

    #[test]
    fn bare_string_value() {
        let c = CanonicalJson::new(&"hello world").unwrap();
        assert_eq!(c.as_str(), "\"hello world\"");
    }

    #[test]
    fn unicode_passes_through_unescaped() {
        let data = serde_json::json!({"name": "\u{00e9}\u{00e8}\u{00ea}"});
        let c = CanonicalJson::new(&data).unwrap();
        assert!(c.as_str().contains('\u{00e9}'));
    }

    #[test]
    fn credential_vector_matches_reference_canonical_form() {
        // Canonical form of a W3C credential, checked against the exact
        // output of the reference `canonicalize` implementation.
        let credential = serde_json::json!({
            "@context": [
                "https://www.w3.org/2018/credentials/v1",
                {
                    "AlumniCredential": "https://schema.org#AlumniCredential",
                    "alumniOf": "https://schema.org#alumniOf"
                },
                "https://w3id.org/security/data-integrity/v2"
            ],
            "id": "http://example.edu/credentials/1872",
            "type": ["VerifiableCredential", "AlumniCredential"],
            "issuer": "https://example.edu/issuers/565049",
            "issuanceDate": "2010-01-01T19:23:24Z",
            "credentialSubject": {
                "id": "https://example.edu/students/alice",
                "alumniOf": "Example University"
            }
        });
        let expected = concat!(
            r#"{"@context":["https://www.w3.org/2018/credentials/v1","#,
            r#"{"AlumniCredential":"https://schema.org#AlumniCredential","alumniOf":"https://schema.org#alumniOf"},"#,
            r#""https://w3id.org/security/data-integrity/v2"],"#,
            r#""credentialSubject":{"alumniOf":"Example University","id":"https://example.edu/students/alice"},"#,
            r#""id":"http://example.edu/credentials/1872","#,
            r#""issuanceDate":"2010-01-01T19:23:24Z","#,
            r#""issuer":"https://example.edu/issuers/565049","#,
            r#""type":["VerifiableCredential","AlumniCredential"]}"#,
        );
        let c = CanonicalJson::new(&credential).unwrap();
        assert_eq!(c.as_str(), expected);
    }

    #[test]
    fn len_and_is_empty() {
        let c = CanonicalJson::new(&serde_json::json!({"a": 1})).unwrap();
        assert!(!c.is_empty());
        assert_eq!(c.len(), c.as_str().len());
    }
}
