//! Codec Module
//!
//! Converts typed definitions to and from a portable, self-describing string.
//!
//! The encoded form is a compact JSON envelope carrying an explicit type tag
//! alongside the field data:
//!
//! ```json
//! {"$type":"UserDefinition","$value":{"id":"u1","email":"u1@example.com"}}
//! ```
//!
//! Decoding reads the tag first and refuses to reconstruct a value under a
//! different type name, so a stored value can never silently come back as the
//! wrong type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CacheError, Result};
use crate::models::Definition;

// == Envelope ==
/// Wire format for encoded definitions: type tag plus field data.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    #[serde(rename = "$type")]
    type_name: String,
    #[serde(rename = "$value")]
    value: Value,
}

// == Definition Codec ==
/// Encodes and decodes definitions with full type preservation.
///
/// Output is compact (no pretty-printing) so entries stay small and the
/// format is stable for cross-boundary transport.
#[derive(Debug, Default, Clone)]
pub struct DefinitionCodec;

impl DefinitionCodec {
    // == Constructor ==
    /// Creates a new codec.
    pub fn new() -> Self {
        Self
    }

    // == Encode ==
    /// Encodes a definition into its portable string form.
    ///
    /// # Arguments
    /// * `definition` - The definition to encode
    pub fn encode<T: Definition>(&self, definition: &T) -> Result<String> {
        let envelope = Envelope {
            type_name: T::type_name().to_string(),
            value: serde_json::to_value(definition).map_err(CacheError::Encode)?,
        };
        serde_json::to_string(&envelope).map_err(CacheError::Encode)
    }

    // == Decode ==
    /// Reconstructs a definition from its encoded string form.
    ///
    /// Reads the type tag first: a tag that does not match `T::type_name()`
    /// fails with [`CacheError::TypeMismatch`] before any field data is
    /// touched. Malformed text or mismatching fields fail with
    /// [`CacheError::Decode`].
    ///
    /// # Arguments
    /// * `encoded` - An encoded string previously produced by [`encode`](Self::encode)
    pub fn decode<T: Definition>(&self, encoded: &str) -> Result<T> {
        let envelope: Envelope = serde_json::from_str(encoded).map_err(CacheError::Decode)?;
        if envelope.type_name != T::type_name() {
            return Err(CacheError::TypeMismatch {
                expected: T::type_name().to_string(),
                found: envelope.type_name,
            });
        }
        serde_json::from_value(envelope.value).map_err(CacheError::Decode)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct UserDefinition {
        id: String,
        email: String,
    }

    impl Definition for UserDefinition {
        fn type_name() -> &'static str {
            "UserDefinition"
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct OrderDefinition {
        id: String,
        total_cents: u64,
    }

    impl Definition for OrderDefinition {
        fn type_name() -> &'static str {
            "OrderDefinition"
        }
    }

    // Polymorphic family: one type name, serde tags the concrete variant.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(tag = "kind")]
    enum ContactDefinition {
        Person { name: String, age: u32 },
        Company { name: String, vat: String },
    }

    impl Definition for ContactDefinition {
        fn type_name() -> &'static str {
            "ContactDefinition"
        }
    }

    fn user() -> UserDefinition {
        UserDefinition {
            id: "u1".to_string(),
            email: "u1@example.com".to_string(),
        }
    }

    #[test]
    fn test_encode_is_compact_and_tagged() {
        let codec = DefinitionCodec::new();
        let encoded = codec.encode(&user()).unwrap();

        assert!(encoded.contains("\"$type\":\"UserDefinition\""));
        assert!(!encoded.contains('\n'), "encoding must not be pretty-printed");
    }

    #[test]
    fn test_round_trip() {
        let codec = DefinitionCodec::new();
        let original = user();

        let encoded = codec.encode(&original).unwrap();
        let decoded: UserDefinition = codec.decode(&encoded).unwrap();

        assert_eq!(decoded, original);
    }

    #[test]
    fn test_round_trip_polymorphic_variant() {
        let codec = DefinitionCodec::new();
        let original = ContactDefinition::Company {
            name: "Acme".to_string(),
            vat: "GB123".to_string(),
        };

        let encoded = codec.encode(&original).unwrap();
        let decoded: ContactDefinition = codec.decode(&encoded).unwrap();

        assert_eq!(decoded, original);
    }

    #[test]
    fn test_decode_wrong_type_fails() {
        let codec = DefinitionCodec::new();
        let encoded = codec.encode(&user()).unwrap();

        let result: Result<OrderDefinition> = codec.decode(&encoded);
        assert!(matches!(
            result,
            Err(CacheError::TypeMismatch { expected, found })
                if expected == "OrderDefinition" && found == "UserDefinition"
        ));
    }

    #[test]
    fn test_decode_corrupt_text_fails() {
        let codec = DefinitionCodec::new();

        let result: Result<UserDefinition> = codec.decode("{not json");
        assert!(matches!(result, Err(CacheError::Decode(_))));
    }

    #[test]
    fn test_decode_missing_fields_fails() {
        let codec = DefinitionCodec::new();
        let encoded = r#"{"$type":"UserDefinition","$value":{"id":"u1"}}"#;

        let result: Result<UserDefinition> = codec.decode(encoded);
        assert!(matches!(result, Err(CacheError::Decode(_))));
    }
}
