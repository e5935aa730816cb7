//! Definition Contract
//!
//! Trait implemented by every domain object the cache can encode.

use serde::de::DeserializeOwned;
use serde::Serialize;

// == Definition Trait ==
/// Contract for typed definition payloads.
///
/// A definition is any serializable domain object with a stable, unique type
/// name. The type name is embedded in the encoded string so a stored value
/// can be reconstructed without the reader and writer sharing compiled types;
/// the codec refuses to decode under a different name.
///
/// Polymorphic definition families should be modeled as a serde-tagged enum:
/// the enum carries one type name, and serde's own tagging preserves the
/// concrete variant across the round trip.
///
/// # Example
/// ```
/// use definition_cache::Definition;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// struct UserDefinition {
///     id: String,
///     email: String,
/// }
///
/// impl Definition for UserDefinition {
///     fn type_name() -> &'static str {
///         "UserDefinition"
///     }
/// }
/// ```
pub trait Definition: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Stable discriminator embedded in the encoded form.
    fn type_name() -> &'static str;
}
