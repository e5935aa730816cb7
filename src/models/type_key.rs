//! Definition Type Key Module
//!
//! Small token identifying a definition type.

use serde::{Deserialize, Serialize};

// == Definition Type Key ==
/// Identifies a definition type by name and moniker.
///
/// Stored as a native in-memory object, never encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefinitionTypeKey {
    /// Name of the definition type this key identifies
    pub type_name: String,
    /// Short identifier distinguishing keys for the same type
    pub moniker: String,
}

impl DefinitionTypeKey {
    // == Constructor ==
    /// Creates a new type key.
    pub fn new(type_name: impl Into<String>, moniker: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            moniker: moniker.into(),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_key_new() {
        let key = DefinitionTypeKey::new("UserDefinition", "user");
        assert_eq!(key.type_name, "UserDefinition");
        assert_eq!(key.moniker, "user");
    }

    #[test]
    fn test_type_key_equality() {
        let a = DefinitionTypeKey::new("UserDefinition", "user");
        let b = DefinitionTypeKey::new("UserDefinition", "user");
        let c = DefinitionTypeKey::new("UserDefinition", "admin");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
