//! Cache Entry Module
//!
//! Defines the structure for individual cache entries: a payload of one of
//! three kinds plus an absolute expiration instant.

use std::any::Any;
use std::fmt;
use std::time::Instant;

use crate::models::DefinitionTypeKey;

// == Cache Payload ==
/// The three kinds of payload a cache entry can hold.
///
/// Only single definitions are encoded; result sets and type keys are stored
/// as native in-memory objects. Result sets are held behind `Any` because the
/// store is not generic over their element type; the cache downcasts on read
/// and reports a mismatch rather than ever returning a wrong-typed value.
pub enum CachePayload {
    /// A single definition, encoded with its type identity embedded
    EncodedDefinition(String),
    /// A result set, stored natively (element type recovered by downcast)
    ResultSet(Box<dyn Any + Send + Sync>),
    /// A type-identifying token, stored natively
    TypeKey(DefinitionTypeKey),
}

impl fmt::Debug for CachePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EncodedDefinition(encoded) => {
                f.debug_tuple("EncodedDefinition").field(encoded).finish()
            }
            Self::ResultSet(_) => f.write_str("ResultSet(..)"),
            Self::TypeKey(key) => f.debug_tuple("TypeKey").field(key).finish(),
        }
    }
}

// == Cache Entry ==
/// A single cache entry with payload and expiration metadata.
#[derive(Debug)]
pub struct CacheEntry {
    /// The stored payload
    pub payload: CachePayload,
    /// Absolute expiration instant, fixed at insertion
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry expiring at the given instant.
    ///
    /// The expiration is computed by the caller as `now + lifetime` at
    /// insertion time and is never extended by reads (no sliding expiration).
    pub fn new(payload: CachePayload, expires_at: Instant) -> Self {
        Self {
            payload,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once the current instant is
    /// greater than or equal to its expiration instant.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    fn type_key_payload() -> CachePayload {
        CachePayload::TypeKey(DefinitionTypeKey::new("UserDefinition", "user"))
    }

    #[test]
    fn test_entry_not_expired_before_lifetime() {
        let entry = CacheEntry::new(
            type_key_payload(),
            Instant::now() + Duration::from_secs(60),
        );
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expired_after_lifetime() {
        let entry = CacheEntry::new(
            type_key_payload(),
            Instant::now() + Duration::from_millis(50),
        );
        assert!(!entry.is_expired());

        sleep(Duration::from_millis(80));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        // Expires exactly now: current time >= expiration means expired.
        let entry = CacheEntry::new(type_key_payload(), Instant::now());
        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }

    #[test]
    fn test_payload_debug_does_not_panic() {
        let payload = CachePayload::ResultSet(Box::new(vec![1u32, 2, 3]));
        let rendered = format!("{:?}", payload);
        assert_eq!(rendered, "ResultSet(..)");
    }
}
