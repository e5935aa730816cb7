//! Error types for the definition cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the definition cache.
///
/// A cache miss is never an error: lookups return `Ok(None)` on absence.
/// Errors are reserved for caller mistakes (invalid arguments), stored-kind
/// mismatches, and codec failures. Nothing is logged internally; every
/// failure propagates to the caller.
#[derive(Error, Debug)]
pub enum CacheError {
    /// A required argument was missing or malformed (e.g. empty key)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A cache hit whose stored payload kind/type does not match the request
    #[error("The cache entry was not of the correct type.")]
    InvalidEntryType,

    /// The encoded type tag does not match the requested type
    #[error("Encoded type `{found}` does not match requested type `{expected}`")]
    TypeMismatch {
        /// Type name the caller asked for
        expected: String,
        /// Type name embedded in the encoded string
        found: String,
    },

    /// A definition could not be encoded to its portable string form
    #[error("Failed to encode definition: {0}")]
    Encode(#[source] serde_json::Error),

    /// An encoded definition could not be reconstructed
    #[error("Failed to decode cached definition: {0}")]
    Decode(#[source] serde_json::Error),

    /// The configured entry lifetime text could not be parsed
    #[error("Invalid entry lifetime `{0}`: expected HH:MM:SS")]
    InvalidLifetime(String),
}

// == Result Type Alias ==
/// Convenience Result type for the definition cache.
pub type Result<T> = std::result::Result<T, CacheError>;
