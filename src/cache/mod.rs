//! Cache Module
//!
//! The definition cache and its supporting store and entry types.

mod definition_cache;
mod entry;
mod store;


// Re-export public types
pub use definition_cache::DefinitionCache;
pub use entry::{CacheEntry, CachePayload};
pub use store::ExpiringStore;

use std::time::Duration;

// == Public Constants ==
/// Share of the store dropped by Clear (the whole store)
pub const CLEAR_TRIM_PERCENT: u32 = 100;

/// Longest Remove will wait for the exclusive lock
pub const REMOVE_LOCK_TIMEOUT: Duration = Duration::from_millis(500);
