//! Definition Cache Module
//!
//! The public cache component: an expiring store behind a read/write lock,
//! with a type-preserving codec for definition payloads.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::debug;

use crate::cache::{CachePayload, ExpiringStore, CLEAR_TRIM_PERCENT, REMOVE_LOCK_TIMEOUT};
use crate::codec::DefinitionCodec;
use crate::config::{parse_entry_lifetime, CacheConfig};
use crate::error::{CacheError, Result};
use crate::models::{Definition, DefinitionTypeKey, ResultSet};

// == Definition Cache ==
/// Thread-safe, time-expiring cache for typed definition objects.
///
/// Single definitions are encoded to a portable string embedding their type
/// identity; result sets and type keys are stored as native objects. All
/// store access goes through one read/write lock: gets take it shared,
/// add/clear/sweep take it exclusive, and remove takes it exclusive with a
/// bounded wait.
///
/// The cache is an explicitly constructed dependency; a host wanting a
/// process-wide instance wraps it in an `Arc` and passes it around rather
/// than reaching for global state.
#[derive(Debug)]
pub struct DefinitionCache {
    /// The expiring store, guarded by the lock
    store: RwLock<ExpiringStore>,
    /// Lifetime applied uniformly to every entry, fixed at construction
    entry_lifetime: Duration,
    /// Definition string codec
    codec: DefinitionCodec,
    /// Set once by the first dispose call
    disposed: AtomicBool,
}

impl DefinitionCache {
    // == Constructors ==
    /// Creates a cache applying the given lifetime to every entry.
    pub fn new(entry_lifetime: Duration) -> Self {
        Self {
            store: RwLock::new(ExpiringStore::new()),
            entry_lifetime,
            codec: DefinitionCodec::new(),
            disposed: AtomicBool::new(false),
        }
    }

    /// Creates a cache from a textual `HH:MM:SS` lifetime.
    ///
    /// Invalid text fails construction with [`CacheError::InvalidLifetime`].
    pub fn from_lifetime_text(text: &str) -> Result<Self> {
        Ok(Self::new(parse_entry_lifetime(text)?))
    }

    /// Creates a cache from a [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.entry_lifetime)
    }

    /// Returns the lifetime applied to every entry.
    pub fn entry_lifetime(&self) -> Duration {
        self.entry_lifetime
    }

    // == Add Definition ==
    /// Stores a definition under a key, encoded with its type identity.
    ///
    /// Replaces any prior entry under the same key and computes a fresh
    /// absolute expiration.
    ///
    /// # Arguments
    /// * `key` - Non-empty cache key
    /// * `definition` - The definition to encode and store
    pub fn add_definition<T: Definition>(&self, key: &str, definition: &T) -> Result<()> {
        let encoded = self.codec.encode(definition)?;
        self.add_payload(key, CachePayload::EncodedDefinition(encoded))
    }

    // == Add Result Set ==
    /// Stores a result set under a key as a native in-memory object.
    pub fn add_result_set<T: Definition>(&self, key: &str, result_set: ResultSet<T>) -> Result<()> {
        self.add_payload(key, CachePayload::ResultSet(Box::new(result_set)))
    }

    // == Add Type Key ==
    /// Stores a definition type key under a key as a native in-memory object.
    pub fn add_type_key(&self, key: &str, type_key: DefinitionTypeKey) -> Result<()> {
        self.add_payload(key, CachePayload::TypeKey(type_key))
    }

    // == Get Definition ==
    /// Retrieves and decodes a definition.
    ///
    /// A miss returns `Ok(None)`. A hit is decoded as `T`; decode failures
    /// surface as errors, never as a miss. A hit whose payload is not an
    /// encoded definition fails with [`CacheError::InvalidEntryType`].
    pub fn get_definition<T: Definition>(&self, key: &str) -> Result<Option<T>> {
        Self::require_key(key)?;
        let store = self.store.read();
        match store.lookup(key) {
            Some(entry) => match &entry.payload {
                CachePayload::EncodedDefinition(encoded) => {
                    self.codec.decode(encoded).map(Some)
                }
                _ => Err(CacheError::InvalidEntryType),
            },
            None => Ok(None),
        }
    }

    // == Get Result Set ==
    /// Retrieves a result set with the expected element type.
    ///
    /// A hit holding a different payload kind or element type fails with
    /// [`CacheError::InvalidEntryType`]; a miss returns `Ok(None)`.
    pub fn get_result_set<T: Definition + Clone>(&self, key: &str) -> Result<Option<ResultSet<T>>> {
        Self::require_key(key)?;
        let store = self.store.read();
        match store.lookup(key) {
            Some(entry) => match &entry.payload {
                CachePayload::ResultSet(boxed) => boxed
                    .downcast_ref::<ResultSet<T>>()
                    .cloned()
                    .map(Some)
                    .ok_or(CacheError::InvalidEntryType),
                _ => Err(CacheError::InvalidEntryType),
            },
            None => Ok(None),
        }
    }

    // == Get Definition Type ==
    /// Retrieves a definition type key.
    ///
    /// Same invalid-type contract as [`get_result_set`](Self::get_result_set).
    pub fn get_definition_type(&self, key: &str) -> Result<Option<DefinitionTypeKey>> {
        Self::require_key(key)?;
        let store = self.store.read();
        match store.lookup(key) {
            Some(entry) => match &entry.payload {
                CachePayload::TypeKey(type_key) => Ok(Some(type_key.clone())),
                _ => Err(CacheError::InvalidEntryType),
            },
            None => Ok(None),
        }
    }

    // == Clear ==
    /// Drops every entry.
    ///
    /// Takes the lock exclusively and trims 100% of the store in one bulk
    /// operation.
    pub fn clear(&self) {
        let removed = self.store.write().trim(CLEAR_TRIM_PERCENT);
        debug!("Cache cleared: removed {} entries", removed);
    }

    // == Remove ==
    /// Removes the entry for a key, best-effort.
    ///
    /// Waits at most 500 ms for the exclusive lock. A timeout is not an
    /// error: it reports `Ok(false)`, the same as a missing key. Returns
    /// `Ok(true)` iff an entry was found and removed within the window.
    pub fn remove(&self, key: &str) -> Result<bool> {
        Self::require_key(key)?;
        match self.store.try_write_for(REMOVE_LOCK_TIMEOUT) {
            Some(mut store) => Ok(store.remove(key)),
            None => Ok(false),
        }
    }

    // == Sweep Expired ==
    /// Reclaims expired entries, returning how many were removed.
    ///
    /// Called periodically by [`spawn_sweep_task`](crate::tasks::spawn_sweep_task);
    /// safe to call directly as well.
    pub fn sweep_expired(&self) -> usize {
        self.store.write().sweep_expired()
    }

    // == Dispose ==
    /// Tears the cache down.
    ///
    /// Idempotent: only the first call empties the store. Using the cache
    /// after disposal is a caller error; operations observe an empty store.
    /// The lock and store themselves are released exactly once, by `Drop`.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        let removed = self.store.write().trim(CLEAR_TRIM_PERCENT);
        debug!("Cache disposed: released {} entries", removed);
    }

    // == Internals ==
    /// Validates the key, then stores the payload under the exclusive lock.
    ///
    /// The absolute expiration is computed before the lock is taken, so
    /// waiting for the lock does not stretch an entry's lifetime.
    fn add_payload(&self, key: &str, payload: CachePayload) -> Result<()> {
        Self::require_key(key)?;
        let expires_at = Instant::now() + self.entry_lifetime;
        let mut store = self.store.write();
        store.insert(key.to_string(), payload, expires_at);
        Ok(())
    }

    fn require_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(CacheError::InvalidArgument("key must not be empty".to_string()));
        }
        Ok(())
    }
}
