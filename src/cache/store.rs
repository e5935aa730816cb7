//! Expiring Store Module
//!
//! The TTL-capable key/value container underneath the definition cache.
//! Expiry is lazy: `lookup` never returns an expired entry, and reclamation
//! happens on `trim`, `sweep_expired`, or overwrite.

use std::collections::HashMap;
use std::time::Instant;

use crate::cache::{CacheEntry, CachePayload};

// == Expiring Store ==
/// Key/value container with per-entry absolute expiration.
///
/// The store itself is not synchronized; the owning cache coordinates all
/// access through its read/write lock and supplies each entry's expiration.
#[derive(Debug, Default)]
pub struct ExpiringStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl ExpiringStore {
    // == Constructor ==
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Insert ==
    /// Stores a payload under a key with the given absolute expiration.
    ///
    /// An existing entry under the same key is atomically replaced; its
    /// remaining lifetime does not carry over.
    pub fn insert(&mut self, key: String, payload: CachePayload, expires_at: Instant) {
        self.entries
            .insert(key, CacheEntry::new(payload, expires_at));
    }

    // == Lookup ==
    /// Retrieves the entry for a key, if present and not expired.
    ///
    /// Expired entries are unobservable from here on; their memory is
    /// reclaimed by `sweep_expired`, `trim`, or a later overwrite, not by
    /// the read path.
    pub fn lookup(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key).filter(|entry| !entry.is_expired())
    }

    // == Remove ==
    /// Removes the entry for a key.
    ///
    /// Returns true iff a live (non-expired) entry was removed. Removing an
    /// already-expired entry still reclaims it but reports false, matching
    /// what a reader would have observed.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.entries.remove(key) {
            Some(entry) => !entry.is_expired(),
            None => false,
        }
    }

    // == Trim ==
    /// Removes the given percentage of entries, expired entries first.
    ///
    /// Live entries are evicted soonest-expiring first once the expired ones
    /// are gone. `trim(100)` empties the store. Returns the number of
    /// entries removed.
    ///
    /// # Arguments
    /// * `percent` - Share of current entries to drop, clamped to 100
    pub fn trim(&mut self, percent: u32) -> usize {
        let percent = percent.min(100) as usize;
        let target = (self.entries.len() * percent).div_ceil(100);
        if target == 0 {
            return 0;
        }

        // Expired first, then soonest-expiring.
        let mut victims: Vec<(String, Instant)> = self
            .entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.expires_at))
            .collect();
        victims.sort_by_key(|(_, expires_at)| *expires_at);
        victims.truncate(target);

        for (key, _) in &victims {
            self.entries.remove(key);
        }
        victims.len()
    }

    // == Sweep Expired ==
    /// Removes all expired entries, returning how many were reclaimed.
    pub fn sweep_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries, including not-yet-reclaimed
    /// expired ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
