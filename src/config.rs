//! Configuration Module
//!
//! Handles the entry-lifetime setting supplied by an external configuration
//! source, with a textual `HH:MM:SS` duration format.

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use chrono::{NaiveTime, Timelike};

use crate::error::{CacheError, Result};

// == Public Constants ==
/// Configuration key holding the entry lifetime text
pub const ENTRY_LIFETIME_KEY: &str = "ENTRY_LIFETIME";

/// Default entry lifetime text used when the key is absent
pub const ENTRY_LIFETIME_DEFAULT: &str = "00:00:30";

// == Lifetime Parsing ==
/// Parses an `HH:MM:SS` lifetime text into a Duration.
///
/// Invalid text is a construction-time failure, not a fallback to the
/// default.
///
/// # Arguments
/// * `text` - Lifetime in `HH:MM:SS` form, e.g. "00:00:30"
pub fn parse_entry_lifetime(text: &str) -> Result<Duration> {
    let time = NaiveTime::parse_from_str(text, "%H:%M:%S")
        .map_err(|_| CacheError::InvalidLifetime(text.to_string()))?;
    Ok(Duration::from_secs(u64::from(time.num_seconds_from_midnight())))
}

// == Cache Config ==
/// Configuration for a [`DefinitionCache`](crate::cache::DefinitionCache).
///
/// The lifetime applies uniformly to every entry and is fixed at cache
/// construction.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long each entry lives after insertion
    pub entry_lifetime: Duration,
}

impl CacheConfig {
    /// Creates a config from an externally supplied settings map.
    ///
    /// Reads `ENTRY_LIFETIME`; a missing key falls back to "00:00:30", but
    /// present-and-invalid text is an error.
    pub fn from_settings(settings: &HashMap<String, String>) -> Result<Self> {
        let text = settings
            .get(ENTRY_LIFETIME_KEY)
            .map(String::as_str)
            .unwrap_or(ENTRY_LIFETIME_DEFAULT);
        Ok(Self {
            entry_lifetime: parse_entry_lifetime(text)?,
        })
    }

    /// Creates a config from environment variables.
    ///
    /// # Environment Variables
    /// - `ENTRY_LIFETIME` - Entry lifetime as `HH:MM:SS` (default: "00:00:30")
    pub fn from_env() -> Result<Self> {
        let text =
            env::var(ENTRY_LIFETIME_KEY).unwrap_or_else(|_| ENTRY_LIFETIME_DEFAULT.to_string());
        Ok(Self {
            entry_lifetime: parse_entry_lifetime(&text)?,
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            entry_lifetime: Duration::from_secs(30),
        }
    }
}
