//! Definition Cache - A thread-safe, time-expiring in-memory cache
//!
//! Stores typed definition objects under string keys. Single definitions are
//! transparently encoded to a portable, self-describing string so values can
//! cross process or plugin boundaries without compiled-type coupling; result
//! sets and type keys are stored as native in-memory objects.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use definition_cache::{Definition, DefinitionCache};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct UserDefinition {
//!     id: String,
//!     email: String,
//! }
//!
//! impl Definition for UserDefinition {
//!     fn type_name() -> &'static str {
//!         "UserDefinition"
//!     }
//! }
//!
//! let cache = DefinitionCache::new(Duration::from_secs(30));
//! let user = UserDefinition {
//!     id: "u1".to_string(),
//!     email: "u1@example.com".to_string(),
//! };
//! cache.add_definition("u1", &user).unwrap();
//!
//! let cached: Option<UserDefinition> = cache.get_definition("u1").unwrap();
//! assert_eq!(cached, Some(user));
//! ```

pub mod cache;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use cache::DefinitionCache;
pub use codec::DefinitionCodec;
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use models::{Definition, DefinitionTypeKey, ResultSet};
pub use tasks::spawn_sweep_task;
