//! Background Tasks Module
//!
//! Contains background tasks a host can run alongside the cache.
//!
//! # Tasks
//! - Expiry sweep: reclaims expired entries at configured intervals

mod sweep;

pub use sweep::spawn_sweep_task;
