//! Background Tasks Module
//!
//! Optional tasks that run alongside the cache.
//!
//! # Tasks
//! - Sweep: Periodically purges expired cache entries

mod sweep;

pub use sweep::{spawn_configured_sweep, spawn_sweep_task};
