//! Opt-in extensions layered on top of the token-explicit core.
//!
//! The core operations take explicit token snapshots and never check expiry;
//! extensions in this module add lifecycle management for callers that want it
//! without changing the core contract.

pub mod token_cache;

pub use token_cache::*;
