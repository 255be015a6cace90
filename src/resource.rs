//! Wire-facing resource shapes mirrored from the provider's JSON contract.
//!
//! Field names are the provider's fixed snake_case contract; renaming any of
//! them breaks wire compatibility. Timestamps and state fields stay opaque
//! strings because the server is authoritative for their values, while
//! relation and method fields are closed sum types with a forward-compatible
//! fallback.

pub mod identity;
pub mod link;
pub mod payment;
pub mod payout;

pub use identity::*;
pub use link::*;
pub use payment::*;
pub use payout::*;
