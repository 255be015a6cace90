//! Credential, scope, and bearer-token models used by the request pipeline.

pub mod credentials;
pub mod scope;
pub mod secret;
pub mod token;

pub use credentials::*;
pub use scope::*;
pub use secret::*;
pub use token::*;
