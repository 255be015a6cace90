//! PayPal v1 REST API client—OAuth2 client-credentials auth, payments, batch payouts, and
//! HATEOAS link navigation over an injectable transport.

#![deny(clippy::all, missing_docs)]
#![warn(unused_crate_dependencies)]

pub mod api;
pub mod auth;
pub mod client;
pub mod env;
pub mod error;
pub mod ext;
pub mod http;
pub mod obs;
pub mod resource;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::{AccessToken, Credentials, Scope},
		client::Client,
		env::Environment,
		http::ReqwestTransport,
	};

	/// Client identifier baked into test credentials.
	pub const TEST_CLIENT_ID: &str = "test-client-id";
	/// Client secret baked into test credentials.
	pub const TEST_CLIENT_SECRET: &str = "test-client-secret";

	/// Builds credentials pointed at a local mock server origin.
	pub fn test_credentials(origin: impl Into<String>) -> Credentials {
		Credentials::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET)
			.with_environment(Environment::Custom(origin.into()))
	}

	/// Constructs a reqwest-backed [`Client`] pointed at a local mock server origin.
	pub fn test_client(origin: impl Into<String>) -> Client<ReqwestTransport> {
		Client::new(test_credentials(origin))
	}

	/// Bearer token fixture matching the mocked token endpoint responses used across tests.
	pub fn test_token() -> AccessToken {
		AccessToken {
			scope: Scope::new("s1 s2"),
			access_token: "T".into(),
			token_type: "Bearer".into(),
			app_id: "APP-1".into(),
			expires_in: 28800,
		}
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
