//! Sandbox/live host resolution for relative API paths.

// self
use crate::_prelude::*;

const SANDBOX_ORIGIN: &str = "https://api.sandbox.paypal.com";
const LIVE_ORIGIN: &str = "https://api.paypal.com";

/// Target API environment selecting the base origin for every call.
///
/// [`Environment::Custom`] carries an explicit origin so tests and demos can
/// point a client at a local mock server instead of the fixed hosts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
	/// Test environment under `api.sandbox.paypal.com`.
	Sandbox,
	/// Production environment under `api.paypal.com`.
	#[default]
	Live,
	/// Explicit origin override, e.g. `http://127.0.0.1:8080`.
	Custom(String),
}
impl Environment {
	/// Returns the base origin for this environment.
	pub fn origin(&self) -> &str {
		match self {
			Environment::Sandbox => SANDBOX_ORIGIN,
			Environment::Live => LIVE_ORIGIN,
			Environment::Custom(origin) => origin,
		}
	}

	/// Resolves a relative API path against the environment origin.
	///
	/// Pure string composition; the path is trusted as-is and validated only
	/// when the request is assembled.
	pub fn url(&self, path: &str) -> String {
		format!("{}{path}", self.origin())
	}
}
