//! Client credential set supplied once at construction.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
// self
use crate::{_prelude::*, auth::Secret, env::Environment};

/// Immutable credential set and environment selection for one client.
///
/// Constructed once and never mutated; the builder-style helpers consume and
/// return the value so setup reads as a chain.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	/// OAuth2 client identifier issued by the developer dashboard.
	pub client_id: String,
	/// Confidential client secret paired with the identifier.
	pub secret: Secret,
	/// `Accept-Language` value sent to the token endpoint.
	pub accept_language: String,
	/// Environment every relative path is resolved against.
	pub environment: Environment,
}
impl Credentials {
	const DEFAULT_ACCEPT_LANGUAGE: &str = "en_US";

	/// Creates live-environment credentials with the `en_US` default language.
	pub fn new(client_id: impl Into<String>, secret: impl Into<Secret>) -> Self {
		Self {
			client_id: client_id.into(),
			secret: secret.into(),
			accept_language: Self::DEFAULT_ACCEPT_LANGUAGE.into(),
			environment: Environment::Live,
		}
	}

	/// Switches the credential set to the sandbox environment.
	pub fn sandbox(self) -> Self {
		self.with_environment(Environment::Sandbox)
	}

	/// Overrides the environment.
	pub fn with_environment(mut self, environment: Environment) -> Self {
		self.environment = environment;

		self
	}

	/// Overrides the `Accept-Language` sent during authentication.
	pub fn with_accept_language(mut self, language: impl Into<String>) -> Self {
		self.accept_language = language.into();

		self
	}

	/// Derives the HTTP Basic `Authorization` value for the token endpoint.
	pub(crate) fn basic_authorization(&self) -> String {
		let pair = format!("{}:{}", self.client_id, self.secret.expose());

		format!("Basic {}", STANDARD.encode(pair))
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("client_id", &self.client_id)
			.field("secret", &self.secret)
			.field("accept_language", &self.accept_language)
			.field("environment", &self.environment)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn defaults_match_live_environment() {
		let credentials = Credentials::new("client-id", "client-secret");

		assert_eq!(credentials.environment, Environment::Live);
		assert_eq!(credentials.accept_language, "en_US");
	}

	#[test]
	fn sandbox_switches_environment() {
		let credentials = Credentials::new("client-id", "client-secret").sandbox();

		assert_eq!(credentials.environment, Environment::Sandbox);
	}

	#[test]
	fn basic_authorization_encodes_the_pair() {
		let credentials = Credentials::new("id", "secret");

		// base64("id:secret")
		assert_eq!(credentials.basic_authorization(), "Basic aWQ6c2VjcmV0");
	}

	#[test]
	fn debug_redacts_the_secret() {
		let rendered = format!("{:?}", Credentials::new("client-id", "client-secret"));

		assert!(!rendered.contains("client-secret"));
		assert!(rendered.contains("client-id"));
	}
}
