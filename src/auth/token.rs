//! Bearer token model returned by the OAuth2 token endpoint.

// self
use crate::{
	_prelude::*,
	auth::{Scope, Secret},
};

/// OAuth2 bearer token issued by the `client_credentials` grant.
///
/// Operations accept whichever snapshot the caller supplies and never check
/// expiry themselves; [`TokenCache`](crate::ext::TokenCache) layers freshness
/// tracking on top for callers that want automatic re-authentication.
/// Replacing a token has no effect on requests already in flight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
	/// Space-delimited scopes granted to the application.
	#[serde(default)]
	pub scope: Scope,
	/// Opaque bearer secret presented on every authenticated call.
	pub access_token: Secret,
	/// Token type used to prefix the `Authorization` header, typically `Bearer`.
	pub token_type: String,
	/// Identifier of the application the token was issued to.
	#[serde(default)]
	pub app_id: String,
	/// Validity window in seconds, relative to issuance.
	pub expires_in: u64,
}
impl AccessToken {
	/// Derives the `Authorization` header value: `"<token_type> <access_token>"`.
	pub fn authorization(&self) -> String {
		format!("{} {}", self.token_type, self.access_token.expose())
	}

	/// Iterates over the individual granted scopes.
	pub fn scopes(&self) -> impl Iterator<Item = &str> {
		self.scope.iter()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	const TOKEN_JSON: &str = "{\"scope\":\"s1 s2\",\"access_token\":\"T\",\"token_type\":\"Bearer\",\
		\"app_id\":\"APP-1\",\"expires_in\":28800}";

	#[test]
	fn authorization_joins_type_and_value() {
		let token: AccessToken =
			serde_json::from_str(TOKEN_JSON).expect("Token fixture should decode.");

		assert_eq!(token.authorization(), "Bearer T");
		assert_eq!(token.app_id, "APP-1");
		assert_eq!(token.expires_in, 28800);
	}

	#[test]
	fn scopes_split_the_grant_string() {
		let token: AccessToken =
			serde_json::from_str(TOKEN_JSON).expect("Token fixture should decode.");

		assert_eq!(token.scopes().collect::<Vec<_>>(), vec!["s1", "s2"]);
	}

	#[test]
	fn optional_fields_default_when_absent() {
		let token: AccessToken = serde_json::from_str(
			"{\"access_token\":\"T\",\"token_type\":\"Bearer\",\"expires_in\":60}",
		)
		.expect("Token without scope or app_id should still decode.");

		assert!(token.scope.is_empty());
		assert!(token.app_id.is_empty());
	}
}
