//! Scope handling for provider-issued token scope strings.

// self
use crate::_prelude::*;

/// Space-delimited scope string granted alongside an access token.
///
/// The provider's string is authoritative and echoed verbatim; this wrapper
/// only offers read access. No normalization, ordering, or deduplication is
/// applied, because the client never composes scope values itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scope(String);
impl Scope {
	/// Wraps a raw scope string as received from the provider.
	pub fn new(raw: impl Into<String>) -> Self {
		Self(raw.into())
	}

	/// Returns the raw space-delimited string.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns true when no scopes were granted.
	pub fn is_empty(&self) -> bool {
		self.iter().next().is_none()
	}

	/// Iterates over the individual granted scopes.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.split_whitespace()
	}

	/// Returns true if the grant includes the provided scope.
	pub fn contains(&self, scope: &str) -> bool {
		self.iter().any(|granted| granted == scope)
	}
}
impl From<String> for Scope {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for Scope {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl Display for Scope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
