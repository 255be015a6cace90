//! Redacting wrapper shared by the client secret and access token values.

// self
use crate::_prelude::*;

/// Sensitive string wrapper keeping credential material out of logs.
///
/// Both the configured client secret and server-issued access tokens live
/// behind this type; formatting always yields `<redacted>` and the raw value
/// is only reachable through [`expose`](Self::expose).
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);
impl Secret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for Secret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl From<String> for Secret {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for Secret {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl Debug for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Secret").field(&"<redacted>").finish()
	}
}
impl Display for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn formatters_redact() {
		let secret = Secret::new("super-secret");

		assert_eq!(format!("{secret:?}"), "Secret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
		assert_eq!(secret.expose(), "super-secret");
	}

	#[test]
	fn serde_round_trips_the_raw_value() {
		let secret: Secret =
			serde_json::from_str("\"token-value\"").expect("Secret should deserialize from a string.");

		assert_eq!(secret.expose(), "token-value");
		assert_eq!(
			serde_json::to_string(&secret).expect("Secret should serialize back to a string."),
			"\"token-value\"",
		);
	}
}
