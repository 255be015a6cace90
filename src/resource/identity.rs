//! OpenID-Connect identity claims returned by the userinfo endpoint.

// self
use crate::_prelude::*;

/// Identity claims for the authenticated application's user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfoResponse {
	/// Provider-issued identity URL for the user.
	pub user_id: String,
	/// Full display name.
	pub name: String,
	/// Given name.
	pub given_name: String,
	/// Family name.
	pub family_name: String,
	/// Email address.
	pub email: String,
}
