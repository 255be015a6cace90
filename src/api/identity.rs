//! OpenID-Connect identity operation.

// crates.io
use http::Method;
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	client::Client,
	http::ApiTransport,
	obs::CallKind,
	resource::UserInfoResponse,
};

const USER_INFO_PATH: &str = "/v1/identity/openidconnect/userinfo/?schema=openid";

impl<T> Client<T>
where
	T: ?Sized + ApiTransport,
{
	/// Fetches identity claims for the authenticated application's user.
	pub async fn user_info(&self, token: &AccessToken) -> Result<UserInfoResponse> {
		let request = self.authed(Method::GET, USER_INFO_PATH, token, None)?;

		self.call(CallKind::UserInfo, "user_info", request).await
	}
}
