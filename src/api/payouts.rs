//! Batch payout operation.

// crates.io
use http::Method;
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	client::{Client, encode_body},
	http::ApiTransport,
	obs::CallKind,
	resource::{PayoutRequest, PayoutResponse},
};

impl<T> Client<T>
where
	T: ?Sized + ApiTransport,
{
	/// Disburses a batch of payouts in one server-side transaction group.
	///
	/// With `sync_mode` the provider processes the batch before responding,
	/// so the returned batch status is final; otherwise the batch is queued
	/// and the status reflects acceptance only.
	pub async fn payout(
		&self,
		token: &AccessToken,
		sync_mode: bool,
		request: &PayoutRequest,
	) -> Result<PayoutResponse> {
		let path = format!("/v1/payments/payouts?sync_mode={sync_mode}");
		let body = encode_body(request)?;
		let request = self.authed(Method::POST, &path, token, Some(body))?;

		self.call(CallKind::Payout, "payout", request).await
	}
}
