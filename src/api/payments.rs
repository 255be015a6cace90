//! Payment resource operations.

// crates.io
use http::Method;
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	client::{Client, encode_body},
	http::ApiTransport,
	obs::CallKind,
	resource::{Payment, PaymentCreateRequest, PaymentExecuteRequest, PaymentListResponse},
};

const PAYMENT_PATH: &str = "/v1/payments/payment";

impl<T> Client<T>
where
	T: ?Sized + ApiTransport,
{
	/// Lists payments visible to the authenticated application.
	///
	/// Pagination and filtering parameters are not supported; the provider's
	/// default page is returned.
	pub async fn list_payments(&self, token: &AccessToken) -> Result<PaymentListResponse> {
		let request = self.authed(Method::GET, PAYMENT_PATH, token, None)?;

		self.call(CallKind::PaymentList, "list_payments", request).await
	}

	/// Creates a payment and returns it with its follow-up links.
	///
	/// For `paypal`-funded payments the response links include
	/// `approval_url`, the redirect target where the payer approves the
	/// payment before it can be executed.
	pub async fn create_payment(
		&self,
		token: &AccessToken,
		request: &PaymentCreateRequest,
	) -> Result<Payment> {
		let body = encode_body(request)?;
		let request = self.authed(Method::POST, PAYMENT_PATH, token, Some(body))?;

		self.call(CallKind::PaymentCreate, "create_payment", request).await
	}

	/// Executes a payer-approved payment and returns its settled state.
	pub async fn execute_payment(
		&self,
		token: &AccessToken,
		payment_id: &str,
		request: &PaymentExecuteRequest,
	) -> Result<Payment> {
		let path = format!("{PAYMENT_PATH}/{payment_id}/execute/");
		let body = encode_body(request)?;
		let request = self.authed(Method::POST, &path, token, Some(body))?;

		self.call(CallKind::PaymentExecute, "execute_payment", request).await
	}
}
