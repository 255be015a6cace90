//! End-to-end checkout scenario: authenticate, create a payment, resolve the
//! approval redirect, and execute once the payer has approved.

// crates.io
use httpmock::prelude::*;
// self
use paypal_rest::{
	_preludet::*,
	resource::{
		Amount, Intent, Payer, PaymentCreateRequest, PaymentExecuteRequest, PaymentMethod,
		RedirectUrls, Relation, Transaction,
	},
};

const APPROVAL_HREF: &str = "https://www.sandbox.paypal.com/webscr?cmd=_express-checkout&token=EC-1";

#[tokio::test]
async fn checkout_flow_resolves_the_approval_url() {
	let server = MockServer::start_async().await;
	let client = test_client(server.url(""));
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/oauth2/token");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"T\",\"token_type\":\"Bearer\",\"scope\":\"s1 s2\",\
				\"app_id\":\"APP-1\",\"expires_in\":28800}",
			);
		})
		.await;
	let create_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/payments/payment").header("authorization", "Bearer T");
			then.status(201).header("content-type", "application/json").body(format!(
				"{{\"id\":\"PAY-1\",\"intent\":\"sale\",\"state\":\"created\",\
				\"payer\":{{\"payment_method\":\"paypal\"}},\
				\"transactions\":[{{\"amount\":{{\"currency\":\"USD\",\"total\":\"9.99\"}}}}],\
				\"links\":[{{\"href\":\"{APPROVAL_HREF}\",\"rel\":\"approval_url\",\
				\"method\":\"REDIRECT\"}}]}}",
			));
		})
		.await;
	let execute_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v1/payments/payment/PAY-1/execute/")
				.header("authorization", "Bearer T");
			then.status(200).header("content-type", "application/json").body(
				"{\"id\":\"PAY-1\",\"intent\":\"sale\",\"state\":\"approved\",\
				\"payer\":{\"payment_method\":\"paypal\"}}",
			);
		})
		.await;
	let token = client.fetch_token().await.expect("Token exchange should succeed.");

	assert_eq!(token.authorization(), "Bearer T");

	let create = PaymentCreateRequest {
		intent: Intent::Sale,
		payer: Payer { payment_method: PaymentMethod::Paypal, ..Default::default() },
		redirect_urls: RedirectUrls {
			cancel_url: "https://shop.example.com/cancel".into(),
			return_url: "https://shop.example.com/return".into(),
		},
		transactions: vec![Transaction {
			amount: Amount { currency: "USD".into(), total: "9.99".into(), details: None },
			..Default::default()
		}],
	};
	let payment = client.create_payment(&token, &create).await.expect("Create should succeed.");
	let approval = payment
		.link_by_relation(&Relation::ApprovalUrl)
		.expect("Created payment should expose an approval link.");

	assert_eq!(approval.href, APPROVAL_HREF);

	// The payer id arrives on the return_url once the payer approves in the browser.
	let executed = client
		.execute_payment(&token, &payment.id, &PaymentExecuteRequest { payer_id: "PAYER-7".into() })
		.await
		.expect("Execute should succeed.");

	assert_eq!(executed.state, "approved");

	token_mock.assert_async().await;
	create_mock.assert_async().await;
	execute_mock.assert_async().await;
}
