//! Demonstrates a full checkout against a local mock server—authenticate, create a `9.99 USD`
//! sale, resolve the approval redirect, execute after payer approval, and send a payout.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use paypal_rest::{
	auth::Credentials,
	client::Client,
	env::Environment,
	resource::{
		Amount, Intent, Payer, PaymentCreateRequest, PaymentExecuteRequest, PaymentMethod,
		PayoutAmount, PayoutItem, PayoutRequest, RecipientType, RedirectUrls, Relation,
		SenderBatchHeader, Transaction,
	},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/oauth2/token");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-access\",\"token_type\":\"Bearer\",\
				\"scope\":\"https://api.paypal.com/v1/payments/.*\",\"app_id\":\"APP-1\",\
				\"expires_in\":28800}",
			);
		})
		.await;
	let create_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/payments/payment");
			then.status(201).header("content-type", "application/json").body(
				"{\"id\":\"PAY-1\",\"intent\":\"sale\",\"state\":\"created\",\
				\"payer\":{\"payment_method\":\"paypal\"},\
				\"links\":[{\"href\":\"https://www.sandbox.paypal.com/webscr\
?cmd=_express-checkout&token=EC-1\",\"rel\":\"approval_url\",\"method\":\"REDIRECT\"}]}",
			);
		})
		.await;
	let execute_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/payments/payment/PAY-1/execute/");
			then.status(200).header("content-type", "application/json").body(
				"{\"id\":\"PAY-1\",\"intent\":\"sale\",\"state\":\"approved\",\
				\"payer\":{\"payment_method\":\"paypal\"}}",
			);
		})
		.await;
	let payout_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/payments/payouts");
			then.status(201).header("content-type", "application/json").body(
				"{\"batch_header\":{\"payout_batch_id\":\"BATCH-9\",\
				\"batch_status\":\"SUCCESS\",\
				\"sender_batch_header\":{\"email_subject\":\"You have a payout\"}}}",
			);
		})
		.await;
	// Swap the custom origin for `Credentials::new(..).sandbox()` to target the real sandbox.
	let client = Client::new(
		Credentials::new("demo-client-id", "demo-client-secret")
			.with_environment(Environment::Custom(server.url(""))),
	);
	let token = client.fetch_token().await?;

	println!("Authorized with scope: {}.", token.scope);

	let create = PaymentCreateRequest {
		intent: Intent::Sale,
		payer: Payer { payment_method: PaymentMethod::Paypal, ..Default::default() },
		redirect_urls: RedirectUrls {
			cancel_url: "https://shop.example.com/cancel".into(),
			return_url: "https://shop.example.com/return".into(),
		},
		transactions: vec![Transaction {
			amount: Amount { currency: "USD".into(), total: "9.99".into(), details: None },
			description: "Demo sale".into(),
			..Default::default()
		}],
	};
	let payment = client.create_payment(&token, &create).await?;
	let approval = payment
		.link_by_relation(&Relation::ApprovalUrl)
		.expect("Created paypal payments should expose an approval link.");

	println!("Send the payer to: {}.", approval.href);

	// After approval the provider redirects to the return_url with the payer id attached.
	let executed = client
		.execute_payment(&token, &payment.id, &PaymentExecuteRequest { payer_id: "PAYER-7".into() })
		.await?;

	println!("Payment {} is now {}.", executed.id, executed.state);

	let payout = PayoutRequest {
		sender_batch_header: SenderBatchHeader {
			email_subject: "You have a payout".into(),
			recipient_type: None,
			sender_batch_id: "batch-7".into(),
		},
		items: vec![PayoutItem {
			recipient_type: RecipientType::Email,
			amount: PayoutAmount { currency: "USD".into(), value: "9.01".into() },
			note: "Thanks for your business".into(),
			receiver: "dev@example.com".into(),
			sender_item_id: "item-1".into(),
		}],
	};
	let accepted = client.payout(&token, true, &payout).await?;

	println!(
		"Payout batch {} is {}.",
		accepted.batch_header.payout_batch_id, accepted.batch_header.batch_status,
	);

	token_mock.assert_async().await;
	create_mock.assert_async().await;
	execute_mock.assert_async().await;
	payout_mock.assert_async().await;

	Ok(())
}
