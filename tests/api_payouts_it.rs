// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use paypal_rest::{
	_preludet::*,
	error::ResponseError,
	resource::{
		PayoutAmount, PayoutItem, PayoutRequest, RecipientType, Relation, SenderBatchHeader,
	},
};

fn payout_request() -> PayoutRequest {
	PayoutRequest {
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
	}
}

#[tokio::test]
async fn payout_submits_the_batch_in_sync_mode() {
	let server = MockServer::start_async().await;
	let client = test_client(server.url(""));
	let token = test_token();
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v1/payments/payouts")
				.query_param("sync_mode", "true")
				.header("authorization", "Bearer T")
				.json_body(json!({
					"sender_batch_header": {
						"email_subject": "You have a payout",
						"sender_batch_id": "batch-7",
					},
					"items": [{
						"recipient_type": "EMAIL",
						"amount": { "currency": "USD", "value": "9.01" },
						"note": "Thanks for your business",
						"receiver": "dev@example.com",
						"sender_item_id": "item-1",
					}],
				}));
			then.status(201).header("content-type", "application/json").body(
				"{\"batch_header\":{\"payout_batch_id\":\"BATCH-9\",\
				\"batch_status\":\"SUCCESS\",\
				\"sender_batch_header\":{\"email_subject\":\"You have a payout\",\
				\"sender_batch_id\":\"batch-7\"}},\
				\"links\":[{\"href\":\"https://api.sandbox.paypal.com/v1/payments/payouts/BATCH-9\",\
				\"rel\":\"self\",\"method\":\"GET\"}]}",
			);
		})
		.await;
	let response =
		client.payout(&token, true, &payout_request()).await.expect("Payout should decode.");

	assert_eq!(response.batch_header.payout_batch_id, "BATCH-9");
	assert_eq!(response.batch_header.batch_status, "SUCCESS");
	assert!(response.link_by_relation(&Relation::SelfLink).is_some());

	mock.assert_async().await;
}

#[tokio::test]
async fn payout_surfaces_rejections() {
	let server = MockServer::start_async().await;
	let client = test_client(server.url(""));
	let token = test_token();
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/payments/payouts").query_param("sync_mode", "false");
			then.status(404)
				.header("content-type", "application/json")
				.body("{\"message\":\"not found\"}");
		})
		.await;
	let err = client
		.payout(&token, false, &payout_request())
		.await
		.expect_err("A 404 payout call should surface.");

	assert!(matches!(
		err,
		Error::Response(ResponseError { status: 404, ref body })
			if body.as_str() == "{\"message\":\"not found\"}",
	));

	mock.assert_async().await;
}
