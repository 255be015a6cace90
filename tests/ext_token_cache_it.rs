// crates.io
use httpmock::prelude::*;
// self
use paypal_rest::{_preludet::*, auth::AccessToken, ext::TokenCache};

const TOKEN_BODY: &str = "{\"access_token\":\"cached-token\",\"token_type\":\"Bearer\",\
	\"expires_in\":1800}";

#[tokio::test]
async fn authorize_caches_the_token_after_success() {
	let server = MockServer::start_async().await;
	let client = test_client(server.url(""));
	let cache = TokenCache::new();
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/oauth2/token");
			then.status(200).header("content-type", "application/json").body(TOKEN_BODY);
		})
		.await;
	let first = cache.authorize(&client).await.expect("Initial authorize should succeed.");
	let second = cache.authorize(&client).await.expect("Cached authorize should succeed.");

	assert_eq!(first.authorization(), "Bearer cached-token");
	assert_eq!(second.authorization(), "Bearer cached-token");

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn authorize_singleflights_concurrent_callers() {
	let server = MockServer::start_async().await;
	let client = test_client(server.url(""));
	let cache = TokenCache::new();
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/oauth2/token");
			then.status(200).header("content-type", "application/json").body(TOKEN_BODY);
		})
		.await;
	let (first, second): (Result<AccessToken>, Result<AccessToken>) =
		tokio::join!(cache.authorize(&client), cache.authorize(&client));
	let first = first.expect("First concurrent authorize should succeed.");
	let second = second.expect("Second concurrent authorize should succeed.");

	assert_eq!(first, second);

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn authorize_surfaces_rejections_without_caching_them() {
	let server = MockServer::start_async().await;
	let client = test_client(server.url(""));
	let cache = TokenCache::new();
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/oauth2/token");
			then.status(401)
				.header("content-type", "application/json")
				.body("{\"error\":\"invalid_client\"}");
		})
		.await;

	cache.authorize(&client).await.expect_err("Rejected credentials should surface.");
	cache.authorize(&client).await.expect_err("Failures should not be cached.");

	mock.assert_calls_async(2).await;
}
