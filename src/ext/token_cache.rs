//! Cached re-authentication layered over the token-explicit operations.

// self
use crate::{_prelude::*, auth::AccessToken, client::Client, http::ApiTransport};

/// Most recent token paired with the instant it was fetched.
#[derive(Clone, Debug)]
struct CachedToken {
	token: AccessToken,
	fetched_at: OffsetDateTime,
}
impl CachedToken {
	fn expires_at(&self) -> OffsetDateTime {
		let validity = i64::try_from(self.token.expires_in).unwrap_or(i64::MAX);

		self.fetched_at.saturating_add(Duration::seconds(validity))
	}

	fn is_fresh_at(&self, now: OffsetDateTime, window: Duration) -> bool {
		self.expires_at() - now > window
	}
}

/// Process-local token cache that re-authenticates when the held token goes stale.
///
/// Operations themselves never check expiry; callers that want automatic
/// re-authentication route token acquisition through [`TokenCache::authorize`]
/// instead of calling [`Client::fetch_token`] directly. The cache hands out the
/// held token while it stays outside the preemptive window and re-fetches
/// otherwise, with a singleflight guard so concurrent callers piggy-back on the
/// same in-flight exchange instead of stampeding the token endpoint.
///
/// Tokens returned from `authorize` are snapshots; replacing the cached token
/// has no effect on calls already holding one.
#[derive(Debug)]
pub struct TokenCache {
	current: RwLock<Option<CachedToken>>,
	fetch_guard: AsyncMutex<()>,
	preemptive_window: Duration,
}
impl TokenCache {
	const DEFAULT_PREEMPTIVE_WINDOW: Duration = Duration::seconds(60);

	/// Creates an empty cache with the default 60-second preemptive window.
	pub fn new() -> Self {
		Self {
			current: RwLock::new(None),
			fetch_guard: AsyncMutex::new(()),
			preemptive_window: Self::DEFAULT_PREEMPTIVE_WINDOW,
		}
	}

	/// Overrides the preemptive window; negative durations clamp to zero.
	///
	/// A token is treated as stale once its remaining validity drops to the
	/// window or below, so refreshes happen before the provider starts
	/// rejecting the old token mid-flow.
	pub fn with_preemptive_window(mut self, window: Duration) -> Self {
		self.preemptive_window = if window.is_negative() { Duration::ZERO } else { window };

		self
	}

	/// Returns a fresh token, re-authenticating through the client if needed.
	pub async fn authorize<T>(&self, client: &Client<T>) -> Result<AccessToken>
	where
		T: ?Sized + ApiTransport,
	{
		if let Some(token) = self.fresh_snapshot(OffsetDateTime::now_utc()) {
			return Ok(token);
		}

		let _singleflight = self.fetch_guard.lock().await;

		// A concurrent caller may have refreshed while we waited on the guard.
		let now = OffsetDateTime::now_utc();

		if let Some(token) = self.fresh_snapshot(now) {
			return Ok(token);
		}

		let token = client.fetch_token().await?;

		*self.current.write() = Some(CachedToken { token: token.clone(), fetched_at: now });

		Ok(token)
	}

	/// Drops the held token so the next [`authorize`](Self::authorize) re-fetches.
	///
	/// Useful when the provider rejects a token before its `expires_in` window
	/// has elapsed, e.g. after a server-side revocation.
	pub fn invalidate(&self) {
		*self.current.write() = None;
	}

	fn fresh_snapshot(&self, now: OffsetDateTime) -> Option<AccessToken> {
		self.current
			.read()
			.as_ref()
			.filter(|cached| cached.is_fresh_at(now, self.preemptive_window))
			.map(|cached| cached.token.clone())
	}
}
impl Default for TokenCache {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::sync::atomic::{AtomicUsize, Ordering};
	// crates.io
	use time::macros::datetime;
	// self
	use super::*;
	use crate::{
		auth::Credentials,
		env::Environment,
		http::{HttpRequest, TransportFuture},
	};

	const TOKEN_JSON: &str = "{\"access_token\":\"T\",\"token_type\":\"Bearer\",\"scope\":\"s1 s2\",\
		\"app_id\":\"APP-1\",\"expires_in\":28800}";
	const SHORT_TOKEN_JSON: &str =
		"{\"access_token\":\"T\",\"token_type\":\"Bearer\",\"expires_in\":30}";

	struct StubTransport {
		calls: AtomicUsize,
		body: &'static str,
	}
	impl StubTransport {
		fn new(body: &'static str) -> Arc<Self> {
			Arc::new(Self { calls: AtomicUsize::new(0), body })
		}
	}
	impl ApiTransport for StubTransport {
		type Error = std::io::Error;

		fn call(&self, _: HttpRequest) -> TransportFuture<Self::Error> {
			self.calls.fetch_add(1, Ordering::SeqCst);

			let body = self.body.as_bytes().to_vec();

			Box::pin(async move { Ok(http::Response::new(body)) })
		}
	}

	fn stub_client(transport: Arc<StubTransport>) -> Client<StubTransport> {
		let credentials = Credentials::new("id", "secret")
			.with_environment(Environment::Custom("http://127.0.0.1:0".into()));

		Client::with_transport(credentials, transport)
	}

	fn cached(expires_in: u64, fetched_at: OffsetDateTime) -> CachedToken {
		CachedToken {
			token: AccessToken {
				scope: Default::default(),
				access_token: "T".into(),
				token_type: "Bearer".into(),
				app_id: String::new(),
				expires_in,
			},
			fetched_at,
		}
	}

	#[test]
	fn freshness_respects_the_preemptive_window() {
		let fetched_at = datetime!(2026-08-04 12:00 UTC);
		let token = cached(900, fetched_at);

		assert!(token.is_fresh_at(fetched_at, Duration::seconds(60)));
		assert!(!token.is_fresh_at(fetched_at + Duration::seconds(840), Duration::seconds(60)));
		assert!(!token.is_fresh_at(fetched_at + Duration::seconds(901), Duration::ZERO));
	}

	#[test]
	fn oversized_expiry_saturates() {
		let token = cached(u64::MAX, datetime!(2026-08-04 12:00 UTC));

		assert!(token.is_fresh_at(datetime!(2126-08-04 12:00 UTC), Duration::seconds(60)));
	}

	#[tokio::test]
	async fn authorize_reuses_fresh_tokens() {
		let transport = StubTransport::new(TOKEN_JSON);
		let client = stub_client(transport.clone());
		let cache = TokenCache::new();
		let first = cache.authorize(&client).await.expect("First authorize should fetch a token.");
		let second =
			cache.authorize(&client).await.expect("Second authorize should reuse the cache.");

		assert_eq!(first, second);
		assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
	}

	#[tokio::test]
	async fn authorize_refetches_inside_the_preemptive_window() {
		let transport = StubTransport::new(SHORT_TOKEN_JSON);
		let client = stub_client(transport.clone());
		// 30-second tokens never outlive the default 60-second window.
		let cache = TokenCache::new();

		cache.authorize(&client).await.expect("First authorize should fetch a token.");
		cache.authorize(&client).await.expect("Second authorize should re-fetch.");

		assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
	}

	#[tokio::test]
	async fn invalidate_forces_reauthentication() {
		let transport = StubTransport::new(TOKEN_JSON);
		let client = stub_client(transport.clone());
		let cache = TokenCache::new();

		cache.authorize(&client).await.expect("First authorize should fetch a token.");
		cache.invalidate();
		cache.authorize(&client).await.expect("Authorize after invalidate should re-fetch.");

		assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
	}
}
