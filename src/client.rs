//! Client composition root: authentication and the request executor.

// crates.io
use http::{Method, header};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Credentials},
	error::{ConfigError, DecodeError, ResponseError, TransportError},
	http::{ApiTransport, HttpRequest, HttpResponse},
	obs::{self, CallKind, CallOutcome, CallSpan},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

const TOKEN_PATH: &str = "/v1/oauth2/token";

/// API client tying an immutable credential set to an injected transport.
///
/// The client owns no token: every operation borrows whichever
/// [`AccessToken`] snapshot the caller supplies, so independent call sites
/// can share one client without synchronizing authentication. The transport
/// is held by reference-counted composition rather than embedding, which is
/// what lets tests swap in a stub exchanger.
#[derive(Clone)]
pub struct Client<T>
where
	T: ?Sized + ApiTransport,
{
	/// Transport used for every outbound exchange.
	pub transport: Arc<T>,
	/// Immutable credential set and environment selection.
	pub credentials: Credentials,
}
impl<T> Client<T>
where
	T: ?Sized + ApiTransport,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_transport(credentials: Credentials, transport: impl Into<Arc<T>>) -> Self {
		Self { transport: transport.into(), credentials }
	}

	/// Exchanges the configured client credentials for a bearer token.
	///
	/// One form-encoded POST to the token endpoint with HTTP Basic
	/// authentication; no retry on failure. Rejections (status 400 and
	/// above) surface as [`ResponseError`] like every other operation.
	pub async fn fetch_token(&self) -> Result<AccessToken> {
		let request = self.token_request()?;

		self.call(CallKind::Token, "fetch_token", request).await
	}

	/// Runs one complete operation: dispatch, classify, decode.
	///
	/// Wraps the round trip in an observability span and records
	/// attempt/success/failure outcomes for the given call kind.
	pub(crate) async fn call<R>(
		&self,
		kind: CallKind,
		stage: &'static str,
		request: HttpRequest,
	) -> Result<R>
	where
		R: DeserializeOwned,
	{
		let span = CallSpan::new(kind, stage);

		obs::record_call_outcome(kind, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let response = self.dispatch(request).await?;

				decode_checked(&response)
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(kind, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(kind, CallOutcome::Failure),
		}

		result
	}

	/// Builds an authenticated JSON request for a resource operation.
	///
	/// The body is absent for GET calls; operations with payloads pass the
	/// already-encoded JSON bytes.
	pub(crate) fn authed(
		&self,
		method: Method,
		path: &str,
		token: &AccessToken,
		body: Option<Vec<u8>>,
	) -> Result<HttpRequest> {
		let request = http::Request::builder()
			.method(method)
			.uri(self.endpoint(path)?)
			.header(header::CONTENT_TYPE, "application/json")
			.header(header::AUTHORIZATION, token.authorization())
			.body(body.unwrap_or_default())
			.map_err(ConfigError::from)?;

		Ok(request)
	}

	/// Dispatches one exchange without interpreting the response status.
	///
	/// Status handling belongs to [`decode_checked`]; this layer only maps
	/// transport failures.
	pub(crate) async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse> {
		self.transport
			.call(request)
			.await
			.map_err(|source| TransportError::network(source).into())
	}

	fn token_request(&self) -> Result<HttpRequest> {
		let request = http::Request::builder()
			.method(Method::POST)
			.uri(self.endpoint(TOKEN_PATH)?)
			.header(header::AUTHORIZATION, self.credentials.basic_authorization())
			.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
			.header(header::ACCEPT, "application/json")
			.header(header::ACCEPT_LANGUAGE, self.credentials.accept_language.as_str())
			.body(b"grant_type=client_credentials".to_vec())
			.map_err(ConfigError::from)?;

		Ok(request)
	}

	fn endpoint(&self, path: &str) -> Result<http::Uri> {
		let endpoint = self.credentials.environment.url(path);
		let parsed = endpoint.parse();

		parsed.map_err(|source| ConfigError::InvalidEndpoint { endpoint, source }.into())
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestTransport> {
	/// Creates a client backed by the crate's default reqwest transport.
	pub fn new(credentials: Credentials) -> Self {
		Self::with_transport(credentials, ReqwestTransport::default())
	}
}
impl<T> Debug for Client<T>
where
	T: ?Sized + ApiTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client").field("credentials", &self.credentials).finish()
	}
}

/// Applies status classification and JSON decoding to a buffered response.
///
/// Status codes of 400 and above become [`ResponseError`] carrying the
/// literal body; anything below decodes into `R` with the failing path
/// preserved on error. Every operation funnels through here so the
/// classification stays uniform.
fn decode_checked<R>(response: &HttpResponse) -> Result<R>
where
	R: DeserializeOwned,
{
	let status = response.status().as_u16();

	if status >= 400 {
		return Err(ResponseError { status, body: body_text(response) }.into());
	}

	let mut deserializer = serde_json::Deserializer::from_slice(response.body());

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| DecodeError { source, status, body: body_text(response) }.into())
}

fn body_text(response: &HttpResponse) -> String {
	String::from_utf8_lossy(response.body()).into_owned()
}

/// Serializes an operation payload, mapping failures into [`ConfigError`].
pub(crate) fn encode_body<B>(body: &B) -> Result<Vec<u8>>
where
	B: Serialize,
{
	serde_json::to_vec(body).map_err(|source| ConfigError::Serialize(source).into())
}
