//! Transport primitives for API exchanges.
//!
//! [`ApiTransport`] is the crate's only dependency on an HTTP stack. The
//! default [`ReqwestTransport`] adapter ships behind the `reqwest` feature;
//! tests and embedders supply their own implementation to stub the wire.

// std
use std::ops::Deref;
// self
use crate::_prelude::*;

/// Buffered HTTP request handed to the transport.
pub type HttpRequest = http::Request<Vec<u8>>;
/// Fully buffered HTTP response returned by the transport.
pub type HttpResponse = http::Response<Vec<u8>>;
/// Boxed future returned by [`ApiTransport::call`].
pub type TransportFuture<E> = Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + Send>>;

/// Abstraction over HTTP transports capable of executing one buffered exchange.
///
/// Implementations must be `'static + Send + Sync` so a single client can be
/// shared across tasks, and the returned future must own whatever state it
/// needs so it stays `Send` for the lifetime of the in-flight call. The
/// response body must be fully drained and buffered before the future
/// resolves; the pipeline never streams, which also guarantees the response
/// stream is released on every exit path.
///
/// Cancellation and timeouts are the implementation's concern. The pipeline
/// adds neither, and it never retries a failed exchange.
pub trait ApiTransport
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type Error: 'static + Send + Sync + StdError;

	/// Executes a single request/response exchange.
	fn call(&self, request: HttpRequest) -> TransportFuture<Self::Error>;
}

#[cfg(feature = "reqwest")]
/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// The adapter only converts between the `http` types and reqwest's own;
/// timeouts, proxies, and redirect policy are configured on the wrapped
/// client before it is handed over.
#[derive(Clone, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiTransport for ReqwestTransport {
	type Error = ReqwestError;

	fn call(&self, request: HttpRequest) -> TransportFuture<Self::Error> {
		let client = self.0.clone();

		Box::pin(async move {
			let request = reqwest::Request::try_from(request)?;
			let response = client.execute(request).await?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut buffered = HttpResponse::new(response.bytes().await?.to_vec());

			*buffered.status_mut() = status;
			*buffered.headers_mut() = headers;

			Ok(buffered)
		})
	}
}
