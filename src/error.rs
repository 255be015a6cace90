//! Client-level error types shared across the request pipeline.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
///
/// Callers branch on the variant to distinguish local construction problems,
/// transport failures, undecodable bodies, and remote rejections. Nothing in
/// the crate retries or terminates the process; every failure is returned.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local request-construction problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, collaborator-level timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body could not be decoded into the expected shape.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Provider rejected the call with a status of 400 or above.
	#[error(transparent)]
	Response(#[from] ResponseError),
}

/// Request-construction failures raised before anything reaches the wire.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A resolved endpoint is not a valid request URI.
	#[error("Endpoint `{endpoint}` is not a valid request URI.")]
	InvalidEndpoint {
		/// Endpoint string that failed validation.
		endpoint: String,
		/// Underlying parsing failure.
		#[source]
		source: http::uri::InvalidUri,
	},
	/// HTTP request assembly failed (invalid header value or builder state).
	#[error(transparent)]
	HttpRequest(#[from] http::Error),
	/// A request payload could not be serialized to JSON.
	#[error("Request payload could not be serialized to JSON.")]
	Serialize(#[source] serde_json::Error),
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Response body that is not valid JSON for the expected shape.
///
/// The raw body text is kept for diagnostics instead of being swallowed.
#[derive(Debug, ThisError)]
#[error("Response body did not match the expected shape (status {status}).")]
pub struct DecodeError {
	/// Structured parsing failure including the path that failed.
	#[source]
	pub source: serde_path_to_error::Error<serde_json::Error>,
	/// HTTP status code of the response being decoded.
	pub status: u16,
	/// Raw body text kept for diagnostics.
	pub body: String,
}

/// Remote rejection carrying the literal status code and body.
///
/// Applied uniformly by every operation when the provider returns a status of
/// 400 or above, so callers always have the exact server output available for
/// logging or support escalation.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Provider returned status {status}: {body}")]
pub struct ResponseError {
	/// HTTP status code (400 or above).
	pub status: u16,
	/// Raw body text returned by the provider.
	pub body: String,
}
