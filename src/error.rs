//! Client-level error types shared across request, token, and geocoding operations.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Provider answered, but the body failed envelope validation.
	#[error(transparent)]
	InvalidResponse(#[from] crate::envelope::InvalidResponseError),
	/// Geocoding round trip succeeded, but the result could not be interpreted.
	#[error(transparent)]
	Geocoding(#[from] crate::geo::GeocodingError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Builder was handed an empty required credential.
	#[error("Configuration field `{field}` must not be empty.")]
	EmptyCredential {
		/// Name of the offending builder field.
		field: &'static str,
	},
	/// Builder was handed an empty required setting.
	#[error("Configuration setting `{field}` must not be empty.")]
	EmptySetting {
		/// Name of the offending builder field.
		field: &'static str,
	},
	/// API base and version do not combine into a valid URL.
	#[error("Base URL `{url}` is invalid.")]
	InvalidBaseUrl {
		/// Combined base URL that failed validation.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Builder endpoint override cannot be parsed.
	#[error("The {endpoint} endpoint URL is invalid.")]
	InvalidEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoint path produced an unparseable request URL.
	#[error("Request URL `{url}` is invalid.")]
	InvalidRequestUrl {
		/// Assembled URL that failed validation.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Round trip exceeded the configured time limit.
	#[error("Request timed out while calling the provider.")]
	Timeout {
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
	/// Connection could not be established.
	#[error("Connection to the provider failed.")]
	ConnectionFailed {
		/// Transport-specific connection error.
		#[source]
		source: BoxError,
	},
	/// Any other failure surfaced by the underlying HTTP client.
	#[error("Network error occurred while calling the provider.")]
	Other {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific timeout error.
	pub fn timeout(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Timeout { source: Box::new(src) }
	}

	/// Wraps a transport-specific connection error.
	pub fn connection_failed(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::ConnectionFailed { source: Box::new(src) }
	}

	/// Wraps any other transport error.
	pub fn other(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Other { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() {
			Self::timeout(e)
		} else if e.is_connect() {
			Self::connection_failed(e)
		} else {
			Self::other(e)
		}
	}
}
