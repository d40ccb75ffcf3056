//! Transport primitives shared by every provider call.
//!
//! The module exposes [`Transport`] alongside [`TransportRequest`] and [`TransportResponse`] so
//! downstream crates can integrate custom HTTP stacks without rewriting the request pipeline.
//! [`ApiClient`](crate::client::ApiClient) assembles one [`TransportRequest`] per operation and
//! awaits exactly one [`Transport::execute`] round trip for it; retries, redirects, and
//! connection pooling are transport concerns.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")]
use reqwest::header::{ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
// self
use crate::{_prelude::*, error::TransportError};
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Time limit applied to both connection setup and the full round trip.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// User-Agent header sent when the caller does not supply one.
pub const FALLBACK_USER_AGENT: &str = "Moamf/5.0 (Windows; U; Windows NT 5.1; en-US) AppleWebKit/525.13 (KHTML, like Gecko) Chrome/0.X.Y.Z Safari/525.13.";
/// Content type used for every POST body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Boxed response future returned by [`Transport::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + 'a + Send>>;

/// HTTP verbs used by the provider API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
	/// Parameters travel in the query string.
	Get,
	/// Parameters travel as a URL-encoded form body.
	Post,
}
impl HttpMethod {
	/// Maps the POST toggle shared by request operations: `false` selects GET and `true` selects
	/// POST.
	pub const fn from_post_flag(is_post: bool) -> Self {
		if is_post { Self::Post } else { Self::Get }
	}

	/// Returns the verb label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Fully assembled provider request handed to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportRequest {
	/// Verb selected by the operation's POST toggle.
	pub method: HttpMethod,
	/// Absolute request URL, including any query parameters.
	pub url: Url,
	/// URL-encoded form body; `None` for GET requests and for empty POST parameter sets.
	pub form_body: Option<String>,
	/// Accept-Language header value mirroring the configured locale.
	pub accept_language: String,
}

/// Raw provider response captured before any envelope interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
	/// HTTP status code answered by the provider.
	pub status: u16,
	/// Response body as UTF-8 text.
	pub body: String,
}

/// Abstraction over HTTP stacks capable of executing provider calls.
///
/// Implementations must be `Send + Sync + 'static` so one client can be shared across tasks
/// (typically behind `Arc<T>` where `T: Transport`), and the futures they return must be `Send`
/// so operations stay executor-agnostic. Implementations apply the request's Accept-Language
/// header, attach [`FORM_CONTENT_TYPE`] whenever a form body is present, and hand the body back
/// for any HTTP status, because provider errors travel inside the body envelope rather than the
/// status line.
pub trait Transport
where
	Self: 'static + Send + Sync,
{
	/// Executes one HTTP round trip.
	fn execute(&self, request: TransportRequest) -> TransportFuture<'_>;
}

/// Tuning knobs applied when the crate builds its own reqwest transport.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportConfig {
	/// Connection and total round-trip time limit.
	pub timeout: Duration,
	/// Whether TLS certificates are verified; disable only against trusted test servers.
	pub verify_tls: bool,
	/// User-Agent header, falling back to [`FALLBACK_USER_AGENT`] when `None`.
	pub user_agent: Option<String>,
}
#[cfg(feature = "reqwest")]
impl Default for TransportConfig {
	fn default() -> Self {
		Self { timeout: REQUEST_TIMEOUT, verify_tls: true, user_agent: None }
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestTransport(ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Builds a reqwest client honoring the provided transport configuration.
	pub fn new(config: TransportConfig) -> Result<Self, ConfigError> {
		let user_agent =
			HeaderValue::from_str(config.user_agent.as_deref().unwrap_or(FALLBACK_USER_AGENT))
				.map_err(ConfigError::http_client_build)?;
		let default_headers = {
			let mut headers = HeaderMap::new();

			headers.insert(USER_AGENT, user_agent);

			headers
		};
		let mut builder = ReqwestClient::builder()
			.connect_timeout(config.timeout)
			.timeout(config.timeout)
			.default_headers(default_headers);

		if !config.verify_tls {
			builder =
				builder.danger_accept_invalid_certs(true).danger_accept_invalid_hostnames(true);
		}

		Ok(Self(builder.build()?))
	}

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
impl Transport for ReqwestTransport {
	fn execute(&self, request: TransportRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let TransportRequest { method, url, form_body, accept_language } = request;
			let mut builder = match method {
				HttpMethod::Get => client.get(url),
				HttpMethod::Post => client.post(url),
			};

			builder = builder.header(ACCEPT_LANGUAGE, accept_language);

			if let Some(body) = form_body {
				builder = builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(body);
			}

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.text().await.map_err(TransportError::from)?;

			Ok(TransportResponse { status, body })
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn post_flag_selects_the_verb() {
		assert_eq!(HttpMethod::from_post_flag(false), HttpMethod::Get);
		assert_eq!(HttpMethod::from_post_flag(true), HttpMethod::Post);
	}

	#[test]
	fn verb_labels_are_stable() {
		assert_eq!(HttpMethod::Get.as_str(), "GET");
		assert_eq!(HttpMethod::Post.to_string(), "POST");
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn transport_config_defaults_are_safe() {
		let config = TransportConfig::default();

		assert_eq!(config.timeout, REQUEST_TIMEOUT);
		assert!(config.verify_tls);
		assert_eq!(config.user_agent, None);
	}
}
