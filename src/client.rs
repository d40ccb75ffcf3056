//! Venue API client orchestrating request, token, and geocoding operations.

mod geocode;
mod requests;
mod token;

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, SessionState},
	config::ClientConfig,
	http::{HttpMethod, Transport, TransportRequest},
	request,
};
#[cfg(feature = "reqwest")]
use crate::http::{ReqwestTransport, TransportConfig};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport stack.
pub type ReqwestApiClient = ApiClient<ReqwestTransport>;

/// Coordinates venue API operations against a single validated configuration.
///
/// The client owns the transport, configuration, and OAuth session so individual operations can
/// focus on parameter assembly. Callers provide a transport through
/// [`ApiClient::with_transport`] or, with the `reqwest` feature, let [`ApiClient::new`]
/// provision the crate's own stack. Operations that mutate the session take `&mut self`;
/// everything else borrows the client shared.
#[derive(Clone)]
pub struct ApiClient<T>
where
	T: ?Sized + Transport,
{
	transport: Arc<T>,
	config: ClientConfig,
	session: SessionState,
}
impl<T> ApiClient<T>
where
	T: ?Sized + Transport,
{
	/// Creates a client that reuses the caller-provided transport.
	///
	/// The session starts without a token and inherits the configured redirect URI.
	pub fn with_transport(config: ClientConfig, transport: impl Into<Arc<T>>) -> Self {
		let session = SessionState::new(config.redirect_uri().map(str::to_owned));

		Self { transport: transport.into(), config, session }
	}

	/// Returns the validated configuration.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Returns the current OAuth session.
	pub fn session(&self) -> &SessionState {
		&self.session
	}

	/// Stores an access token obtained elsewhere (e.g. restored from persistence).
	pub fn set_access_token(&mut self, token: AccessToken) {
		self.session.set_access_token(token);
	}

	/// Replaces the redirect URI used by authorization-URL building and token exchange.
	pub fn set_redirect_uri(&mut self, redirect_uri: impl Into<String>) {
		self.session.set_redirect_uri(redirect_uri);
	}

	/// Runs one transport round trip for an assembled URL + parameter set.
	///
	/// GET requests carry the parameters in the query string; POST requests carry them as a
	/// form body and leave the URL untouched. Empty parameter sets produce neither.
	async fn dispatch(
		&self,
		method: HttpMethod,
		mut url: Url,
		params: &BTreeMap<String, String>,
	) -> Result<String> {
		let form_body = match method {
			HttpMethod::Get => {
				request::append_query(&mut url, params);

				None
			},
			HttpMethod::Post => (!params.is_empty()).then(|| request::encode_query(params)),
		};
		let request = TransportRequest {
			method,
			url,
			form_body,
			accept_language: self.config.locale().to_owned(),
		};
		let response = self.transport.execute(request).await?;

		Ok(response.body)
	}
}
#[cfg(feature = "reqwest")]
impl ApiClient<ReqwestTransport> {
	/// Creates a client with the crate's default reqwest transport.
	pub fn new(config: ClientConfig) -> Result<Self> {
		Self::with_transport_config(config, TransportConfig::default())
	}

	/// Creates a client whose reqwest transport honors the provided tuning knobs.
	pub fn with_transport_config(config: ClientConfig, transport: TransportConfig) -> Result<Self> {
		let transport = ReqwestTransport::new(transport)?;

		Ok(Self::with_transport(config, transport))
	}
}
impl<T> Debug for ApiClient<T>
where
	T: ?Sized + Transport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient")
			.field("config", &self.config)
			.field("access_token_set", &self.session.access_token().is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::_preludet::{recording_client, test_config};

	#[test]
	fn session_inherits_the_configured_redirect_uri() {
		let config = ClientConfig::builder("client-id", "client-secret")
			.redirect_uri("https://app.example.com/callback")
			.build()
			.expect("Configuration with redirect URI should build successfully.");
		let (client, _transport) = recording_client(config);

		assert_eq!(client.session().redirect_uri(), Some("https://app.example.com/callback"));
		assert_eq!(client.session().access_token(), None);
	}

	#[test]
	fn debug_elides_session_secrets() {
		let (mut client, _transport) = recording_client(test_config());

		client.set_access_token(AccessToken::new("token-123"));

		let rendered = format!("{client:?}");

		assert!(rendered.contains("access_token_set: true"));
		assert!(!rendered.contains("token-123"));
		assert!(!rendered.contains("client-secret"));
	}
}
