//! Client configuration validated once at build time and shared by every operation.
//!
//! [`ClientConfig`] is assembled through [`ClientConfigBuilder`], which seeds the production
//! endpoints and locale defaults so most callers only supply credentials. The versioned base URL
//! is derived during [`ClientConfigBuilder::build`] and never recomputed afterwards.

// self
use crate::{_prelude::*, error::ConfigError};

/// Production API root; the version segment is appended when the configuration is built.
pub const PROVIDER_API_BASE: &str = "https://api.foursquare.com/";
/// Web authentication page users are redirected to during the authorization flow.
pub const AUTHENTICATION_URL: &str = "https://foursquare.com/oauth2/authenticate";
/// Token endpoint that exchanges authorization codes for access tokens.
pub const TOKEN_URL: &str = "https://foursquare.com/oauth2/access_token";
/// Google Maps geocoding endpoint used by address geolocation.
pub const GEOCODING_URL: &str = "http://maps.googleapis.com/maps/api/geocode/json";
/// Locale applied when the builder receives no override.
pub const DEFAULT_LOCALE: &str = "fr";
/// API version segment applied when the builder receives no override.
pub const DEFAULT_VERSION: &str = "v2";

/// Endpoint set consumed by token exchange and geocoding operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoints {
	/// Web authentication page for the authorization-code flow.
	pub authentication: Url,
	/// Token endpoint used for code exchanges.
	pub token: Url,
	/// Geocoding endpoint used for address lookups.
	pub geocoding: Url,
}

/// Immutable client configuration consumed by every operation.
#[derive(Clone)]
pub struct ClientConfig {
	client_id: String,
	client_secret: String,
	locale: String,
	version: String,
	redirect_uri: Option<String>,
	base_url: String,
	endpoints: ApiEndpoints,
}
impl ClientConfig {
	/// Creates a new builder seeded with the provided credentials.
	pub fn builder(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> ClientConfigBuilder {
		ClientConfigBuilder::new(client_id, client_secret)
	}

	/// Returns the OAuth 2.0 client identifier.
	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	/// Returns the OAuth 2.0 client secret. Callers must avoid logging this string.
	pub fn client_secret(&self) -> &str {
		&self.client_secret
	}

	/// Returns the locale sent as both the `locale` parameter and the Accept-Language header.
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Returns the API version segment.
	pub fn version(&self) -> &str {
		&self.version
	}

	/// Returns the redirect URI registered for the client, if any.
	pub fn redirect_uri(&self) -> Option<&str> {
		self.redirect_uri.as_deref()
	}

	/// Returns the versioned base URL derived at build time.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Returns the endpoint set for non-venue operations.
	pub fn endpoints(&self) -> &ApiEndpoints {
		&self.endpoints
	}
}
impl Debug for ClientConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientConfig")
			.field("client_id", &self.client_id)
			.field("client_secret_set", &!self.client_secret.is_empty())
			.field("locale", &self.locale)
			.field("version", &self.version)
			.field("redirect_uri", &self.redirect_uri)
			.field("base_url", &self.base_url)
			.finish()
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Clone, Debug)]
pub struct ClientConfigBuilder {
	/// OAuth 2.0 client identifier; must not be empty.
	pub client_id: String,
	/// OAuth 2.0 client secret; must not be empty.
	pub client_secret: String,
	/// Locale forwarded to the provider; defaults to [`DEFAULT_LOCALE`].
	pub locale: String,
	/// API version segment appended to the base; defaults to [`DEFAULT_VERSION`].
	pub version: String,
	/// Optional redirect URI registered for the client.
	pub redirect_uri: Option<String>,
	/// API root the version segment is appended to; must end with a trailing slash.
	pub api_base: String,
	/// Web authentication page override.
	pub authentication_url: String,
	/// Token endpoint override.
	pub token_url: String,
	/// Geocoding endpoint override.
	pub geocoding_url: String,
}
impl ClientConfigBuilder {
	/// Creates a builder seeded with production endpoints and default locale/version.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			locale: DEFAULT_LOCALE.into(),
			version: DEFAULT_VERSION.into(),
			redirect_uri: None,
			api_base: PROVIDER_API_BASE.into(),
			authentication_url: AUTHENTICATION_URL.into(),
			token_url: TOKEN_URL.into(),
			geocoding_url: GEOCODING_URL.into(),
		}
	}

	/// Overrides the locale.
	pub fn locale(mut self, locale: impl Into<String>) -> Self {
		self.locale = locale.into();

		self
	}

	/// Overrides the API version segment.
	pub fn version(mut self, version: impl Into<String>) -> Self {
		self.version = version.into();

		self
	}

	/// Sets the redirect URI registered for the client.
	pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
		self.redirect_uri = Some(redirect_uri.into());

		self
	}

	/// Overrides the API root.
	pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
		self.api_base = api_base.into();

		self
	}

	/// Overrides the web authentication page.
	pub fn authentication_url(mut self, authentication_url: impl Into<String>) -> Self {
		self.authentication_url = authentication_url.into();

		self
	}

	/// Overrides the token endpoint.
	pub fn token_url(mut self, token_url: impl Into<String>) -> Self {
		self.token_url = token_url.into();

		self
	}

	/// Overrides the geocoding endpoint.
	pub fn geocoding_url(mut self, geocoding_url: impl Into<String>) -> Self {
		self.geocoding_url = geocoding_url.into();

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	///
	/// Derives the versioned base URL from `api_base` + `version` and parses every endpoint so
	/// later operations never fail on static URLs.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		if self.client_id.is_empty() {
			return Err(ConfigError::EmptyCredential { field: "client_id" });
		}
		if self.client_secret.is_empty() {
			return Err(ConfigError::EmptyCredential { field: "client_secret" });
		}
		if self.locale.is_empty() {
			return Err(ConfigError::EmptySetting { field: "locale" });
		}
		if self.version.is_empty() {
			return Err(ConfigError::EmptySetting { field: "version" });
		}

		let base_url = format!("{}{}", self.api_base, self.version);

		Url::parse(&base_url)
			.map_err(|source| ConfigError::InvalidBaseUrl { url: base_url.clone(), source })?;

		let endpoints = ApiEndpoints {
			authentication: parse_endpoint("authentication", &self.authentication_url)?,
			token: parse_endpoint("token", &self.token_url)?,
			geocoding: parse_endpoint("geocoding", &self.geocoding_url)?,
		};

		Ok(ClientConfig {
			client_id: self.client_id,
			client_secret: self.client_secret,
			locale: self.locale,
			version: self.version,
			redirect_uri: self.redirect_uri,
			base_url,
			endpoints,
		})
	}
}

fn parse_endpoint(name: &'static str, url: &str) -> Result<Url, ConfigError> {
	Url::parse(url).map_err(|source| ConfigError::InvalidEndpoint { endpoint: name, source })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn defaults_derive_versioned_base_url() {
		let config = ClientConfig::builder("client-id", "client-secret")
			.build()
			.expect("Default configuration should build successfully.");

		assert_eq!(config.base_url(), "https://api.foursquare.com/v2");
		assert_eq!(config.locale(), "fr");
		assert_eq!(config.version(), "v2");
		assert_eq!(config.redirect_uri(), None);
		assert_eq!(config.endpoints().token.as_str(), TOKEN_URL);
	}

	#[test]
	fn overrides_flow_into_base_url() {
		let config = ClientConfig::builder("client-id", "client-secret")
			.api_base("https://api.example.com/")
			.version("v3")
			.locale("en")
			.redirect_uri("https://app.example.com/callback")
			.build()
			.expect("Overridden configuration should build successfully.");

		assert_eq!(config.base_url(), "https://api.example.com/v3");
		assert_eq!(config.locale(), "en");
		assert_eq!(config.redirect_uri(), Some("https://app.example.com/callback"));
	}

	#[test]
	fn empty_credentials_are_rejected() {
		let err = ClientConfig::builder("", "client-secret")
			.build()
			.expect_err("Empty client identifier should be rejected.");

		assert!(matches!(err, ConfigError::EmptyCredential { field: "client_id" }));

		let err = ClientConfig::builder("client-id", "")
			.build()
			.expect_err("Empty client secret should be rejected.");

		assert!(matches!(err, ConfigError::EmptyCredential { field: "client_secret" }));
	}

	#[test]
	fn empty_settings_are_rejected() {
		let err = ClientConfig::builder("client-id", "client-secret")
			.locale("")
			.build()
			.expect_err("Empty locale should be rejected.");

		assert!(matches!(err, ConfigError::EmptySetting { field: "locale" }));

		let err = ClientConfig::builder("client-id", "client-secret")
			.version("")
			.build()
			.expect_err("Empty version should be rejected.");

		assert!(matches!(err, ConfigError::EmptySetting { field: "version" }));
	}

	#[test]
	fn invalid_endpoint_overrides_are_rejected() {
		let err = ClientConfig::builder("client-id", "client-secret")
			.token_url("not a url")
			.build()
			.expect_err("Unparseable token endpoint should be rejected.");

		assert!(matches!(err, ConfigError::InvalidEndpoint { endpoint: "token", .. }));
	}

	#[test]
	fn debug_redacts_client_secret() {
		let config = ClientConfig::builder("client-id", "client-secret")
			.build()
			.expect("Default configuration should build successfully.");
		let rendered = format!("{config:?}");

		assert!(rendered.contains("client_secret_set: true"));
		assert!(!rendered.contains("client-secret"));
	}
}
