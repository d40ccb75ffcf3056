//! Web authentication: authorization URL building and the code-for-token exchange.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, TokenExchangeOutcome},
	client::ApiClient,
	envelope::{self, InvalidResponseError},
	http::{HttpMethod, Transport},
	obs::{self, OpKind, RequestOutcome, RequestSpan},
};

#[derive(Debug, Deserialize)]
struct TokenEndpointResponse {
	#[serde(default)]
	access_token: Option<String>,
}

impl<T> ApiClient<T>
where
	T: ?Sized + Transport,
{
	/// Builds the URL of the provider's web authentication page.
	///
	/// `redirect_uri` falls back to the session's redirect URI when absent or empty; when
	/// neither side supplies one, the parameter is omitted entirely.
	pub fn authentication_url(&self, redirect_uri: Option<&str>) -> Url {
		let mut url = self.config.endpoints().authentication.clone();
		let mut pairs = url.query_pairs_mut();

		pairs.append_pair("client_id", self.config.client_id());
		pairs.append_pair("response_type", "code");

		if let Some(redirect) = effective_redirect(redirect_uri, self.session.redirect_uri()) {
			pairs.append_pair("redirect_uri", redirect);
		}

		drop(pairs);

		url
	}

	/// Exchanges an authorization code for an access token at the token endpoint.
	///
	/// The exchange itself is a GET carrying the grant parameters in the query string, matching
	/// the provider's token endpoint. The session token is replaced only when the provider
	/// issues one; a well-formed body without an `access_token` field maps to
	/// [`TokenExchangeOutcome::Missing`] and leaves the session untouched.
	pub async fn exchange_code(
		&mut self,
		code: &str,
		redirect_uri: Option<&str>,
	) -> Result<TokenExchangeOutcome> {
		const KIND: OpKind = OpKind::TokenExchange;

		let span = RequestSpan::new(KIND, "exchange_code");

		obs::record_request_outcome(KIND, RequestOutcome::Attempt);

		let result = span
			.instrument(async move {
				let params = {
					let mut map = BTreeMap::new();

					map.insert("client_id".into(), self.config.client_id().to_owned());
					map.insert("client_secret".into(), self.config.client_secret().to_owned());
					map.insert("grant_type".into(), "authorization_code".into());

					if let Some(redirect) =
						effective_redirect(redirect_uri, self.session.redirect_uri())
					{
						map.insert("redirect_uri".into(), redirect.to_owned());
					}

					map.insert("code".into(), code.to_owned());

					map
				};
				let url = self.config.endpoints().token.clone();
				let raw = self.dispatch(HttpMethod::Get, url, &params).await?;
				let response: TokenEndpointResponse = envelope::deserialize_json(&raw)
					.map_err(|source| InvalidResponseError::Malformed { source })?;

				match response.access_token {
					Some(secret) => {
						let token = AccessToken::new(secret);

						self.session.set_access_token(token.clone());

						Ok(TokenExchangeOutcome::Issued(token))
					},
					None => Ok(TokenExchangeOutcome::Missing),
				}
			})
			.await;

		match &result {
			Ok(_) => obs::record_request_outcome(KIND, RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(KIND, RequestOutcome::Failure),
		}

		result
	}
}

fn effective_redirect<'a>(
	preferred: Option<&'a str>,
	session: Option<&'a str>,
) -> Option<&'a str> {
	preferred
		.filter(|value| !value.is_empty())
		.or_else(|| session.filter(|value| !value.is_empty()))
}
