//! Raw request operations against public, private, and batched resources.
//!
//! All three operations return the provider body verbatim; callers that want the unwrapped
//! payload run it through [`envelope::parse_response`](crate::envelope::parse_response)
//! afterwards, mirroring how responses stay inspectable when the envelope itself is the
//! interesting part.

// self
use crate::{
	_prelude::*,
	client::ApiClient,
	http::{HttpMethod, Transport},
	obs::{self, OpKind, RequestOutcome, RequestSpan},
	request::{self, MULTI_ENDPOINT, MultiRequest},
};

impl<T> ApiClient<T>
where
	T: ?Sized + Transport,
{
	/// Performs a credentialed GET request against a public resource.
	///
	/// `client_id`, `client_secret`, `version`, and `locale` are merged into `params`,
	/// overwriting caller-supplied values for those keys.
	pub async fn public_request(
		&self,
		endpoint: &str,
		mut params: BTreeMap<String, String>,
	) -> Result<String> {
		const KIND: OpKind = OpKind::PublicRequest;

		let span = RequestSpan::new(KIND, "public_request");

		obs::record_request_outcome(KIND, RequestOutcome::Attempt);

		let result = span
			.instrument(async move {
				params.insert("client_id".into(), self.config.client_id().into());
				params.insert("client_secret".into(), self.config.client_secret().into());
				params.insert("version".into(), self.config.version().into());
				params.insert("locale".into(), self.config.locale().into());

				let url = request::endpoint_url(self.config.base_url(), endpoint)?;

				self.dispatch(HttpMethod::Get, url, &params).await
			})
			.await;

		match &result {
			Ok(_) => obs::record_request_outcome(KIND, RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(KIND, RequestOutcome::Failure),
		}

		result
	}

	/// Performs a token-authenticated request against a private resource.
	///
	/// Attaches `oauth_token` only while the session holds a token, always attaches `version` +
	/// `locale`, and selects the verb through `is_post`: `false` sends GET, `true` sends POST.
	pub async fn private_request(
		&self,
		endpoint: &str,
		mut params: BTreeMap<String, String>,
		is_post: bool,
	) -> Result<String> {
		const KIND: OpKind = OpKind::PrivateRequest;

		let span = RequestSpan::new(KIND, "private_request");

		obs::record_request_outcome(KIND, RequestOutcome::Attempt);

		let result = span
			.instrument(async move {
				if let Some(token) = self.session.access_token() {
					params.insert("oauth_token".into(), token.expose().into());
				}

				params.insert("version".into(), self.config.version().into());
				params.insert("locale".into(), self.config.locale().into());

				let url = request::endpoint_url(self.config.base_url(), endpoint)?;

				self.dispatch(HttpMethod::from_post_flag(is_post), url, &params).await
			})
			.await;

		match &result {
			Ok(_) => obs::record_request_outcome(KIND, RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(KIND, RequestOutcome::Failure),
		}

		result
	}

	/// Performs a batched multi-request against the `multi` endpoint.
	///
	/// Renders the comma-separated `requests` value from the entries in order, attaches
	/// `oauth_token` only while the session holds a token plus `version`, and selects the verb
	/// through `is_post` exactly like [`ApiClient::private_request`]. The locale travels via the
	/// Accept-Language header only.
	pub async fn multi_request(&self, requests: &[MultiRequest], is_post: bool) -> Result<String> {
		const KIND: OpKind = OpKind::MultiRequest;

		let span = RequestSpan::new(KIND, "multi_request");

		obs::record_request_outcome(KIND, RequestOutcome::Attempt);

		let result = span
			.instrument(async move {
				let params = {
					let mut map = BTreeMap::new();

					if let Some(token) = self.session.access_token() {
						map.insert("oauth_token".into(), token.expose().into());
					}

					map.insert("version".into(), self.config.version().into());
					map.insert("requests".into(), request::batch_value(requests));

					map
				};
				let url = request::endpoint_url(self.config.base_url(), MULTI_ENDPOINT)?;

				self.dispatch(HttpMethod::from_post_flag(is_post), url, &params).await
			})
			.await;

		match &result {
			Ok(_) => obs::record_request_outcome(KIND, RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(KIND, RequestOutcome::Failure),
		}

		result
	}
}
