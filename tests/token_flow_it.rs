// crates.io
use httpmock::prelude::*;
// self
use foursquare_client::{
	_preludet::*,
	auth::{AccessToken, TokenExchangeOutcome},
	client::ApiClient,
	config::ClientConfig,
	envelope::InvalidResponseError,
	http::ReqwestTransport,
};

const CLIENT_ID: &str = "token-client";
const CLIENT_SECRET: &str = "token-secret";
const REDIRECT_URI: &str = "https://app.example.com/callback";

fn build_config(server: &MockServer) -> ClientConfig {
	ClientConfig::builder(CLIENT_ID, CLIENT_SECRET)
		.api_base(format!("{}/", server.base_url()))
		.token_url(server.url("/oauth2/access_token"))
		.redirect_uri(REDIRECT_URI)
		.build()
		.expect("Mock-server configuration should build successfully.")
}

fn build_client(server: &MockServer) -> ApiClient<ReqwestTransport> {
	ApiClient::with_transport(build_config(server), test_reqwest_transport())
}

#[tokio::test]
async fn code_exchanges_store_the_session_token() {
	let server = MockServer::start_async().await;
	let mut client = build_client(&server);
	let token_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/oauth2/access_token")
				.query_param("client_id", CLIENT_ID)
				.query_param("client_secret", CLIENT_SECRET)
				.query_param("grant_type", "authorization_code")
				.query_param("redirect_uri", REDIRECT_URI)
				.query_param("code", "auth-code");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"issued-token\"}");
		})
		.await;
	let private_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v2/users/self")
				.query_param("oauth_token", "issued-token")
				.query_param("version", "v2");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"meta\":{\"code\":200},\"response\":{\"user\":{\"id\":\"u1\"}}}");
		})
		.await;
	let outcome = client
		.exchange_code("auth-code", None)
		.await
		.expect("Code exchange against the mock server should succeed.");

	assert!(outcome.is_issued());
	assert_eq!(outcome.token().map(AccessToken::expose), Some("issued-token"));
	assert_eq!(
		client.session().access_token().map(AccessToken::expose),
		Some("issued-token")
	);

	client
		.private_request("users/self", BTreeMap::new(), false)
		.await
		.expect("Private request with the stored token should succeed.");

	token_mock.assert_async().await;
	private_mock.assert_async().await;
}

#[tokio::test]
async fn missing_tokens_leave_the_session_untouched() {
	let server = MockServer::start_async().await;
	let mut client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth2/access_token");
			then.status(200).header("content-type", "application/json").body("{}");
		})
		.await;
	let outcome = client
		.exchange_code("expired-code", None)
		.await
		.expect("Well-formed exchange responses should not error.");

	assert_eq!(outcome, TokenExchangeOutcome::Missing);
	assert_eq!(client.session().access_token(), None);

	mock.assert_async().await;
}

#[tokio::test]
async fn missing_tokens_preserve_a_previously_stored_token() {
	let server = MockServer::start_async().await;
	let mut client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth2/access_token");
			then.status(200).header("content-type", "application/json").body("{}");
		})
		.await;

	client.set_access_token(AccessToken::new("prior-token"));

	let outcome = client
		.exchange_code("expired-code", None)
		.await
		.expect("Well-formed exchange responses should not error.");

	assert_eq!(outcome, TokenExchangeOutcome::Missing);
	assert_eq!(client.session().access_token().map(AccessToken::expose), Some("prior-token"));

	mock.assert_async().await;
}

#[tokio::test]
async fn malformed_token_bodies_are_rejected() {
	let server = MockServer::start_async().await;
	let mut client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth2/access_token");
			then.status(502).header("content-type", "text/html").body("<html>bad gateway</html>");
		})
		.await;
	let err = client
		.exchange_code("auth-code", None)
		.await
		.expect_err("Unreadable exchange bodies should surface to the caller.");

	assert!(matches!(err, Error::InvalidResponse(InvalidResponseError::Malformed { .. })));
	assert_eq!(client.session().access_token(), None);

	mock.assert_async().await;
}

#[tokio::test]
async fn explicit_redirects_override_the_configured_one() {
	let server = MockServer::start_async().await;
	let mut client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/oauth2/access_token")
				.query_param("redirect_uri", "https://app.example.com/override")
				.query_param("code", "auth-code");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"override-token\"}");
		})
		.await;
	let outcome = client
		.exchange_code("auth-code", Some("https://app.example.com/override"))
		.await
		.expect("Code exchange with an explicit redirect should succeed.");

	assert!(outcome.is_issued());

	mock.assert_async().await;
}
