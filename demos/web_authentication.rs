//! Builds the provider's web authentication URL, then simulates the redirect callback by
//! exchanging its authorization code for an access token and calling a private resource.

// std
use std::collections::BTreeMap;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use foursquare_client::{client::ReqwestApiClient, config::ClientConfig, envelope};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth2/access_token").query_param("code", "demo-code");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"demo-access\"}");
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/users/self").query_param("oauth_token", "demo-access");
			then.status(200).header("content-type", "application/json").body(
				"{\"meta\":{\"code\":200},\"response\":{\"user\":{\"id\":\"u1\",\"firstName\":\"Demo\"}}}",
			);
		})
		.await;

	let config = ClientConfig::builder("demo-client", "demo-secret")
		.redirect_uri("https://app.example.com/oauth/callback")
		.api_base(format!("{}/", server.base_url()))
		.token_url(server.url("/oauth2/access_token"))
		.build()?;
	let mut client = ReqwestApiClient::new(config)?;

	println!("Send your user to {}.", client.authentication_url(None));

	// Simulate the provider redirecting back with `?code=demo-code`.
	let outcome = client.exchange_code("demo-code", None).await?;

	if !outcome.is_issued() {
		eprintln!("Provider answered without an access token.");

		return Ok(());
	}

	println!("Access token issued; it now rides along on private requests.");

	let raw = client.private_request("users/self", BTreeMap::new(), false).await?;
	let payload = envelope::parse_response(&raw)?;

	println!(
		"Authenticated as {} ({}).",
		payload["user"]["firstName"].as_str().unwrap_or("?"),
		payload["user"]["id"]
	);

	Ok(())
}
