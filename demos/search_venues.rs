//! Geolocates a street address and searches venues around it against a self-contained mock
//! provider, so the demo runs without real Foursquare credentials.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use foursquare_client::{client::ReqwestApiClient, config::ClientConfig, venues::VenueSearchParams};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/maps/api/geocode/json");
			then.status(200).header("content-type", "application/json").body(
				"{\"status\":\"OK\",\"results\":[{\"geometry\":{\"location\":{\"lat\":37.7599,\"lng\":-122.4148}}}]}",
			);
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/venues/search");
			then.status(200).header("content-type", "application/json").body(
				"{\"meta\":{\"code\":200},\"response\":{\"venues\":[\
				{\"id\":\"v1\",\"name\":\"Ritual Coffee Roasters\"},\
				{\"id\":\"v2\",\"name\":\"Tartine Bakery\"}]}}",
			);
		})
		.await;

	let config = ClientConfig::builder("demo-client", "demo-secret")
		.api_base(format!("{}/", server.base_url()))
		.geocoding_url(server.url("/maps/api/geocode/json"))
		.build()?;
	let client = ReqwestApiClient::new(config)?;
	let address = "Mission District, San Francisco";

	let Some(coordinates) = client.geolocate_address(address).await? else {
		eprintln!("Address `{address}` did not resolve to coordinates.");

		return Ok(());
	};

	println!("Geolocated `{address}` to {coordinates}.");

	let payload = client
		.search_venues(VenueSearchParams::new().ll(coordinates).query("coffee").limit(10))
		.await?;
	let venues = payload["venues"].as_array().cloned().unwrap_or_default();

	println!("Found {} venue(s).", venues.len());

	for venue in &venues {
		println!("- {} ({}).", venue["name"].as_str().unwrap_or("?"), venue["id"]);
	}

	Ok(())
}
