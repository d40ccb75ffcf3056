// crates.io
use httpmock::prelude::*;
// self
use foursquare_client::{
	_preludet::*,
	client::ApiClient,
	config::ClientConfig,
	geo::{Coordinates, GeocodingError},
	http::ReqwestTransport,
};

fn build_client(server: &MockServer) -> ApiClient<ReqwestTransport> {
	let config = ClientConfig::builder("geo-client", "geo-secret")
		.geocoding_url(server.url("/maps/api/geocode/json"))
		.build()
		.expect("Mock-server configuration should build successfully.");

	ApiClient::with_transport(config, test_reqwest_transport())
}

#[tokio::test]
async fn addresses_resolve_to_coordinates() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/maps/api/geocode/json")
				.query_param("address", "5 avenue Anatole France, Paris")
				.query_param("sensor", "false");
			then.status(200).header("content-type", "application/json").body(
				"{\"status\":\"OK\",\"results\":[{\"geometry\":{\"location\":{\"lat\":48.8584,\"lng\":2.2945}}}]}",
			);
		})
		.await;
	let coordinates = client
		.geolocate_address("5 avenue Anatole France, Paris")
		.await
		.expect("Geocoding lookup against the mock server should succeed.")
		.expect("A known address should resolve to coordinates.");

	assert_eq!(coordinates, Coordinates { latitude: 48.8584, longitude: 2.2945 });
	assert_eq!(coordinates.to_string(), "48.8584,2.2945");

	mock.assert_async().await;
}

#[tokio::test]
async fn unmatched_addresses_resolve_to_none() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/maps/api/geocode/json");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"status\":\"ZERO_RESULTS\",\"results\":[]}");
		})
		.await;
	let resolved = client
		.geolocate_address("nowhere at all")
		.await
		.expect("ZERO_RESULTS lookups should not error.");

	assert_eq!(resolved, None);

	mock.assert_async().await;
}

#[tokio::test]
async fn service_failures_surface_their_status() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/maps/api/geocode/json");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"status\":\"OVER_QUERY_LIMIT\",\"results\":[]}");
		})
		.await;
	let err = client
		.geolocate_address("1 infinite loop")
		.await
		.expect_err("Service failures should surface to the caller.");

	assert!(matches!(
		err,
		Error::Geocoding(GeocodingError::UnexpectedStatus { ref status }) if status == "OVER_QUERY_LIMIT"
	));

	mock.assert_async().await;
}
