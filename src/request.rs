//! Request assembly helpers: endpoint normalization, query encoding, and batch values.

// self
use crate::{_prelude::*, error::ConfigError};

/// Endpoint path of the batched multi-request operation.
pub const MULTI_ENDPOINT: &str = "multi";

/// A single sub-request inside a batched multi-request.
///
/// Each entry contributes a `path` or `path?query` segment to the comma-separated `requests`
/// value rendered by [`batch_value`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultiRequest {
	/// Endpoint path of the sub-request, normalized like any other endpoint path.
	pub endpoint: String,
	/// Query parameters appended to the sub-request path.
	pub params: BTreeMap<String, String>,
}
impl MultiRequest {
	/// Creates a sub-request without parameters.
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self { endpoint: endpoint.into(), params: BTreeMap::new() }
	}

	/// Adds one query parameter.
	pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.insert(key.into(), value.into());

		self
	}

	/// Replaces the whole parameter set.
	pub fn params(mut self, params: BTreeMap<String, String>) -> Self {
		self.params = params;

		self
	}

	fn render(&self) -> String {
		let endpoint = normalize_endpoint(&self.endpoint);

		if self.params.is_empty() {
			endpoint.into()
		} else {
			format!("{endpoint}?{}", encode_query(&self.params))
		}
	}
}

/// Strips leading and trailing slashes so endpoint paths join cleanly.
pub fn normalize_endpoint(endpoint: &str) -> &str {
	endpoint.trim_matches('/')
}

/// URL-encodes a parameter map as `application/x-www-form-urlencoded` pairs.
pub fn encode_query(params: &BTreeMap<String, String>) -> String {
	let mut serializer = url::form_urlencoded::Serializer::new(String::new());

	for (key, value) in params {
		serializer.append_pair(key, value);
	}

	serializer.finish()
}

/// Renders the comma-separated `requests` value of a batched multi-request.
///
/// Sub-request order is preserved; entries without parameters render as a bare path, the rest as
/// `path?query`.
pub fn batch_value(requests: &[MultiRequest]) -> String {
	requests.iter().map(MultiRequest::render).collect::<Vec<_>>().join(",")
}

/// Joins the versioned base URL and a normalized endpoint path into one request URL.
pub(crate) fn endpoint_url(base_url: &str, endpoint: &str) -> Result<Url, ConfigError> {
	let url = format!("{base_url}/{}", normalize_endpoint(endpoint));

	Url::parse(&url).map_err(|source| ConfigError::InvalidRequestUrl { url, source })
}

/// Appends encoded parameters to `url`, leaving it untouched when the map is empty.
pub(crate) fn append_query(url: &mut Url, params: &BTreeMap<String, String>) {
	if params.is_empty() {
		return;
	}

	let mut pairs = url.query_pairs_mut();

	for (key, value) in params {
		pairs.append_pair(key, value);
	}

	drop(pairs);
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
		pairs.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect()
	}

	#[test]
	fn normalization_strips_outer_slashes_only() {
		assert_eq!(normalize_endpoint("/venues/search/"), "venues/search");
		assert_eq!(normalize_endpoint("venues/search"), "venues/search");
		assert_eq!(normalize_endpoint("///multi//"), "multi");
		assert_eq!(normalize_endpoint(""), "");
	}

	#[test]
	fn query_encoding_sorts_and_escapes() {
		let encoded = encode_query(&params(&[("query", "coffee shop"), ("ll", "40.7,-74.0")]));

		assert_eq!(encoded, "ll=40.7%2C-74.0&query=coffee+shop");
		assert_eq!(encode_query(&BTreeMap::new()), "");
	}

	#[test]
	fn endpoint_urls_join_with_a_single_slash() {
		let url = endpoint_url("https://api.foursquare.com/v2", "/venues/search/")
			.expect("Endpoint URL should parse successfully.");

		assert_eq!(url.as_str(), "https://api.foursquare.com/v2/venues/search");
	}

	#[test]
	fn endpoint_urls_reject_unparseable_bases() {
		let err = endpoint_url("", "venues/search")
			.expect_err("A relative request URL should be rejected.");

		assert!(matches!(err, ConfigError::InvalidRequestUrl { .. }));
	}

	#[test]
	fn empty_parameter_maps_leave_urls_untouched() {
		let mut url = Url::parse("https://api.foursquare.com/v2/multi")
			.expect("Fixture URL should parse successfully.");

		append_query(&mut url, &BTreeMap::new());

		assert_eq!(url.as_str(), "https://api.foursquare.com/v2/multi");

		append_query(&mut url, &params(&[("version", "v2")]));

		assert_eq!(url.as_str(), "https://api.foursquare.com/v2/multi?version=v2");
	}

	#[test]
	fn batch_values_preserve_order_and_omit_empty_queries() {
		let requests = [
			MultiRequest::new("/b/").param("x", "1"),
			MultiRequest::new("a"),
			MultiRequest::new("venues/trending").param("ll", "40.7,-74.0").param("limit", "2"),
		];

		assert_eq!(
			batch_value(&requests),
			"b?x=1,a,venues/trending?limit=2&ll=40.7%2C-74.0"
		);
		assert_eq!(batch_value(&[]), "");
	}

	#[test]
	fn sub_request_builders_accumulate_params() {
		let request = MultiRequest::new("venues/search")
			.params(params(&[("query", "coffee")]))
			.param("limit", "5");

		assert_eq!(request.endpoint, "venues/search");
		assert_eq!(request.params.get("query").map(String::as_str), Some("coffee"));
		assert_eq!(request.params.get("limit").map(String::as_str), Some("5"));
	}
}
