//! Typed helpers for the venue search endpoint.

// self
use crate::{_prelude::*, client::ApiClient, envelope, geo::Coordinates, http::Transport};

/// Endpoint path of the venue search operation.
pub const SEARCH_ENDPOINT: &str = "venues/search";

/// Typed builder for `venues/search` query parameters.
///
/// Every setter mirrors one provider parameter and overwrites any previous value for the same
/// key; [`VenueSearchParams::into_params`] renders the map handed to
/// [`ApiClient::public_request`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VenueSearchParams(BTreeMap<String, String>);
impl VenueSearchParams {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Centers the search on coordinates via the `ll` parameter.
	pub fn ll(mut self, coordinates: Coordinates) -> Self {
		self.0.insert("ll".into(), coordinates.to_string());

		self
	}

	/// Accuracy of the `ll` parameter, in meters.
	pub fn ll_accuracy(mut self, meters: f64) -> Self {
		self.0.insert("llAcc".into(), meters.to_string());

		self
	}

	/// Centers the search on a named place instead of coordinates.
	pub fn near(mut self, place: impl Into<String>) -> Self {
		self.0.insert("near".into(), place.into());

		self
	}

	/// Altitude of the caller, in meters.
	pub fn alt(mut self, meters: i64) -> Self {
		self.0.insert("alt".into(), meters.to_string());

		self
	}

	/// Accuracy of the `alt` parameter, in meters.
	pub fn alt_accuracy(mut self, meters: f64) -> Self {
		self.0.insert("altAcc".into(), meters.to_string());

		self
	}

	/// Search term matched against venue names.
	pub fn query(mut self, query: impl Into<String>) -> Self {
		self.0.insert("query".into(), query.into());

		self
	}

	/// Caps the number of returned venues.
	pub fn limit(mut self, limit: u32) -> Self {
		self.0.insert("limit".into(), limit.to_string());

		self
	}

	/// Search intent understood by the provider, e.g. `checkin` or `browse`.
	pub fn intent(mut self, intent: impl Into<String>) -> Self {
		self.0.insert("intent".into(), intent.into());

		self
	}

	/// Search radius in meters, honored by the `browse` intent.
	pub fn radius(mut self, meters: u32) -> Self {
		self.0.insert("radius".into(), meters.to_string());

		self
	}

	/// South-west corner of a bounding box, honored by the `browse` intent.
	pub fn sw(mut self, coordinates: Coordinates) -> Self {
		self.0.insert("sw".into(), coordinates.to_string());

		self
	}

	/// North-east corner of a bounding box, honored by the `browse` intent.
	pub fn ne(mut self, coordinates: Coordinates) -> Self {
		self.0.insert("ne".into(), coordinates.to_string());

		self
	}

	/// Restricts results to one category identifier.
	pub fn category_id(mut self, category_id: impl Into<String>) -> Self {
		self.0.insert("categoryId".into(), category_id.into());

		self
	}

	/// Matches venues by their associated URL.
	pub fn url(mut self, url: impl Into<String>) -> Self {
		self.0.insert("url".into(), url.into());

		self
	}

	/// Identifier of a third-party provider for linked-venue lookups.
	pub fn provider_id(mut self, provider_id: impl Into<String>) -> Self {
		self.0.insert("providerId".into(), provider_id.into());

		self
	}

	/// Venue identifier in the third-party provider's namespace.
	pub fn linked_id(mut self, linked_id: impl Into<String>) -> Self {
		self.0.insert("linkedId".into(), linked_id.into());

		self
	}

	/// Escape hatch for parameters without a dedicated setter.
	pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.0.insert(key.into(), value.into());

		self
	}

	/// Renders the provider parameter map.
	pub fn into_params(self) -> BTreeMap<String, String> {
		self.0
	}
}

impl<T> ApiClient<T>
where
	T: ?Sized + Transport,
{
	/// Searches venues with client credentials and validates the response envelope.
	///
	/// Thin wrapper combining [`ApiClient::public_request`] against [`SEARCH_ENDPOINT`] with
	/// [`envelope::parse_response`], since that pairing is the most common read path.
	pub async fn search_venues(&self, params: VenueSearchParams) -> Result<Value> {
		let raw = self.public_request(SEARCH_ENDPOINT, params.into_params()).await?;

		Ok(envelope::parse_response(&raw)?)
	}
}
