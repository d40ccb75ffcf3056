//! Address geolocation backed by the Google Maps geocoding API.
//!
//! The venue API locates searches with a `lat,lng` pair, so callers holding only a street
//! address first resolve it through [`ApiClient::geolocate_address`](crate::client::ApiClient::geolocate_address),
//! which yields the [`Coordinates`] interpreted here.

// self
use crate::_prelude::*;

/// Geocoding status accompanying a non-empty result list.
pub const STATUS_OK: &str = "OK";
/// Geocoding status for a well-formed query that matched nothing.
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Failures raised while interpreting a geocoding response.
#[derive(Debug, ThisError)]
pub enum GeocodingError {
	/// Body is not valid JSON.
	#[error("Geocoding service returned a malformed JSON body.")]
	Malformed {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::error::Error>,
	},
	/// Service reported a status other than `OK` or `ZERO_RESULTS`.
	#[error("Geocoding service reported status `{status}`.")]
	UnexpectedStatus {
		/// Status string found in the response.
		status: String,
	},
	/// Service reported `OK` with an empty result list.
	#[error("Geocoding service reported `OK` without any results.")]
	EmptyResults,
}

/// Geographic coordinates of a geolocated address.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
	/// Latitude in decimal degrees.
	pub latitude: f64,
	/// Longitude in decimal degrees.
	pub longitude: f64,
}
impl Display for Coordinates {
	/// Renders the `lat,lng` pair consumed by the venue search `ll` parameter.
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{},{}", self.latitude, self.longitude)
	}
}

#[derive(Debug, Deserialize)]
struct GeocodeEnvelope {
	#[serde(default)]
	status: String,
	#[serde(default)]
	results: Vec<GeocodeResult>,
}
#[derive(Debug, Deserialize)]
struct GeocodeResult {
	geometry: GeocodeGeometry,
}
#[derive(Debug, Deserialize)]
struct GeocodeGeometry {
	location: GeocodeLocation,
}
#[derive(Debug, Deserialize)]
struct GeocodeLocation {
	lat: f64,
	lng: f64,
}

/// Interprets a raw geocoding body, mapping `ZERO_RESULTS` to `None` and the first `OK` result
/// to its coordinates.
pub(crate) fn parse_geocode_response(raw: &str) -> Result<Option<Coordinates>, GeocodingError> {
	let envelope: GeocodeEnvelope = crate::envelope::deserialize_json(raw)
		.map_err(|source| GeocodingError::Malformed { source })?;

	match envelope.status.as_str() {
		STATUS_ZERO_RESULTS => Ok(None),
		STATUS_OK => {
			let result = envelope.results.first().ok_or(GeocodingError::EmptyResults)?;
			let location = &result.geometry.location;

			Ok(Some(Coordinates { latitude: location.lat, longitude: location.lng }))
		},
		_ => Err(GeocodingError::UnexpectedStatus { status: envelope.status }),
	}
}
