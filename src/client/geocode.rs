//! Address geolocation operation delegating to the configured geocoding endpoint.

// self
use crate::{
	_prelude::*,
	client::ApiClient,
	geo::{self, Coordinates},
	http::{HttpMethod, Transport},
	obs::{self, OpKind, RequestOutcome, RequestSpan},
};

impl<T> ApiClient<T>
where
	T: ?Sized + Transport,
{
	/// Resolves a street address to coordinates via the geocoding endpoint.
	///
	/// Returns `Ok(None)` when the service reports `ZERO_RESULTS`; any other non-`OK` status is
	/// an error. The lookup is anonymous: no client credentials are attached, though the
	/// Accept-Language header still carries the configured locale.
	pub async fn geolocate_address(&self, address: &str) -> Result<Option<Coordinates>> {
		const KIND: OpKind = OpKind::Geocode;

		let span = RequestSpan::new(KIND, "geolocate_address");

		obs::record_request_outcome(KIND, RequestOutcome::Attempt);

		let result = span
			.instrument(async move {
				let params = {
					let mut map = BTreeMap::new();

					map.insert("address".into(), address.to_owned());
					map.insert("sensor".into(), "false".into());

					map
				};
				let url = self.config.endpoints().geocoding.clone();
				let raw = self.dispatch(HttpMethod::Get, url, &params).await?;

				Ok(geo::parse_geocode_response(&raw)?)
			})
			.await;

		match &result {
			Ok(_) => obs::record_request_outcome(KIND, RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(KIND, RequestOutcome::Failure),
		}

		result
	}
}
