//! Response envelope validation for provider payloads.
//!
//! Every venue API response wraps its payload as `{"meta":{"code":200},"response":{...}}`; the
//! HTTP status line is not authoritative. The helpers here parse that wrapper and hand back the
//! payload only when the envelope itself signals success.

// self
use crate::_prelude::*;

/// `meta.code` value that marks a successful envelope.
pub const SUCCESS_CODE: i64 = 200;

/// Failures raised while interpreting a provider response body.
#[derive(Debug, ThisError)]
pub enum InvalidResponseError {
	/// Body is not valid JSON.
	#[error("Provider returned a malformed JSON body.")]
	Malformed {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::error::Error>,
	},
	/// Envelope carries no `response` payload.
	#[error("Provider response is missing the `response` payload.")]
	MissingResponse,
	/// Envelope carries no readable `meta.code`.
	#[error("Provider response is missing `meta.code`.")]
	MissingMeta,
	/// Envelope reports a non-success status code.
	#[error("Provider reported status code {code}.")]
	UnexpectedCode {
		/// `meta.code` value found in the envelope.
		code: i64,
	},
}

/// Response wrapper shared by every venue API operation.
#[derive(Clone, Debug, Deserialize)]
pub struct ResponseEnvelope {
	/// Status block the provider mirrors into the body.
	#[serde(default)]
	pub meta: Option<ResponseMeta>,
	/// Operation payload; absent when the provider rejected the call.
	#[serde(default)]
	pub response: Option<Value>,
}
impl ResponseEnvelope {
	/// Validates the envelope and extracts its payload.
	///
	/// The payload must be present and `meta.code` must equal [`SUCCESS_CODE`]; the payload check
	/// runs first, so a body without `response` reports [`InvalidResponseError::MissingResponse`]
	/// even when the status block is also absent.
	pub fn into_payload(self) -> Result<Value, InvalidResponseError> {
		let payload = self.response.ok_or(InvalidResponseError::MissingResponse)?;

		match self.meta.and_then(|meta| meta.code) {
			Some(SUCCESS_CODE) => Ok(payload),
			Some(code) => Err(InvalidResponseError::UnexpectedCode { code }),
			None => Err(InvalidResponseError::MissingMeta),
		}
	}
}

/// Status block carried inside each response body.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ResponseMeta {
	/// Provider-reported status code; [`SUCCESS_CODE`] marks success.
	#[serde(default)]
	pub code: Option<i64>,
}

/// Parses a raw body, validates its envelope, and returns the inner payload.
pub fn parse_response(raw: &str) -> Result<Value, InvalidResponseError> {
	let envelope: ResponseEnvelope =
		deserialize_json(raw).map_err(|source| InvalidResponseError::Malformed { source })?;

	envelope.into_payload()
}

/// Deserializes JSON with path-aware errors; shared by envelope, token, and geocoding parsing.
pub(crate) fn deserialize_json<T>(
	raw: &str,
) -> Result<T, serde_path_to_error::Error<serde_json::error::Error>>
where
	T: serde::de::DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_str(raw);

	serde_path_to_error::deserialize(&mut deserializer)
}
