//! Async client for the Foursquare venue-discovery API: credentialed and token-authenticated
//! requests, batched multi-calls, envelope validation, and address geolocation in one crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod geo;
pub mod http;
pub mod obs;
pub mod request;
pub mod venues;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// std
	use std::collections::VecDeque;

	// self
	use crate::{
		client::ApiClient,
		config::ClientConfig,
		http::{Transport, TransportFuture, TransportRequest, TransportResponse},
	};

	/// Body served by [`RecordingTransport`] when no scripted reply is queued.
	pub const EMPTY_OK_BODY: &str = r#"{"meta":{"code":200},"response":{}}"#;

	/// Client type alias used by recording-transport tests.
	pub type RecordingApiClient = ApiClient<RecordingTransport>;

	/// In-memory transport that captures every dispatched request and replays scripted
	/// responses in queue order.
	#[derive(Debug, Default)]
	pub struct RecordingTransport {
		requests: Mutex<Vec<TransportRequest>>,
		replies: Mutex<VecDeque<TransportResponse>>,
	}
	impl RecordingTransport {
		/// Creates a transport with no scripted replies; every request receives
		/// [`EMPTY_OK_BODY`] with status 200.
		pub fn new() -> Self {
			Self::default()
		}

		/// Queues a reply served to the next unanswered request.
		pub fn with_reply(self, status: u16, body: &str) -> Self {
			self.replies.lock().push_back(TransportResponse { status, body: body.to_owned() });

			self
		}

		/// Returns the requests captured so far, in dispatch order.
		pub fn requests(&self) -> Vec<TransportRequest> {
			self.requests.lock().clone()
		}
	}
	impl Transport for RecordingTransport {
		fn execute(&self, request: TransportRequest) -> TransportFuture<'_> {
			self.requests.lock().push(request);

			let response = self.replies.lock().pop_front().unwrap_or_else(|| TransportResponse {
				status: 200,
				body: EMPTY_OK_BODY.to_owned(),
			});

			Box::pin(async move { Ok(response) })
		}
	}

	/// Builds a [`ClientConfig`] with fixed test credentials and stock endpoints.
	pub fn test_config() -> ClientConfig {
		ClientConfig::builder("client-id", "client-secret")
			.build()
			.expect("Test configuration should build successfully.")
	}

	/// Constructs an [`ApiClient`] backed by a fresh [`RecordingTransport`], returning the
	/// transport handle alongside it for request inspection.
	pub fn recording_client(config: ClientConfig) -> (RecordingApiClient, Arc<RecordingTransport>) {
		recording_client_with(config, RecordingTransport::new())
	}

	/// Like [`recording_client`], but with a caller-scripted transport.
	pub fn recording_client_with(
		config: ClientConfig,
		transport: RecordingTransport,
	) -> (RecordingApiClient, Arc<RecordingTransport>) {
		let transport = Arc::new(transport);
		let client = ApiClient::with_transport(config, transport.clone());

		(client, transport)
	}

	/// Builds a reqwest transport that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	#[cfg(feature = "reqwest")]
	pub fn test_reqwest_transport() -> crate::http::ReqwestTransport {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		crate::http::ReqwestTransport::with_client(client)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
		time::Duration,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, foursquare_client as _, httpmock as _};
