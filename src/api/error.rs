use thiserror::Error;

/// Failure modes of a single search call.
///
/// API-reported errors carry the message verbatim so the UI can surface it
/// inline; every other variant is presented as a generic transport failure.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The API answered with `Response: "False"` and a domain error message.
	#[error("{0}")]
	Api(String),
	/// The request never produced a usable response.
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),
	/// The response body was not the expected JSON shape.
	#[error("malformed response body: {0}")]
	Decode(#[from] serde_json::Error),
	/// The envelope carried a `totalResults` that is not a decimal count.
	#[error("malformed total result count: {0:?}")]
	InvalidTotal(String),
}

impl ApiError {
	/// Whether the error was reported by the API itself rather than the
	/// transport or decoding layers.
	#[must_use]
	pub fn is_domain(&self) -> bool {
		matches!(self, Self::Api(_))
	}
}
