use anyhow::{Context, Result};
use tracing::debug;

use super::ApiError;
use super::types::{SearchEnvelope, SearchPage};

/// Default endpoint for the movie database.
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Blocking HTTP client for the OMDb search endpoint.
///
/// Every search is a single GET with the access key, search term, page
/// number, and a media-type filter fixed to `movie`. No retries and no
/// timeout beyond the underlying client's defaults.
pub struct OmdbClient {
	http: reqwest::blocking::Client,
	base_url: String,
	api_key: String,
}

impl OmdbClient {
	/// Build a client for the given access key and endpoint.
	pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
		let http = reqwest::blocking::Client::builder()
			.user_agent(concat!("flicks/", env!("CARGO_PKG_VERSION")))
			.build()
			.context("failed to build HTTP client")?;

		Ok(Self {
			http,
			base_url: base_url.into(),
			api_key: api_key.into(),
		})
	}

	/// Fetch one page of titles matching `query`.
	pub fn search(&self, query: &str, page: u32) -> Result<SearchPage, ApiError> {
		debug!(query, page, "issuing search request");

		let body = self
			.http
			.get(&self.base_url)
			.query(&[
				("apikey", self.api_key.as_str()),
				("s", query),
				("page", &page.to_string()),
				("type", "movie"),
			])
			.send()?
			.text()?;

		let envelope: SearchEnvelope = serde_json::from_str(&body)?;
		envelope.into_page()
	}
}
