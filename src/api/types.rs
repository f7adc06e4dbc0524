use serde::Deserialize;

use super::ApiError;

/// Marker the API uses for absent poster references.
const POSTER_UNAVAILABLE: &str = "N/A";

/// One entry in a search result list, carrying identifying and display
/// metadata for a single title.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieSummary {
	/// Unique identifier within a result set; used as the rendering key.
	#[serde(rename = "imdbID")]
	pub imdb_id: String,
	#[serde(rename = "Title")]
	pub title: String,
	#[serde(rename = "Year")]
	pub year: String,
	/// Poster image URL, or the literal `"N/A"` when none exists.
	#[serde(rename = "Poster")]
	pub poster: String,
	/// Media type; always `"movie"` given the fixed request filter.
	#[serde(rename = "Type")]
	pub media_type: String,
}

impl MovieSummary {
	/// The poster URL, or `None` when the reference is absent or marked
	/// unavailable. Callers substitute a placeholder in that case.
	#[must_use]
	pub fn poster_url(&self) -> Option<&str> {
		let poster = self.poster.trim();
		if poster.is_empty() || poster == POSTER_UNAVAILABLE {
			None
		} else {
			Some(poster)
		}
	}
}

/// Top-level JSON object returned by the API for a search call.
///
/// The API signals failure in-band: `Response` is `"False"` and `Error`
/// carries the message, while the data fields are omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
	#[serde(rename = "Response")]
	response: String,
	#[serde(rename = "Search", default)]
	search: Vec<MovieSummary>,
	#[serde(rename = "totalResults", default)]
	total_results: Option<String>,
	#[serde(rename = "Error", default)]
	error: Option<String>,
}

/// One successfully fetched page of results.
#[derive(Debug, Clone)]
pub struct SearchPage {
	/// Records in API-returned order.
	pub movies: Vec<MovieSummary>,
	/// Total number of matches across all pages, as reported by the API.
	pub total_results: usize,
}

impl SearchEnvelope {
	/// Convert the envelope into a typed page, surfacing in-band failures.
	pub fn into_page(self) -> Result<SearchPage, ApiError> {
		if !self.response.eq_ignore_ascii_case("true") {
			let message = self
				.error
				.filter(|message| !message.is_empty())
				.unwrap_or_else(|| "No movies found".to_string());
			return Err(ApiError::Api(message));
		}

		let raw_total = self.total_results.unwrap_or_default();
		let total_results: usize = raw_total
			.trim()
			.parse()
			.map_err(|_| ApiError::InvalidTotal(raw_total))?;

		Ok(SearchPage {
			movies: self.search,
			total_results,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(body: &str) -> SearchEnvelope {
		serde_json::from_str(body).expect("fixture should deserialize")
	}

	#[test]
	fn successful_envelope_becomes_a_page() {
		let envelope = parse(
			r#"{
				"Response": "True",
				"Search": [
					{"imdbID": "tt1", "Title": "Iron Man", "Year": "2008", "Poster": "N/A", "Type": "movie"}
				],
				"totalResults": "1"
			}"#,
		);

		let page = envelope.into_page().expect("envelope reported success");
		assert_eq!(page.total_results, 1);
		assert_eq!(page.movies.len(), 1);
		assert_eq!(page.movies[0].imdb_id, "tt1");
		assert_eq!(page.movies[0].title, "Iron Man");
		assert!(page.movies[0].poster_url().is_none());
	}

	#[test]
	fn poster_url_passes_through_real_references() {
		let envelope = parse(
			r#"{
				"Response": "True",
				"Search": [
					{"imdbID": "tt2", "Title": "Up", "Year": "2009", "Poster": "https://img.example/up.jpg", "Type": "movie"}
				],
				"totalResults": "1"
			}"#,
		);

		let page = envelope.into_page().unwrap();
		assert_eq!(
			page.movies[0].poster_url(),
			Some("https://img.example/up.jpg")
		);
	}

	#[test]
	fn failed_envelope_carries_the_api_message() {
		let envelope = parse(r#"{"Response": "False", "Error": "Movie not found!"}"#);

		let err = envelope.into_page().unwrap_err();
		assert!(err.is_domain());
		assert_eq!(err.to_string(), "Movie not found!");
	}

	#[test]
	fn failed_envelope_without_message_falls_back() {
		let envelope = parse(r#"{"Response": "False"}"#);

		let err = envelope.into_page().unwrap_err();
		assert_eq!(err.to_string(), "No movies found");
	}

	#[test]
	fn non_numeric_total_is_rejected() {
		let envelope = parse(r#"{"Response": "True", "Search": [], "totalResults": "lots"}"#);

		let err = envelope.into_page().unwrap_err();
		assert!(matches!(err, ApiError::InvalidTotal(raw) if raw == "lots"));
	}
}
