use crate::api::{ApiError, MovieSummary, PAGE_SIZE, SearchPage};

use super::FETCH_FAILED_MESSAGE;

/// Shared view-state for the search pipeline.
///
/// A new search replaces the list wholesale; later pages append in API order.
/// The renderer reads this struct every frame and never mutates it.
#[derive(Debug, Default)]
pub struct SearchState {
	/// Records loaded so far, across all fetched pages.
	pub movies: Vec<MovieSummary>,
	/// The query the loaded records belong to.
	pub query: String,
	/// Last page that was successfully applied.
	pub page: u32,
	/// Total matches across all pages, as reported by the API.
	pub total_results: usize,
	/// Whether pages beyond `page` exist.
	pub has_more: bool,
	/// Whether a fetch is currently in flight.
	pub loading: bool,
	/// Inline error message for the most recent request, if any.
	pub error: Option<String>,
}

impl SearchState {
	/// Reset for a fresh page-1 search. The list is cleared immediately,
	/// before the response arrives.
	pub fn begin_search(&mut self, query: String) {
		self.movies.clear();
		self.query = query;
		self.page = 0;
		self.total_results = 0;
		self.has_more = false;
		self.error = None;
	}

	/// Apply a successfully fetched page: replace the list on page 1,
	/// append on later pages.
	pub fn apply_page(&mut self, page: u32, fetched: SearchPage) {
		if page == 1 {
			self.movies = fetched.movies;
		} else {
			self.movies.extend(fetched.movies);
		}
		self.page = page;
		self.total_results = fetched.total_results;
		self.has_more = (page as usize) * PAGE_SIZE < fetched.total_results;
		self.error = None;
	}

	/// Record a failed fetch. Only a page-1 failure clears the list; later
	/// pages leave the already-loaded records untouched.
	pub fn apply_failure(&mut self, page: u32, err: &ApiError) {
		self.error = Some(if err.is_domain() {
			err.to_string()
		} else {
			FETCH_FAILED_MESSAGE.to_string()
		});
		if page == 1 {
			self.movies.clear();
			self.total_results = 0;
			self.has_more = false;
		}
	}

	/// Whether the final page has been loaded for a non-empty result list.
	#[must_use]
	pub fn exhausted(&self) -> bool {
		!self.movies.is_empty() && !self.has_more
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn summary(id: &str, title: &str) -> MovieSummary {
		MovieSummary {
			imdb_id: id.to_string(),
			title: title.to_string(),
			year: "2008".to_string(),
			poster: "N/A".to_string(),
			media_type: "movie".to_string(),
		}
	}

	fn page(total: usize, ids: &[&str]) -> SearchPage {
		SearchPage {
			movies: ids.iter().map(|id| summary(id, "Title")).collect(),
			total_results: total,
		}
	}

	#[test]
	fn first_page_replaces_the_list() {
		let mut state = SearchState::default();
		state.begin_search("marvel".into());
		state.apply_page(1, page(25, &["tt1", "tt2"]));

		state.begin_search("batman".into());
		assert!(state.movies.is_empty(), "submission clears the old list");

		state.apply_page(1, page(12, &["tt9"]));
		assert_eq!(state.movies.len(), 1);
		assert_eq!(state.movies[0].imdb_id, "tt9");
	}

	#[test]
	fn later_pages_append_in_order() {
		let mut state = SearchState::default();
		state.begin_search("marvel".into());
		state.apply_page(1, page(25, &["tt1", "tt2"]));
		state.apply_page(2, page(25, &["tt3"]));

		let ids: Vec<&str> = state.movies.iter().map(|m| m.imdb_id.as_str()).collect();
		assert_eq!(ids, ["tt1", "tt2", "tt3"]);
		assert_eq!(state.page, 2);
	}

	#[test]
	fn has_more_requires_strictly_more_than_a_full_page() {
		let mut state = SearchState::default();

		state.apply_page(1, page(11, &["tt1"]));
		assert!(state.has_more, "11 > 1 * 10");

		state.apply_page(1, page(10, &["tt1"]));
		assert!(!state.has_more, "10 == 1 * 10");

		state.apply_page(2, page(20, &["tt2"]));
		assert!(!state.has_more, "20 == 2 * 10");

		state.apply_page(2, page(21, &["tt2"]));
		assert!(state.has_more, "21 > 2 * 10");
	}

	#[test]
	fn single_result_example_has_no_more_pages() {
		let mut state = SearchState::default();
		state.begin_search("Marvel".into());
		state.apply_page(1, page(1, &["tt1"]));

		assert_eq!(state.movies.len(), 1);
		assert!(!state.has_more);
		assert!(state.exhausted());
	}

	#[test]
	fn first_page_failure_clears_the_list() {
		let mut state = SearchState::default();
		state.apply_page(1, page(25, &["tt1", "tt2"]));

		state.apply_failure(1, &ApiError::Api("Movie not found!".into()));
		assert!(state.movies.is_empty());
		assert_eq!(state.error.as_deref(), Some("Movie not found!"));
		assert!(!state.has_more);
	}

	#[test]
	fn later_page_failure_preserves_the_list() {
		let mut state = SearchState::default();
		state.apply_page(1, page(25, &["tt1", "tt2"]));

		let decode_err =
			serde_json::from_str::<crate::api::SearchEnvelope>("not json").unwrap_err();
		state.apply_failure(2, &ApiError::Decode(decode_err));

		assert_eq!(state.movies.len(), 2, "existing records survive");
		assert_eq!(
			state.error.as_deref(),
			Some("Failed to fetch movies. Please try again.")
		);
	}
}
