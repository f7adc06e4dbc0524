//! Fetch coordination between the UI and the background worker.
//!
//! Both pagination triggers funnel into [`App::request_next_page`], which is
//! suppressed while a fetch is in flight or when no further pages exist.
//! Responses are sequenced by request id; anything superseded is dropped.

use std::sync::mpsc::TryRecvError;

use crate::search::{EMPTY_QUERY_MESSAGE, FETCH_FAILED_MESSAGE};

use super::App;

impl App<'_> {
	/// Submit the current input as a fresh page-1 search.
	///
	/// Empty or whitespace-only input yields the validation error and never
	/// issues a request.
	pub(crate) fn submit_search(&mut self) {
		let query = self.query_input.text().trim().to_string();
		if query.is_empty() {
			self.search.error = Some(EMPTY_QUERY_MESSAGE.to_string());
			return;
		}

		self.search.begin_search(query.clone());
		self.results.set_len(0);
		self.search.loading = true;
		self.fetcher.issue(query, 1);
	}

	/// The single "fetch next page" operation shared by the manual key
	/// binding and the passive bottom-of-list trigger.
	pub(crate) fn request_next_page(&mut self) {
		if self.search.loading || !self.search.has_more {
			return;
		}

		let page = self.search.page + 1;
		self.search.loading = true;
		self.search.error = None;
		self.fetcher.issue(self.search.query.clone(), page);
	}

	/// Fire the passive trigger when downward navigation has landed on the
	/// last loaded row.
	pub(crate) fn maybe_auto_fetch(&mut self) {
		if self.auto_load && self.results.at_last_row() {
			self.request_next_page();
		}
	}

	/// Submit the configured initial query once, on startup.
	pub(crate) fn hydrate_initial_query(&mut self) {
		if !self.initial_query.trim().is_empty() {
			self.submit_search();
		}
	}

	/// Drain completed fetches, discarding superseded responses and applying
	/// the rest to the shared view-state.
	pub(crate) fn pump_fetch_results(&mut self) {
		loop {
			match self.fetcher.try_recv() {
				Ok(response) => {
					if !self.fetcher.matches_latest(response.id) {
						continue;
					}
					self.fetcher.mark_settled();
					self.search.loading = false;
					match response.result {
						Ok(fetched) => self.search.apply_page(response.page, fetched),
						Err(err) => self.search.apply_failure(response.page, &err),
					}
					self.results.set_len(self.search.movies.len());
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					// The worker died mid-fetch; settle the outstanding
					// request as a failure so the throbber stops.
					if self.fetcher.is_in_flight() {
						self.fetcher.mark_settled();
						self.search.loading = false;
						self.search.error = Some(FETCH_FAILED_MESSAGE.to_string());
					}
					break;
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc::{self, Receiver, Sender};

	use crate::api::{ApiError, MovieSummary, SearchPage};
	use crate::app::{App, AppOptions};
	use crate::search::{FetchRequest, FetchResponse, FetchRuntime};
	use crate::style::Theme;

	fn test_app() -> (App<'static>, Receiver<FetchRequest>, Sender<FetchResponse>) {
		let (request_tx, request_rx) = mpsc::channel();
		let (response_tx, response_rx) = mpsc::channel();
		let fetcher = FetchRuntime::new(request_tx, response_rx, None);
		let app = App::new(
			fetcher,
			AppOptions {
				initial_query: String::new(),
				auto_load: true,
				theme: Theme::default(),
			},
		);
		(app, request_rx, response_tx)
	}

	fn page(total: usize, count: usize) -> SearchPage {
		SearchPage {
			movies: (0..count)
				.map(|index| MovieSummary {
					imdb_id: format!("tt{index}"),
					title: format!("Title {index}"),
					year: "2008".to_string(),
					poster: "N/A".to_string(),
					media_type: "movie".to_string(),
				})
				.collect(),
			total_results: total,
		}
	}

	fn type_query(app: &mut App<'_>, text: &str) {
		use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
		for ch in text.chars() {
			app.query_input
				.input(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
		}
	}

	#[test]
	fn whitespace_query_never_issues_a_request() {
		let (mut app, request_rx, _response_tx) = test_app();
		type_query(&mut app, "   ");

		app.submit_search();

		assert!(request_rx.try_recv().is_err(), "no request should be sent");
		assert_eq!(
			app.search.error.as_deref(),
			Some("Please enter a movie title to search")
		);
		assert!(!app.search.loading);
	}

	#[test]
	fn submission_issues_a_trimmed_page_one_request() {
		let (mut app, request_rx, _response_tx) = test_app();
		type_query(&mut app, "  Marvel ");

		app.submit_search();

		let request = request_rx.try_recv().expect("request should be sent");
		assert_eq!(request.query, "Marvel");
		assert_eq!(request.page, 1);
		assert!(app.search.loading);
	}

	#[test]
	fn next_page_is_suppressed_while_loading_or_exhausted() {
		let (mut app, request_rx, _response_tx) = test_app();
		type_query(&mut app, "Marvel");
		app.submit_search();
		let _ = request_rx.try_recv().unwrap();

		// Still loading: the trigger must not fire.
		app.request_next_page();
		assert!(request_rx.try_recv().is_err());

		// Settle with a single page: nothing more to fetch.
		app.search.loading = false;
		app.search.apply_page(1, page(10, 10));
		app.request_next_page();
		assert!(request_rx.try_recv().is_err());
	}

	#[test]
	fn next_page_requests_the_following_page() {
		let (mut app, request_rx, response_tx) = test_app();
		type_query(&mut app, "Marvel");
		app.submit_search();
		let first = request_rx.try_recv().unwrap();

		response_tx
			.send(FetchResponse {
				id: first.id,
				page: 1,
				result: Ok(page(25, 10)),
			})
			.unwrap();
		app.pump_fetch_results();
		assert!(app.search.has_more);

		app.request_next_page();
		let second = request_rx.try_recv().unwrap();
		assert_eq!(second.page, 2);
		assert_eq!(second.query, "Marvel");
	}

	#[test]
	fn superseded_responses_are_dropped() {
		let (mut app, request_rx, response_tx) = test_app();
		type_query(&mut app, "Marvel");
		app.submit_search();
		let stale = request_rx.try_recv().unwrap();

		// A second submission supersedes the first before it lands.
		app.submit_search();
		let latest = request_rx.try_recv().unwrap();

		response_tx
			.send(FetchResponse {
				id: stale.id,
				page: 1,
				result: Ok(page(99, 10)),
			})
			.unwrap();
		app.pump_fetch_results();

		assert!(app.search.movies.is_empty(), "stale data must not apply");
		assert!(app.search.loading, "latest request is still outstanding");

		response_tx
			.send(FetchResponse {
				id: latest.id,
				page: 1,
				result: Ok(page(3, 3)),
			})
			.unwrap();
		app.pump_fetch_results();

		assert_eq!(app.search.movies.len(), 3);
		assert!(!app.search.loading);
	}

	#[test]
	fn bottom_of_list_triggers_auto_fetch() {
		let (mut app, request_rx, response_tx) = test_app();
		type_query(&mut app, "Marvel");
		app.submit_search();
		let first = request_rx.try_recv().unwrap();
		response_tx
			.send(FetchResponse {
				id: first.id,
				page: 1,
				result: Ok(page(25, 10)),
			})
			.unwrap();
		app.pump_fetch_results();

		// Not at the bottom yet: no trigger.
		app.maybe_auto_fetch();
		assert!(request_rx.try_recv().is_err());

		app.results.table_state.select(Some(9));
		app.maybe_auto_fetch();
		let request = request_rx.try_recv().expect("auto trigger should fire");
		assert_eq!(request.page, 2);
	}

	#[test]
	fn auto_fetch_respects_the_toggle() {
		let (mut app, request_rx, response_tx) = test_app();
		app.auto_load = false;
		type_query(&mut app, "Marvel");
		app.submit_search();
		let first = request_rx.try_recv().unwrap();
		response_tx
			.send(FetchResponse {
				id: first.id,
				page: 1,
				result: Ok(page(25, 10)),
			})
			.unwrap();
		app.pump_fetch_results();

		app.results.table_state.select(Some(9));
		app.maybe_auto_fetch();
		assert!(request_rx.try_recv().is_err());
	}

	#[test]
	fn failed_later_page_keeps_records_and_reports() {
		let (mut app, request_rx, response_tx) = test_app();
		type_query(&mut app, "Marvel");
		app.submit_search();
		let first = request_rx.try_recv().unwrap();
		response_tx
			.send(FetchResponse {
				id: first.id,
				page: 1,
				result: Ok(page(25, 10)),
			})
			.unwrap();
		app.pump_fetch_results();

		app.request_next_page();
		let second = request_rx.try_recv().unwrap();
		response_tx
			.send(FetchResponse {
				id: second.id,
				page: 2,
				result: Err(ApiError::Api("Movie not found!".to_string())),
			})
			.unwrap();
		app.pump_fetch_results();

		assert_eq!(app.search.movies.len(), 10);
		assert_eq!(app.search.error.as_deref(), Some("Movie not found!"));
		assert!(!app.search.loading);
	}

	#[test]
	fn dead_worker_settles_the_outstanding_request() {
		let (mut app, request_rx, response_tx) = test_app();
		type_query(&mut app, "Marvel");
		app.submit_search();
		let _ = request_rx.try_recv().unwrap();
		assert!(app.search.loading);

		drop(response_tx);
		app.pump_fetch_results();

		assert!(!app.search.loading, "loading must not stick");
		assert_eq!(
			app.search.error.as_deref(),
			Some("Failed to fetch movies. Please try again.")
		);

		// An idle pump against the dead channel stays quiet.
		app.search.error = None;
		app.pump_fetch_results();
		assert!(app.search.error.is_none());
	}
}
