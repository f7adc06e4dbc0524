//! Aggregate state shared across the terminal UI.

use anyhow::Result;
use throbber_widgets_tui::ThrobberState;

use crate::api::OmdbClient;
use crate::input::QueryInput;
use crate::results::ResultsState;
use crate::search::{self, FetchRuntime, SearchState};
use crate::settings::ResolvedConfig;
use crate::style::{StyleConfig, Theme};

/// Startup options for the application.
#[derive(Debug, Clone)]
pub struct AppOptions {
	/// Query submitted automatically on startup.
	pub initial_query: String,
	/// Whether the passive pagination trigger starts enabled.
	pub auto_load: bool,
	/// Active color theme.
	pub theme: Theme,
}

/// Aggregate state shared across the terminal UI.
///
/// The `App` owns the loaded result list, the fetch runtime, and the UI
/// affordances around them.
pub struct App<'a> {
	/// Text input widget for the search query.
	pub query_input: QueryInput<'a>,
	/// Shared view-state for the search pipeline.
	pub search: SearchState,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	/// Whether reaching the bottom of the loaded list fetches the next page.
	pub auto_load: bool,
	pub(crate) fetcher: FetchRuntime,
	pub(crate) results: ResultsState,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) initial_query: String,
}

impl Drop for App<'_> {
	fn drop(&mut self) {
		self.fetcher.shutdown();
	}
}

impl App<'_> {
	/// Construct an [`App`] over an already-running fetch runtime.
	pub fn new(fetcher: FetchRuntime, options: AppOptions) -> Self {
		let AppOptions {
			initial_query,
			auto_load,
			theme,
		} = options;

		Self {
			query_input: QueryInput::new(initial_query.clone()),
			search: SearchState::default(),
			style: StyleConfig::with_theme(theme),
			auto_load,
			fetcher,
			results: ResultsState::default(),
			throbber_state: ThrobberState::default(),
			initial_query,
		}
	}

	/// Build the client and worker from resolved settings and wrap them in
	/// an [`App`].
	pub fn from_config(settings: &ResolvedConfig) -> Result<Self> {
		let client = OmdbClient::new(&settings.api_key, &settings.base_url)?;
		let (requests, responses, handle) = search::spawn(client);
		let fetcher = FetchRuntime::new(requests, responses, Some(handle));

		Ok(Self::new(
			fetcher,
			AppOptions {
				initial_query: settings.initial_query.clone(),
				auto_load: settings.auto_load,
				theme: settings.theme,
			},
		))
	}

}
