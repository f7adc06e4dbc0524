//! Query controller: the shared view-state, the background fetch worker, and
//! the runtime that sequences requests so a superseded response can never
//! clobber newer state.

mod runtime;
mod state;
mod worker;

pub use runtime::FetchRuntime;
pub use state::SearchState;
pub use worker::{FetchRequest, FetchResponse, spawn};

/// Validation error shown when the user submits an empty query. No request
/// is made in that case.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a movie title to search";

/// Generic message for transport-level failures. API-reported errors surface
/// their own message verbatim instead.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch movies. Please try again.";
