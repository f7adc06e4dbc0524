//! Core crate exports for building and running the `flicks` terminal
//! interface.
//!
//! The root module primarily re-exports the application, API, and styling
//! types so that embedders can configure the search view without digging
//! through the module hierarchy.

pub mod api;
pub mod app;
pub mod app_dirs;
pub mod cli;
pub mod components;
pub mod input;
pub mod logging;
pub mod results;
pub mod runtime;
pub mod search;
pub mod settings;
pub mod style;

pub use app::{App, AppOptions};
pub use runtime::run;

pub use crate::api::{ApiError, MovieSummary, OmdbClient, SearchPage};
pub use crate::input::QueryInput;
pub use crate::search::{FetchRuntime, SearchState};
pub use crate::style::{Theme, default_theme};
