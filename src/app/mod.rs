//! Core application state and behavior for the interactive search view.
//!
//! The [`App`] type aggregates the query input, search state, fetch runtime,
//! and rendering logic. Supporting modules partition the implementation into
//! focused pieces: actions (input handling), fetch coordination, and
//! rendering.

mod actions;
mod fetch;
mod render;
mod state;

pub use state::{App, AppOptions};
