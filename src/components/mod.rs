//! UI building blocks shared across rendering and state modules.

/// Status and footer banner rendering.
pub mod banner;
/// Input prompt rendering and progress display.
pub mod prompt;
/// Table row construction for movie records.
pub mod rows;
/// Scrollbar for viewports.
pub mod scrollbar;
/// Table rendering and configuration.
pub mod tables;

pub use banner::{render_footer, render_status};
pub use prompt::{InputContext, ProgressState, render_input};
pub use rows::build_movie_rows;
pub use scrollbar::{point_in_rect, render_scrollbar};
pub use tables::render_table;
