mod builtins;

use ratatui::style::{Color, Style};

pub use builtins::{by_name, default_theme, names};

/// A theme containing styles for various UI elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for header elements and borders.
	pub header: Style,
	/// Style for the highlighted row.
	pub row_highlight: Style,
	/// Style for the query prompt.
	pub prompt: Style,
	/// Style for empty states and muted text.
	pub empty: Style,
	/// Style for emphasized values (counts, years).
	pub highlight: Style,
	/// Style for inline error banners.
	pub error: Style,
}

impl Theme {
	/// Style used for muted placeholder and progress text.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Foreground used for borders, falling back to the terminal default.
	#[must_use]
	pub fn border_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
