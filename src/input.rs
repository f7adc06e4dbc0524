//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Text input widget for the search query.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl QueryInput<'_> {
	/// Construct an input pre-filled with `initial`, cursor at the end.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::from([initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		Self { textarea }
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key event to the editor. Returns `true` when the text changed.
	/// Enter and Tab are reserved for the application and never inserted.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if matches!(key.code, KeyCode::Enter | KeyCode::Tab) {
			return false;
		}
		self.textarea.input(key)
	}

	/// Apply the prompt style to the editor text and cursor line.
	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	/// Render the single-line editor into `area`.
	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
