use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the input area.
pub struct InputContext<'a> {
	/// The query input widget.
	pub query_input: &'a QueryInput<'a>,
	/// Placeholder text shown when input is empty.
	pub placeholder: Option<&'a str>,
	/// Rendering area.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Progress information for the prompt progress indicator.
pub struct ProgressState<'a> {
	/// Text describing the progress state.
	pub progress_text: &'a str,
	/// Whether a fetch is currently in flight.
	pub loading: bool,
	/// Spinner animation state.
	pub throbber_state: &'a ThrobberState,
}

/// Render the input row with optional placeholder and progress indicator.
pub fn render_input(
	frame: &mut ratatui::Frame,
	input: InputContext<'_>,
	progress: ProgressState<'_>,
) {
	let InputContext {
		query_input,
		placeholder,
		area,
		theme,
	} = input;
	let ProgressState {
		progress_text,
		loading,
		throbber_state,
	} = progress;

	query_input.render(frame, area);

	// Placeholder text if input is empty
	if query_input.text().is_empty()
		&& let Some(placeholder_text) = placeholder
	{
		render_placeholder(frame, area, placeholder_text, theme);
	}

	if loading {
		render_progress(frame, area, progress_text, throbber_state, theme);
	}
}

fn render_placeholder(frame: &mut ratatui::Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	let dimmed_style = theme.empty_style();
	let available_width = area.width as usize;
	let display_text: String = text.chars().take(available_width).collect();
	let buffer = frame.buffer_mut();
	buffer.set_line(
		area.left(),
		area.top(),
		&Line::from(Span::styled(display_text, dimmed_style)),
		area.width,
	);
}

fn render_progress(
	frame: &mut ratatui::Frame,
	area: Rect,
	progress_text: &str,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 || progress_text.is_empty() {
		return;
	}

	let muted_style = theme.empty_style();
	let spinner = Throbber::default()
		.style(muted_style)
		.throbber_style(muted_style);
	let mut line = Line::default();
	line.spans.push(spinner.to_symbol_span(throbber_state));
	line.spans.push(Span::styled(progress_text.to_string(), muted_style));

	let line_width = line.width() as u16;
	if line_width == 0 {
		return;
	}

	// Right-align the indicator, but never overlap the typed query.
	let buffer = frame.buffer_mut();
	let mut start_x = if line_width >= area.width {
		area.left()
	} else {
		area.right().saturating_sub(line_width)
	};

	let input_row = area.top();
	let mut last_char_x: Option<u16> = None;
	for x in area.left()..area.right() {
		if let Some(cell) = buffer.cell((x, input_row))
			&& !cell.symbol().trim().is_empty()
		{
			last_char_x = Some(x);
		}
	}

	if let Some(last_x) = last_char_x {
		let min_start = last_x.saturating_add(3);
		if min_start > start_x {
			start_x = min_start;
		}
	}

	if start_x >= area.right() {
		return;
	}

	let available = area.right().saturating_sub(start_x);
	buffer.set_line(start_x, input_row, &line, available);
}
