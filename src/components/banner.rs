use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::search::SearchState;
use crate::style::Theme;

/// End-of-results notice shown once the final page has been loaded.
pub const END_OF_RESULTS: &str = "You've reached the end of the results";

/// Render the status row: the inline error banner when a request failed,
/// otherwise a summary of the loaded result set.
pub fn render_status(frame: &mut Frame, area: Rect, search: &SearchState, theme: &Theme) {
	if area.height == 0 {
		return;
	}

	// Errors take precedence while no fetch is repainting them.
	if let Some(message) = &search.error
		&& !search.loading
	{
		let banner = Paragraph::new(Line::from(Span::styled(message.clone(), theme.error)))
			.alignment(Alignment::Center);
		frame.render_widget(banner, area);
		return;
	}

	if search.total_results > 0 && !search.loading {
		let mut spans = vec![
			Span::raw("Found "),
			Span::styled(search.total_results.to_string(), theme.highlight),
			Span::raw(" results"),
		];
		if !search.query.is_empty() {
			spans.push(Span::raw(" for \""));
			spans.push(Span::styled(search.query.clone(), theme.highlight));
			spans.push(Span::raw("\""));
		}
		let summary = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
		frame.render_widget(summary, area);
	}
}

/// Render the footer row: key hints, the auto-load indicator, and the
/// end-of-results notice.
pub fn render_footer(
	frame: &mut Frame,
	area: Rect,
	search: &SearchState,
	auto_load: bool,
	theme: &Theme,
) {
	if area.height == 0 {
		return;
	}

	let muted = theme.empty_style();
	let mut spans = vec![Span::styled("enter search", muted)];

	if search.has_more && !search.loading && !search.movies.is_empty() {
		spans.push(Span::styled(" · ", muted));
		spans.push(Span::styled("ctrl+n load more", theme.prompt));
	}

	spans.push(Span::styled(" · ctrl+t auto-load: ", muted));
	spans.push(Span::styled(
		if auto_load { "on" } else { "off" },
		theme.highlight,
	));
	spans.push(Span::styled(" · esc quit", muted));

	if search.exhausted() {
		spans.push(Span::styled(" · ", muted));
		spans.push(Span::styled(END_OF_RESULTS, muted));
	}

	let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
	frame.render_widget(footer, area);
}
