use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::widgets::Paragraph;

use crate::components::tables::{TABLE_HEADER_ROWS, TableSpec};
use crate::components::{
	InputContext, ProgressState, build_movie_rows, render_footer, render_input, render_status,
	render_table,
};

use super::App;

/// Placeholder shown in the empty query input.
const QUERY_PLACEHOLDER: &str = "Search for movies...";
/// Progress label shown next to the throbber while a fetch is in flight.
const LOADING_LABEL: &str = "Loading movies...";

/// Fixed-width columns after the title: year, type, poster, IMDb id.
const FIXED_COLUMNS: u16 = 6 + 8 + 10 + 12;

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(3),
				Constraint::Length(1),
			])
			.split(area);

		self.query_input.set_style(self.style.theme.prompt);
		let input_ctx = InputContext {
			query_input: &self.query_input,
			placeholder: Some(QUERY_PLACEHOLDER),
			area: layout[0],
			theme: &self.style.theme,
		};
		let progress_state = ProgressState {
			progress_text: LOADING_LABEL,
			loading: self.search.loading,
			throbber_state: &self.throbber_state,
		};
		render_input(frame, input_ctx, progress_state);

		render_status(frame, layout[1], &self.search, &self.style.theme);

		let results_area = layout[2];
		self.results.area = Some(results_area);
		self.render_results(frame, results_area);

		if self.results.len == 0 {
			self.render_empty_notice(frame, results_area);
		}

		render_footer(
			frame,
			layout[3],
			&self.search,
			self.auto_load,
			&self.style.theme,
		);
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let inner_height = area.height.saturating_sub(2) as usize;
		self.results.update_scrollbar(inner_height);

		let headers = vec![
			"Title".to_string(),
			"Year".to_string(),
			"Type".to_string(),
			"Poster".to_string(),
			"IMDb ID".to_string(),
		];
		let widths = vec![
			Constraint::Min(20),
			Constraint::Length(6),
			Constraint::Length(8),
			Constraint::Length(10),
			Constraint::Length(12),
		];

		// Borders, highlight symbol, column gaps, and a possible scrollbar
		// all eat into the title column.
		let chrome: u16 = 2 + 2 + 4 + 1;
		let title_width = area.width.saturating_sub(FIXED_COLUMNS + chrome);

		let rows = build_movie_rows(&self.search.movies, Some(title_width), &self.style.theme);

		let spec = TableSpec {
			headers,
			widths,
			rows,
			title: None,
		};

		render_table(
			frame,
			area,
			&mut self.results.table_state,
			&mut self.results.scrollbar_state,
			spec,
			&self.style.theme,
		);
	}

	fn render_empty_notice(&self, frame: &mut Frame, area: Rect) {
		// Account for border (top + bottom) and the header block.
		let chrome_height = 2 + TABLE_HEADER_ROWS as u16;
		if area.height <= chrome_height {
			return;
		}

		let message_area = Rect {
			x: area.x + 1,
			y: area.y + 1 + TABLE_HEADER_ROWS as u16,
			width: area.width.saturating_sub(2),
			height: area.height - chrome_height,
		};

		let empty = Paragraph::new("No results")
			.style(self.style.theme.empty_style())
			.alignment(Alignment::Center);
		frame.render_widget(empty, message_area);
	}
}
