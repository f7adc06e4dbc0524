//! Selection and scroll state for the results table.

use ratatui::layout::Rect;
use ratatui::widgets::{ScrollbarState, TableState};

use crate::components::point_in_rect;
use crate::components::tables::TABLE_HEADER_ROWS;

/// Precomputed scrolling metrics for the current viewport/content.
#[derive(Clone, Copy, Debug)]
pub struct ScrollMetrics {
	pub content_length: usize,
	pub max_offset: usize,
	pub needs_scrollbar: bool,
	pub viewport_rows: usize,
}

/// Aggregate state for the results table and its interactions.
pub struct ResultsState {
	/// Selection state for the results table.
	pub table_state: TableState,
	/// Scrollbar state for the results table.
	pub scrollbar_state: ScrollbarState,
	/// Last known results area on screen.
	pub area: Option<Rect>,
	/// Whether the mouse is currently hovering the results table.
	pub hovered: bool,
	/// Number of loaded records backing the table.
	pub len: usize,
	/// Cached scroll metrics based on the last rendered viewport.
	pub scroll_metrics: Option<ScrollMetrics>,
}

impl Default for ResultsState {
	fn default() -> Self {
		let mut table_state = TableState::default();
		table_state.select(Some(0));
		Self {
			table_state,
			scrollbar_state: ScrollbarState::default(),
			area: None,
			hovered: false,
			len: 0,
			scroll_metrics: None,
		}
	}
}

impl ResultsState {
	/// Record the number of loaded records and repair the selection.
	pub fn set_len(&mut self, len: usize) {
		self.len = len;
		self.ensure_selection();
	}

	/// Ensure the row selection remains valid for the loaded list.
	pub fn ensure_selection(&mut self) {
		if self.len == 0 {
			self.table_state.select(None);
		} else if self.table_state.selected().is_none() {
			self.table_state.select(Some(0));
		} else if let Some(selected) = self.table_state.selected()
			&& selected >= self.len
		{
			self.table_state.select(Some(self.len - 1));
		}
	}

	/// Move the selection up one row.
	pub fn move_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	/// Move the selection down one row, stopping at the last loaded record.
	pub fn move_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.len
		{
			self.table_state.select(Some(selected + 1));
		}
	}

	/// Move the selection a viewport's worth of rows in either direction.
	pub fn move_page(&mut self, down: bool) {
		let step = self
			.scroll_metrics
			.map(|metrics| metrics.viewport_rows.max(1))
			.unwrap_or(10);
		let Some(selected) = self.table_state.selected() else {
			return;
		};
		let target = if down {
			selected.saturating_add(step).min(self.len.saturating_sub(1))
		} else {
			selected.saturating_sub(step)
		};
		if self.len > 0 {
			self.table_state.select(Some(target));
		}
	}

	/// Whether the selection sits on the last loaded row. Downward
	/// navigation that lands here is the terminal analogue of scrolling to
	/// the viewport boundary.
	#[must_use]
	pub fn at_last_row(&self) -> bool {
		self.len > 0 && self.table_state.selected() == Some(self.len - 1)
	}

	/// Update hover state based on mouse position.
	pub fn update_hover(&mut self, column: u16, row: u16) {
		self.hovered = self
			.area
			.is_some_and(|area| point_in_rect(column, row, area));
	}

	/// Attempt to select a result at the given mouse position.
	/// Returns true if a selection was made.
	pub fn select_at(&mut self, _column: u16, row: u16) -> bool {
		let Some(area) = self.area else {
			return false;
		};

		// Table sits inside a rounded border block; subtract borders.
		let inner_y = area.y.saturating_add(1);
		let inner_height = area.height.saturating_sub(2);
		if inner_height == 0 {
			return false;
		}

		// Header row + separator precede the body rows.
		let body_start_y = inner_y.saturating_add(TABLE_HEADER_ROWS as u16);
		if row < body_start_y {
			return false;
		}

		let body_end_y = inner_y.saturating_add(inner_height);
		if row >= body_end_y {
			return false;
		}

		let row_in_view = row.saturating_sub(body_start_y) as usize;
		let visible_index = self.table_state.offset().saturating_add(row_in_view);

		if visible_index >= self.len {
			return false;
		}

		self.table_state.select(Some(visible_index));
		true
	}

	/// Compute scroll/offset metrics for the results viewport.
	#[must_use]
	pub fn compute_metrics(&self, viewport_height: usize) -> Option<ScrollMetrics> {
		if self.len == 0 || viewport_height == 0 {
			return None;
		}

		let available_rows = viewport_height.saturating_sub(TABLE_HEADER_ROWS);
		let needs_scrollbar = available_rows > 0 && self.len > available_rows;
		let max_offset = self.len.saturating_sub(available_rows);

		Some(ScrollMetrics {
			content_length: self.len,
			max_offset,
			needs_scrollbar,
			viewport_rows: available_rows,
		})
	}

	/// Update scrollbar state to match current table content and scroll
	/// position.
	pub fn update_scrollbar(&mut self, viewport_height: usize) {
		let Some(metrics) = self.compute_metrics(viewport_height) else {
			self.scrollbar_state = ScrollbarState::default();
			self.scroll_metrics = None;
			return;
		};

		self.scroll_metrics = Some(metrics);
		if !metrics.needs_scrollbar {
			*self.table_state.offset_mut() = 0;
			self.scrollbar_state = ScrollbarState::default();
			return;
		}

		let offset = self.table_state.offset().min(metrics.max_offset);
		*self.table_state.offset_mut() = offset;

		let position = if metrics.max_offset > 0 {
			// Map offset to scrollbar position.
			((offset as f64 / metrics.max_offset as f64) * (metrics.content_length - 1) as f64)
				.round() as usize
		} else {
			0
		};

		self.scrollbar_state = self
			.scrollbar_state
			.content_length(metrics.content_length)
			.viewport_content_length(metrics.viewport_rows)
			.position(position);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn selection_is_repaired_when_the_list_shrinks() {
		let mut results = ResultsState::default();
		results.set_len(5);
		results.table_state.select(Some(4));

		results.set_len(2);
		assert_eq!(results.table_state.selected(), Some(1));

		results.set_len(0);
		assert_eq!(results.table_state.selected(), None);

		results.set_len(3);
		assert_eq!(results.table_state.selected(), Some(0));
	}

	#[test]
	fn movement_is_bounded_by_loaded_records() {
		let mut results = ResultsState::default();
		results.set_len(2);

		results.move_down();
		results.move_down();
		assert_eq!(results.table_state.selected(), Some(1), "stops at the end");
		assert!(results.at_last_row());

		results.move_up();
		results.move_up();
		assert_eq!(results.table_state.selected(), Some(0));
		assert!(!results.at_last_row());
	}

	#[test]
	fn hover_tracks_the_rendered_results_area() {
		let mut results = ResultsState::default();
		results.update_hover(3, 3);
		assert!(!results.hovered, "nothing rendered yet");

		results.area = Some(Rect::new(2, 3, 4, 2));
		results.update_hover(3, 3);
		assert!(results.hovered);
		results.update_hover(6, 3);
		assert!(!results.hovered, "one past the right edge");
	}

	#[test]
	fn metrics_flag_overflow_only_when_rows_exceed_the_viewport() {
		let mut results = ResultsState::default();
		results.set_len(4);

		// Viewport of 6 leaves 4 body rows after the header block.
		let metrics = results.compute_metrics(6).unwrap();
		assert!(!metrics.needs_scrollbar);

		results.set_len(10);
		let metrics = results.compute_metrics(6).unwrap();
		assert!(metrics.needs_scrollbar);
		assert_eq!(metrics.max_offset, 6);
	}
}
