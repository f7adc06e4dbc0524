use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;

impl App<'_> {
	/// Process a keyboard event. Returns `true` when the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Esc => return true,
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return true;
			}
			KeyCode::Enter => {
				self.submit_search();
			}
			// Manual pagination trigger.
			KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.request_next_page();
			}
			// Toggle the passive pagination trigger.
			KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.auto_load = !self.auto_load;
			}
			KeyCode::Up => {
				self.results.move_up();
			}
			KeyCode::Down => {
				self.results.move_down();
				self.maybe_auto_fetch();
			}
			KeyCode::PageUp => {
				self.results.move_page(false);
			}
			KeyCode::PageDown => {
				self.results.move_page(true);
				self.maybe_auto_fetch();
			}
			KeyCode::Home => {
				if self.results.len > 0 {
					self.results.table_state.select(Some(0));
				}
			}
			KeyCode::End => {
				if self.results.len > 0 {
					self.results.table_state.select(Some(self.results.len - 1));
				}
				self.maybe_auto_fetch();
			}
			_ => {
				self.query_input.input(key);
			}
		}
		false
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		self.results.update_hover(mouse.column, mouse.row);

		match mouse.kind {
			MouseEventKind::ScrollUp if self.results.hovered => {
				for _ in 0..3 {
					self.results.move_up();
				}
			}
			MouseEventKind::ScrollDown if self.results.hovered => {
				for _ in 0..3 {
					self.results.move_down();
				}
				self.maybe_auto_fetch();
			}
			MouseEventKind::Down(MouseButton::Left) if self.results.hovered => {
				self.results.select_at(mouse.column, mouse.row);
			}
			_ => {}
		}
	}
}
