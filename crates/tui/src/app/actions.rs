use anyhow::Result;
use fzpick_core::PickOutcome;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;

impl App {
	/// Process a keyboard event and return an outcome if the interaction
	/// ends. Confirming with an empty displayed list is a no-op rather than
	/// an out-of-range access.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<PickOutcome>> {
		match key.code {
			KeyCode::Esc => return Ok(Some(self.cancelled())),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Ok(Some(self.cancelled()));
			}
			KeyCode::Enter => {
				if let Some(choice) = self.selection.selected() {
					let choice = choice.to_string();
					return Ok(Some(self.accepted(choice)));
				}
			}
			KeyCode::Up => {
				if self.selection.move_up() {
					self.dirty = true;
				}
			}
			KeyCode::Down => {
				if self.selection.move_down() {
					self.dirty = true;
				}
			}
			KeyCode::Backspace => {
				self.selection.pop_char();
				self.dirty = true;
			}
			KeyCode::Char(c)
				if !key
					.modifiers
					.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
			{
				if self.selection.push_char(c) {
					self.dirty = true;
				}
			}
			_ => {}
		}
		Ok(None)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn app(items: &[&str], query: &str) -> App {
		App::new(items.iter().map(ToString::to_string).collect(), query)
	}

	fn press(app: &mut App, code: KeyCode) -> Option<PickOutcome> {
		app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
			.expect("key dispatch never fails")
	}

	#[test]
	fn escape_cancels() {
		let mut app = app(&["one", "two"], "");
		let outcome = press(&mut app, KeyCode::Esc).expect("terminal outcome");
		assert!(!outcome.accepted);
		assert_eq!(outcome.into_selection(), None);
	}

	#[test]
	fn ctrl_c_cancels() {
		let mut app = app(&["one", "two"], "");
		let outcome = app
			.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
			.unwrap()
			.expect("terminal outcome");
		assert!(!outcome.accepted);
		assert_eq!(app.selection().query(), "");
	}

	#[test]
	fn enter_accepts_the_row_under_the_cursor() {
		let mut app = app(&["cat", "car", "dog"], "ca");
		press(&mut app, KeyCode::Up);
		let outcome = press(&mut app, KeyCode::Enter).expect("terminal outcome");
		assert!(outcome.accepted);
		assert_eq!(outcome.selection.as_deref(), Some("car"));
		assert_eq!(outcome.query, "ca");
	}

	#[test]
	fn enter_on_an_empty_list_is_ignored() {
		let mut empty = app(&[], "");
		assert!(press(&mut empty, KeyCode::Enter).is_none());

		let mut filtered_out = app(&["one", "two"], "zzzz");
		assert!(press(&mut filtered_out, KeyCode::Enter).is_none());
	}

	#[test]
	fn navigation_marks_dirty_only_when_the_cursor_moves() {
		let mut app = app(&["cat", "car"], "ca");
		app.dirty = false;
		press(&mut app, KeyCode::Down);
		assert!(!app.dirty);
		press(&mut app, KeyCode::Up);
		assert!(app.dirty);
		app.dirty = false;
		press(&mut app, KeyCode::Up);
		assert!(!app.dirty);
	}

	#[test]
	fn typing_appends_and_redraws() {
		let mut app = app(&["cat", "car"], "");
		app.dirty = false;
		press(&mut app, KeyCode::Char('c'));
		assert_eq!(app.selection().query(), "c");
		assert!(app.dirty);
	}

	#[test]
	fn unpermitted_characters_are_ignored() {
		let mut app = app(&["cat"], "");
		app.dirty = false;
		press(&mut app, KeyCode::Char('1'));
		assert_eq!(app.selection().query(), "");
		assert!(!app.dirty);
	}

	#[test]
	fn ctrl_modified_characters_do_not_reach_the_query() {
		let mut app = app(&["cat"], "");
		app.dirty = false;
		let outcome = app
			.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL))
			.unwrap();
		assert!(outcome.is_none());
		assert_eq!(app.selection().query(), "");
		assert!(!app.dirty);
	}

	#[test]
	fn backspace_erases_and_redraws() {
		let mut app = app(&["cat"], "ca");
		app.dirty = false;
		press(&mut app, KeyCode::Backspace);
		assert_eq!(app.selection().query(), "c");
		assert!(app.dirty);
	}
}
