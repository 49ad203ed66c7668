//! The interaction loop: poll, update, redraw, until a terminal decision.

use std::time::Duration;

use anyhow::Result;
use fzpick_core::PickOutcome;
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::App;
use crate::builder::Picker;
use crate::input::EventSource;

/// How long one poll waits for a key before the loop comes back around.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run an interactive picker over `items` and return the outcome.
pub fn run(items: Vec<String>, initial_query: &str) -> Result<PickOutcome> {
	Picker::new(items).initial_query(initial_query).pick()
}

impl App {
	/// Pump the interaction loop until the user (or auto-accept) decides.
	///
	/// One control path polls input, updates state, and redraws in
	/// sequence; the bounded poll is the only suspension point, and a
	/// timed-out poll is a normal "no event" iteration. Redraws happen only
	/// while `dirty`. Auto-accept is probed before the first poll and after
	/// every dispatched key, so a query that already narrows to one value
	/// ends the interaction without any key press.
	pub fn run<B: Backend>(
		&mut self,
		terminal: &mut Terminal<B>,
		events: &mut dyn EventSource,
	) -> Result<PickOutcome> {
		if let Some(choice) = self.selection.sole_match() {
			let choice = choice.to_string();
			return Ok(self.accepted(choice));
		}

		loop {
			if self.dirty {
				terminal.draw(|frame| self.draw(frame))?;
				self.dirty = false;
			}

			let Some(key) = events.poll_key(POLL_INTERVAL)? else {
				continue;
			};
			if let Some(outcome) = self.handle_key(key)? {
				return Ok(outcome);
			}
			if let Some(choice) = self.selection.sole_match() {
				let choice = choice.to_string();
				return Ok(self.accepted(choice));
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::backend::TestBackend;
	use ratatui::crossterm::event::{KeyCode, KeyEvent};

	use super::*;
	use crate::input::{InertEvents, ScriptedEvents};

	fn items(values: &[&str]) -> Vec<String> {
		values.iter().map(ToString::to_string).collect()
	}

	fn terminal() -> Terminal<TestBackend> {
		Terminal::new(TestBackend::new(40, 12)).expect("terminal")
	}

	/// Event source that fails the test when the loop polls it at all.
	struct NoPolling;

	impl EventSource for NoPolling {
		fn poll_key(&mut self, _timeout: Duration) -> Result<Option<KeyEvent>> {
			panic!("the interaction should have ended before any poll");
		}
	}

	/// Event source that times out a few times before handing over keys.
	struct SlowEvents {
		timeouts: usize,
		inner: ScriptedEvents,
	}

	impl EventSource for SlowEvents {
		fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
			if self.timeouts > 0 {
				self.timeouts -= 1;
				return Ok(None);
			}
			self.inner.poll_key(timeout)
		}
	}

	#[test]
	fn seeded_query_auto_accepts_without_polling() {
		let mut app = App::new(items(&["validator", "field", "config"]), "validators");
		let outcome = app.run(&mut terminal(), &mut NoPolling).unwrap();
		assert!(outcome.accepted);
		assert_eq!(outcome.selection.as_deref(), Some("validator"));
	}

	#[test]
	fn duplicate_best_matches_auto_accept() {
		let mut app = App::new(items(&["validator", "validator", "field", "config"]), "validators");
		let outcome = app.run(&mut terminal(), &mut NoPolling).unwrap();
		assert_eq!(outcome.into_selection().as_deref(), Some("validator"));
	}

	#[test]
	fn typing_can_trigger_auto_accept() {
		let mut app = App::new(items(&["one", "two", "three"]), "");
		let mut events = ScriptedEvents::new([KeyCode::Char('t')]);
		let outcome = app.run(&mut terminal(), &mut events).unwrap();
		assert!(outcome.accepted);
		assert_eq!(outcome.selection.as_deref(), Some("two"));
		assert_eq!(outcome.query, "t");
	}

	#[test]
	fn navigate_then_confirm_returns_the_cursor_row() {
		let mut app = App::new(items(&["cat", "car", "dog"]), "");
		let mut events = ScriptedEvents::new([
			KeyCode::Char('c'),
			KeyCode::Char('a'),
			KeyCode::Up,
			KeyCode::Enter,
		]);
		let outcome = app.run(&mut terminal(), &mut events).unwrap();
		assert!(outcome.accepted);
		assert_eq!(outcome.selection.as_deref(), Some("car"));
	}

	#[test]
	fn escape_cancels_at_any_point() {
		let mut app = App::new(items(&["one", "two", "three"]), "");
		let mut events = ScriptedEvents::new([KeyCode::Char('o'), KeyCode::Esc]);
		let outcome = app.run(&mut terminal(), &mut events).unwrap();
		assert!(!outcome.accepted);
		assert_eq!(outcome.into_selection(), None);
	}

	#[test]
	fn ctrl_c_cancels_like_escape() {
		use ratatui::crossterm::event::KeyModifiers;

		let mut app = App::new(items(&["one", "two", "three"]), "");
		let mut events = ScriptedEvents::new([KeyCode::Char('o')])
			.then(KeyCode::Char('c'), KeyModifiers::CONTROL);
		let outcome = app.run(&mut terminal(), &mut events).unwrap();
		assert!(!outcome.accepted);
		assert_eq!(outcome.query, "o");
	}

	#[test]
	fn timeouts_keep_the_loop_running() {
		let mut app = App::new(items(&["one", "two", "three"]), "");
		let mut events = SlowEvents {
			timeouts: 3,
			inner: ScriptedEvents::new([KeyCode::Esc]),
		};
		let outcome = app.run(&mut terminal(), &mut events).unwrap();
		assert!(!outcome.accepted);
	}

	#[test]
	fn empty_candidate_list_terminates_via_inert_cancel() {
		let mut app = App::new(Vec::new(), "");
		let outcome = app.run(&mut terminal(), &mut InertEvents).unwrap();
		assert!(!outcome.accepted);
		assert_eq!(outcome.into_selection(), None);
	}

	#[test]
	fn erasing_can_re_narrow_to_an_auto_accept() {
		// Eleven characters push the best match just under the cutoff, so
		// nothing is displayed and nothing auto-accepts; one erase brings
		// it back as the only displayed entry.
		let mut app = App::new(items(&["validator", "config"]), "valqqqqqqqq");
		let mut events = ScriptedEvents::new([KeyCode::Backspace]);
		let outcome = app.run(&mut terminal(), &mut events).unwrap();
		assert!(outcome.accepted);
		assert_eq!(outcome.selection.as_deref(), Some("validator"));
		assert_eq!(outcome.query, "valqqqqqqq");
	}
}
