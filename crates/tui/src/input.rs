//! Key-event sources feeding the interaction loop.
//!
//! The loop only ever asks one question: "a key press within this timeout,
//! or nothing?". [`EventSource`] captures that capability so the real
//! terminal, an inert stand-in, and scripted test input are interchangeable.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Supplier of key presses for the interaction loop.
pub trait EventSource {
	/// Wait up to `timeout` for the next key press. Returning `None` on
	/// timeout is a normal outcome; the loop simply comes back around.
	fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>>;
}

/// Real terminal input via crossterm. Only key presses are surfaced; key
/// repeats/releases and non-key events count as "no event".
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
	fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
		if !event::poll(timeout)? {
			return Ok(None);
		}
		match event::read()? {
			Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
			_ => Ok(None),
		}
	}
}

/// Stand-in for non-interactive environments. Yields Escape so a headless
/// interaction cancels cleanly instead of spinning forever.
pub struct InertEvents;

impl EventSource for InertEvents {
	fn poll_key(&mut self, _timeout: Duration) -> Result<Option<KeyEvent>> {
		Ok(Some(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)))
	}
}

/// Deterministic key sequence for tests and demos. Once the script is
/// exhausted it yields Escape, so a scripted loop always terminates.
pub struct ScriptedEvents {
	keys: VecDeque<KeyEvent>,
}

impl ScriptedEvents {
	/// Build a script from plain key codes (no modifiers).
	#[must_use]
	pub fn new(codes: impl IntoIterator<Item = KeyCode>) -> Self {
		Self {
			keys: codes
				.into_iter()
				.map(|code| KeyEvent::new(code, KeyModifiers::NONE))
				.collect(),
		}
	}

	/// Append a key event with explicit modifiers.
	#[must_use]
	pub fn then(mut self, code: KeyCode, modifiers: KeyModifiers) -> Self {
		self.keys.push_back(KeyEvent::new(code, modifiers));
		self
	}
}

impl EventSource for ScriptedEvents {
	fn poll_key(&mut self, _timeout: Duration) -> Result<Option<KeyEvent>> {
		Ok(Some(self.keys.pop_front().unwrap_or_else(|| {
			KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
		})))
	}
}
