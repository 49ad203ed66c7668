use fzpick_core::{PickOutcome, Selection};

use crate::config::UiConfig;
use crate::style::StyleConfig;

/// Aggregate state for one picker interaction.
///
/// The `App` owns the selection state for its whole lifetime; nothing else
/// observes or mutates it, so the interaction loop needs no synchronization.
pub struct App {
	/// Query, ranked list, and cursor.
	pub(crate) selection: Selection,
	pub(crate) ui: UiConfig,
	/// Current style and theme configuration.
	pub(crate) style: StyleConfig,
	/// Whether the state changed since the last draw. Starts set so the
	/// first iteration paints.
	pub(crate) dirty: bool,
}

impl App {
	/// Construct an [`App`] over `candidates` with the query pre-seeded.
	#[must_use]
	pub fn new(candidates: Vec<String>, initial_query: impl Into<String>) -> Self {
		Self {
			selection: Selection::new(candidates, initial_query),
			ui: UiConfig::default(),
			style: StyleConfig::default(),
			dirty: true,
		}
	}

	/// Swap in a different glyph configuration.
	pub fn set_ui(&mut self, ui: UiConfig) {
		self.ui = ui;
	}

	/// Swap in a different style configuration.
	pub fn set_style(&mut self, style: StyleConfig) {
		self.style = style;
	}

	/// Read access to the selection state.
	#[must_use]
	pub fn selection(&self) -> &Selection {
		&self.selection
	}

	pub(crate) fn accepted(&self, choice: String) -> PickOutcome {
		PickOutcome {
			accepted: true,
			selection: Some(choice),
			query: self.selection.query().to_string(),
		}
	}

	pub(crate) fn cancelled(&self) -> PickOutcome {
		PickOutcome {
			accepted: false,
			selection: None,
			query: self.selection.query().to_string(),
		}
	}
}
