//! Builder wiring candidates, query, and styling into a runnable picker.

use std::io::IsTerminal;

use anyhow::Result;
use fzpick_core::PickOutcome;
use ratatui::Terminal;
use ratatui::backend::{Backend, TestBackend};

use crate::App;
use crate::config::UiConfig;
use crate::input::{CrosstermEvents, EventSource, InertEvents};
use crate::style::{StyleConfig, Theme};

/// Builder for one picker interaction.
///
/// ```no_run
/// use fzpick_tui::Picker;
///
/// let outcome = Picker::new(["one", "two", "three"])
///     .initial_query("tw")
///     .pick()
///     .expect("terminal session");
/// ```
pub struct Picker {
	items: Vec<String>,
	initial_query: String,
	ui: UiConfig,
	style: StyleConfig,
}

impl Picker {
	/// Start a builder over the candidate list. Duplicates and empty
	/// strings are kept as distinct entries.
	#[must_use]
	pub fn new<I, S>(items: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			items: items.into_iter().map(Into::into).collect(),
			initial_query: String::new(),
			ui: UiConfig::default(),
			style: StyleConfig::default(),
		}
	}

	/// Seed the query before the first draw. A seed that already narrows
	/// the list to one value auto-accepts without any key press.
	#[must_use]
	pub fn initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	/// Override the color theme.
	#[must_use]
	pub fn theme(mut self, theme: Theme) -> Self {
		self.style = StyleConfig::with_theme(theme);
		self
	}

	/// Override the chrome glyphs.
	#[must_use]
	pub fn ui(mut self, ui: UiConfig) -> Self {
		self.ui = ui;
		self
	}

	fn into_app(self) -> App {
		let mut app = App::new(self.items, self.initial_query);
		app.set_ui(self.ui);
		app.set_style(self.style);
		app
	}

	/// Run interactively on the process terminal.
	///
	/// The raw-mode alternate-screen session is entered once and restored
	/// exactly once on every exit path, auto-accept included; the panic
	/// hook installed by [`ratatui::init`] restores it even on abrupt
	/// termination. When stdout is not a terminal this degrades to
	/// [`Picker::pick_inert`] instead of failing.
	pub fn pick(self) -> Result<PickOutcome> {
		if !std::io::stdout().is_terminal() {
			return self.pick_inert();
		}
		let mut app = self.into_app();
		let mut terminal = ratatui::init();
		let result = app.run(&mut terminal, &mut CrosstermEvents);
		ratatui::restore();
		result
	}

	/// Run against an in-memory surface with input that cancels
	/// immediately. Nothing touches the process terminal; the outcome is
	/// the seeded auto-accept when one exists, a cancel otherwise.
	pub fn pick_inert(self) -> Result<PickOutcome> {
		let mut terminal = Terminal::new(TestBackend::new(80, 24))?;
		self.pick_with(&mut terminal, &mut InertEvents)
	}

	/// Run against caller-supplied terminal and input capabilities.
	pub fn pick_with<B: Backend>(
		self,
		terminal: &mut Terminal<B>,
		events: &mut dyn EventSource,
	) -> Result<PickOutcome> {
		let mut app = self.into_app();
		app.run(terminal, events)
	}
}
