//! `fzpick` — interactive fuzzy selection for the terminal.
//!
//! The root module primarily re-exports types from the member crates so
//! that embedders can configure the picker without digging through the
//! module hierarchy. Most callers only need [`find`]:
//!
//! ```no_run
//! let found = fzpick::find(["one", "two", "three"], "tw").expect("terminal session");
//! assert_eq!(found.as_deref(), Some("two"));
//! ```

use anyhow::Result;

pub use fzpick_core::{
	PickOutcome, RankedEntry, SCORE_CUTOFF, SCORE_MAX, Selection, permitted_char, rank, similarity,
};
pub use fzpick_tui::{
	App, CrosstermEvents, EventSource, InertEvents, POLL_INTERVAL, Picker, ScriptedEvents,
	StyleConfig, Theme, UiConfig, default_theme,
};

/// Run one fuzzy-selection interaction over `candidates` and return the
/// chosen string, or `None` when the user cancels.
///
/// Accepts any sequence of strings, including an empty sequence, duplicate
/// entries, and empty strings. `initial_query` seeds the filter before the
/// first draw; a seed that already narrows the list to a single value
/// returns it immediately, without any key press. In a non-interactive
/// environment the interaction degrades to an inert surface and returns
/// `None` instead of failing.
pub fn find<I, S>(candidates: I, initial_query: &str) -> Result<Option<String>>
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	let outcome = Picker::new(candidates).initial_query(initial_query).pick()?;
	Ok(outcome.into_selection())
}
