//! Visual styling for picker rows and chrome.
//!
//! Themes carry the color scheme applied to the candidate list; additional
//! styling knobs can be layered alongside the theme over time.

mod theme;

pub use theme::{Theme, default_theme};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the widget.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
