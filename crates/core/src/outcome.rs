//! Terminal outcome of a picker interaction.

/// How an interaction ended, and with what.
#[derive(Clone, Debug)]
pub struct PickOutcome {
	/// Whether the user accepted a value (confirm key or auto-accept).
	pub accepted: bool,
	/// The chosen candidate, if any.
	pub selection: Option<String>,
	/// The query text at the moment the interaction ended.
	pub query: String,
}

impl PickOutcome {
	/// The chosen candidate, or `None` when the interaction was cancelled.
	#[must_use]
	pub fn into_selection(self) -> Option<String> {
		if self.accepted { self.selection } else { None }
	}
}
