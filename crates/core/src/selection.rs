//! Query editing and cursor state over the ranked candidate list.
//!
//! [`Selection`] owns the candidates, the live query, and the ranked list,
//! and keeps the cursor valid across every recomputation. The cursor indexes
//! the *displayed* subset and counts from the bottom-most row upward, so
//! cursor 0 is always the best displayed match.

use crate::matcher::{self, RankedEntry, SCORE_CUTOFF};

/// Characters the query accepts: ASCII letters, hyphen, underscore, period,
/// and space. All other printable input is ignored.
#[must_use]
pub fn permitted_char(c: char) -> bool {
	c.is_ascii_alphabetic() || matches!(c, '-' | '_' | '.' | ' ')
}

/// Selection state for one picker interaction.
pub struct Selection {
	candidates: Vec<String>,
	query: String,
	cursor: usize,
	ranked: Vec<RankedEntry>,
	displayed: Vec<RankedEntry>,
}

impl Selection {
	/// Build the state for `candidates`, seeding the query with
	/// `initial_query` and ranking immediately.
	#[must_use]
	pub fn new(candidates: Vec<String>, initial_query: impl Into<String>) -> Self {
		let mut selection = Self {
			candidates,
			query: initial_query.into(),
			cursor: 0,
			ranked: Vec::new(),
			displayed: Vec::new(),
		};
		selection.recompute();
		selection
	}

	/// Rebuild the ranked list and displayed subset for the current query.
	/// The cursor resets to the bottom-most row because the displayed set
	/// changes shape with the query.
	fn recompute(&mut self) {
		self.ranked = matcher::rank(&self.query, &self.candidates);
		let show_all = self.query.is_empty();
		self.displayed = self
			.ranked
			.iter()
			.copied()
			.filter(|entry| show_all || entry.score >= SCORE_CUTOFF)
			.collect();
		self.cursor = 0;
	}

	/// Current query text.
	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Candidate text for a ranked entry.
	#[must_use]
	pub fn candidate(&self, entry: RankedEntry) -> &str {
		&self.candidates[entry.index]
	}

	/// Total number of candidates passed in, duplicates included.
	#[must_use]
	pub fn total(&self) -> usize {
		self.candidates.len()
	}

	/// Entries eligible for display, best match first.
	#[must_use]
	pub fn displayed(&self) -> &[RankedEntry] {
		&self.displayed
	}

	/// Number of displayed entries.
	#[must_use]
	pub fn displayed_len(&self) -> usize {
		self.displayed.len()
	}

	/// Cursor offset into the displayed subset (0 = bottom-most row).
	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Append `c` to the query when it is in the permitted set. Returns
	/// whether the query changed (and was re-ranked).
	pub fn push_char(&mut self, c: char) -> bool {
		if !permitted_char(c) {
			return false;
		}
		self.query.push(c);
		self.recompute();
		true
	}

	/// Erase the last query character. Erasing an already-empty query keeps
	/// the query empty but still resets the cursor and re-ranks.
	pub fn pop_char(&mut self) -> bool {
		let removed = self.query.pop().is_some();
		self.recompute();
		removed
	}

	/// Move the cursor one row up the screen. No wraparound: at the topmost
	/// displayed row this is a no-op. Returns whether the cursor moved.
	pub fn move_up(&mut self) -> bool {
		if self.cursor + 1 < self.displayed.len() {
			self.cursor += 1;
			true
		} else {
			false
		}
	}

	/// Move the cursor one row down the screen, stopping at the bottom row.
	/// Returns whether the cursor moved.
	pub fn move_down(&mut self) -> bool {
		if self.cursor > 0 {
			self.cursor -= 1;
			true
		} else {
			false
		}
	}

	/// Candidate text under the cursor, or `None` when nothing is displayed.
	#[must_use]
	pub fn selected(&self) -> Option<&str> {
		self.displayed
			.get(self.cursor)
			.map(|entry| self.candidate(*entry))
	}

	/// The unambiguous answer, when there is one: `Some` iff the displayed
	/// subset is non-empty and every displayed entry carries the same
	/// candidate text. Value-identical duplicates collapse to one answer.
	#[must_use]
	pub fn sole_match(&self) -> Option<&str> {
		let (first, rest) = self.displayed.split_first()?;
		let value = self.candidate(*first);
		rest.iter()
			.all(|entry| self.candidate(*entry) == value)
			.then_some(value)
	}
}
