use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::style::Theme;

/// Build the rendered line for one displayed candidate.
///
/// The selected row carries the marker and a full-background treatment;
/// other rows get a blank gutter of the same width. With a non-empty query,
/// characters that appear in the query (case-sensitive membership) are
/// highlighted per character; an empty query renders the text uniformly.
#[must_use]
pub fn candidate_line<'a>(
	text: &'a str,
	query: &str,
	selected: bool,
	marker: &'a str,
	max_width: u16,
	theme: &Theme,
) -> Line<'a> {
	let gutter_width = marker.width();
	let mut spans: Vec<Span<'a>> = Vec::new();
	if selected {
		spans.push(Span::styled(marker, theme.marker));
	} else {
		spans.push(Span::raw(" ".repeat(gutter_width)));
	}

	let text = truncate_to_width(text, usize::from(max_width).saturating_sub(gutter_width));
	if query.is_empty() {
		spans.push(Span::raw(text));
	} else {
		for (matched, slice) in match_runs(text, query) {
			let style = match (selected, matched) {
				(true, true) => theme.match_selected,
				(true, false) => theme.dim_selected,
				(false, true) => theme.match_plain,
				(false, false) => theme.text,
			};
			spans.push(Span::styled(slice, style));
		}
	}

	let line = Line::from(spans);
	if selected {
		line.style(theme.selected_row)
	} else {
		line
	}
}

/// Split `text` into maximal runs of characters that are all inside, or all
/// outside, the query's character set.
fn match_runs<'a>(text: &'a str, query: &str) -> Vec<(bool, &'a str)> {
	let mut runs = Vec::new();
	let mut start = 0;
	let mut current: Option<bool> = None;
	for (idx, c) in text.char_indices() {
		let matched = query.contains(c);
		match current {
			Some(state) if state == matched => {}
			Some(state) => {
				runs.push((state, &text[start..idx]));
				start = idx;
				current = Some(matched);
			}
			None => current = Some(matched),
		}
	}
	if let Some(state) = current {
		runs.push((state, &text[start..]));
	}
	runs
}

/// Longest prefix of `text` that fits in `max` display columns.
fn truncate_to_width(text: &str, max: usize) -> &str {
	let mut used = 0;
	for (idx, c) in text.char_indices() {
		let width = c.width().unwrap_or(0);
		if used + width > max {
			return &text[..idx];
		}
		used += width;
	}
	text
}
