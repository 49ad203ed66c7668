use ratatui::style::{Color, Style};

const SELECTED_BG: Color = Color::Rgb(77, 77, 77);
const BRIGHT: Color = Color::Rgb(255, 250, 250);
const DIM: Color = Color::Rgb(153, 153, 153);

/// Styles for the individual pieces of the widget.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
	/// Marker in front of the selected row.
	pub marker: Style,
	/// Background applied across the whole selected row.
	pub selected_row: Style,
	/// Query characters inside the selected row.
	pub match_selected: Style,
	/// Remaining characters inside the selected row.
	pub dim_selected: Style,
	/// Query characters inside unselected rows.
	pub match_plain: Style,
	/// Remaining characters inside unselected rows.
	pub text: Style,
	/// The `displayed/total` status row.
	pub status: Style,
	/// The prompt prefix on the bottom row.
	pub prompt: Style,
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// The built-in palette: red marker and a grey band for the selected row,
/// with matched query characters brightened on both row kinds.
#[must_use]
pub fn default_theme() -> Theme {
	Theme {
		marker: Style::new().fg(Color::Red),
		selected_row: Style::new().bg(SELECTED_BG),
		match_selected: Style::new().fg(BRIGHT),
		dim_selected: Style::new().fg(DIM),
		match_plain: Style::new().fg(DIM),
		text: Style::new(),
		status: Style::new().fg(Color::DarkGray),
		prompt: Style::new().fg(Color::Red),
	}
}
