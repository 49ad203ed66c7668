use ratatui::Frame;
use ratatui::layout::Rect;

use super::App;
use crate::components::{candidate_line, prompt_line, status_line};

impl App {
	/// Paint the whole surface from the current state.
	///
	/// Displayed entries stack bottom-up: entry 0 (the best match) sits on
	/// the row directly above the status and prompt rows, higher entries
	/// climb toward the top of the surface until the space runs out. The
	/// draw depends only on state, so repeated calls repaint identically.
	pub(crate) fn draw(&self, frame: &mut Frame) {
		let area = frame.area();
		if area.width == 0 || area.height == 0 {
			return;
		}
		let selection = &self.selection;
		let theme = &self.style.theme;

		frame.render_widget(
			prompt_line(selection.query(), &self.ui, theme),
			row_rect(area, area.height - 1),
		);
		if area.height >= 2 {
			frame.render_widget(
				status_line(selection.displayed_len(), selection.total(), theme),
				row_rect(area, area.height - 2),
			);
		}

		let list_rows = usize::from(area.height.saturating_sub(3));
		for (offset, entry) in selection.displayed().iter().take(list_rows).enumerate() {
			let y = area.height - 3 - offset as u16;
			let line = candidate_line(
				selection.candidate(*entry),
				selection.query(),
				offset == selection.cursor(),
				&self.ui.selection_marker,
				area.width,
				theme,
			);
			frame.render_widget(line, row_rect(area, y));
		}
	}
}

fn row_rect(area: Rect, y: u16) -> Rect {
	Rect::new(area.x, area.y + y, area.width, 1)
}
