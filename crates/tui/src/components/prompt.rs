use ratatui::text::{Line, Span};

use crate::config::UiConfig;
use crate::style::Theme;

/// The `displayed/total` counter shown above the prompt.
#[must_use]
pub fn status_line(displayed: usize, total: usize, theme: &Theme) -> Line<'static> {
	Line::from(Span::styled(format!("{displayed}/{total}"), theme.status))
}

/// The bottom prompt row: prefix, live query, block caret.
#[must_use]
pub fn prompt_line<'a>(query: &'a str, ui: &'a UiConfig, theme: &Theme) -> Line<'a> {
	Line::from(vec![
		Span::styled(ui.prompt_prefix.as_str(), theme.prompt),
		Span::raw(query),
		Span::raw(ui.caret.to_string()),
	])
}
