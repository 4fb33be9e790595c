//! Drawing of a recorded popup frame.

use std::num::NonZeroUsize;

use frizbee::{Config, match_indices};
use hoverpick_popup::{Grid, KeyboardTarget};
use hoverpick_popup::filter::config_for_query;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear};
use unicode_width::UnicodeWidthStr;

use crate::surface::{HeaderRecord, Layout, RowRecord, TuiSurface};
use crate::theme::Theme;

/// Rows shown at once before the list scrolls.
pub const VISIBLE_ROWS: usize = 10;

const ACTIVE_MARKER: &str = "▶ ";
const INACTIVE_MARKER: &str = "  ";
const MARKER_WIDTH: usize = 2;
const PROMPT: &str = "> ";
const CELL_GAP: usize = 1;

impl TuiSurface {
	/// Draw the popup recorded this frame and remember where everything went
	/// for the next frame's hit testing.
	pub fn render(&mut self, frame: &mut Frame<'_>, theme: &Theme) {
		self.layout = Layout::default();
		let Some(window) = self.frame.window.clone() else {
			return;
		};
		let area = self.area().intersection(frame.area());
		if area.width < 3 || area.height < 3 {
			return;
		}

		let grid = NonZeroUsize::new(window.columns).map_or_else(Grid::single_column, Grid::new);
		let columns = grid.columns();
		let cell_width = self
			.frame
			.rows
			.iter()
			.map(|row| row.label.width())
			.max()
			.unwrap_or(0)
			+ MARKER_WIDTH;
		let rows_width = cell_width * columns + CELL_GAP * (columns - 1);
		let search_width = self.frame.search.as_ref().map_or(0, |search| {
			PROMPT.width() + search.text.width().max(search.hint.width())
		});
		let header_width = match &self.frame.header {
			Some(HeaderRecord::Text(text)) => text.width(),
			_ => 0,
		};
		let title_width = if window.decorated && !window.title.is_empty() {
			window.title.width() + 2
		} else {
			0
		};
		let inner_width = rows_width
			.max(search_width)
			.max(header_width)
			.max(title_width);

		let lines = grid.rows_for(self.frame.rows.len());
		let chrome = usize::from(self.frame.search.is_some()) + usize::from(self.frame.header.is_some());
		let width = to_u16(inner_width + 2)
			.max(window.min_width)
			.min(area.width);
		let height = to_u16(lines.min(VISIBLE_ROWS) + chrome + 2).min(area.height);

		let (origin_x, origin_y) = self.origin().unwrap_or((area.x, area.y));
		let rect = Rect::new(
			origin_x.clamp(area.x, area.right() - width),
			origin_y.clamp(area.y, area.bottom() - height),
			width,
			height,
		);

		let mut block = Block::bordered().border_style(theme.border);
		if window.decorated {
			block = block.border_type(BorderType::Rounded);
			if !window.title.is_empty() {
				block = block.title(Line::styled(
					format!(" {} ", window.title),
					theme.title_style(),
				));
			}
		}
		if let Some(label) = self.frame.list_label.as_deref().filter(|label| !label.is_empty()) {
			block = block.title_bottom(Line::styled(label.to_string(), theme.empty));
		}
		let inner = block.inner(rect);
		frame.render_widget(Clear, rect);
		frame.render_widget(block, rect);
		self.layout.window = Some(rect);

		let mut y = inner.y;
		if let Some(search) = &self.frame.search
			&& y < inner.bottom()
		{
			let line = if search.text.is_empty() {
				Line::from(vec![
					Span::styled(PROMPT, theme.prompt),
					Span::styled(search.hint.as_str(), theme.empty),
				])
			} else {
				Line::from(vec![
					Span::styled(PROMPT, theme.prompt),
					Span::raw(search.text.as_str()),
				])
			};
			frame.render_widget(line, Rect::new(inner.x, y, inner.width, 1));
			if self.frame.keyboard == Some(KeyboardTarget::SearchBar) {
				let cursor = inner.x + to_u16(PROMPT.width() + search.text.width());
				frame.set_cursor_position(Position::new(
					cursor.min(inner.right().saturating_sub(1)),
					y,
				));
			}
			y += 1;
		}
		if let Some(header) = &self.frame.header
			&& y < inner.bottom()
		{
			if let HeaderRecord::Text(text) = header {
				frame.render_widget(
					Line::styled(text.as_str(), theme.header),
					Rect::new(inner.x, y, inner.width, 1),
				);
			}
			y += 1;
		}

		let capacity = usize::from(inner.bottom().saturating_sub(y));
		if let Some(row) = self.frame.scroll_to {
			self.scroll = grid.row_of(row).saturating_sub(capacity / 2);
		}
		self.scroll = self.scroll.min(lines.saturating_sub(capacity));

		let query = self
			.frame
			.search
			.as_ref()
			.map(|search| search.text.trim())
			.filter(|query| !query.is_empty());
		let config = query.map(|query| config_for_query(query, self.frame.rows.len()));

		for line in 0..capacity.min(lines - self.scroll) {
			let row_y = y + to_u16(line);
			for col in 0..columns {
				let index = grid.key_of(self.scroll + line, col);
				let Some(row) = self.frame.rows.get(index) else {
					break;
				};
				let x = inner.x.saturating_add(to_u16(col * (cell_width + CELL_GAP)));
				if x >= inner.right() {
					break;
				}
				let cell_width = if columns == 1 {
					inner.width
				} else {
					to_u16(cell_width).min(inner.right() - x)
				};
				let cell = Rect::new(x, row_y, cell_width, 1);
				let matches = query
					.zip(config.as_ref())
					.and_then(|(query, config)| highlight_for(query, config, &row.label));
				frame.render_widget(row_line(row, matches.as_deref(), theme), cell);
				self.layout.rows.push((index, cell));
			}
		}
	}
}

fn highlight_for(needle: &str, config: &Config, text: &str) -> Option<Vec<usize>> {
	if text.is_empty() {
		return None;
	}
	match_indices(needle, text, config).map(|m| m.indices)
}

fn row_line<'a>(row: &'a RowRecord, matches: Option<&[usize]>, theme: &Theme) -> Line<'a> {
	let mut base = if row.active {
		theme.row_highlight
	} else {
		Style::new()
	};
	if row.hovered {
		base = base.add_modifier(Modifier::BOLD);
	}
	let marker = if row.active {
		ACTIVE_MARKER
	} else {
		INACTIVE_MARKER
	};

	let mut spans = vec![Span::styled(marker, base)];
	spans.extend(highlight_spans(&row.label, matches, base, theme.highlight));
	Line::from(spans).style(base)
}

/// Split `text` into runs styled by whether their bytes are in `indices`.
fn highlight_spans<'a>(
	text: &'a str,
	indices: Option<&[usize]>,
	base: Style,
	highlight: Style,
) -> Vec<Span<'a>> {
	let Some(indices) = indices.filter(|indices| !indices.is_empty()) else {
		return vec![Span::styled(text, base)];
	};
	let run_style = |matched: bool| {
		if matched {
			base.patch(highlight)
		} else {
			base
		}
	};

	let mut spans = Vec::new();
	let mut start = 0;
	let mut matched = false;
	for (offset, _) in text.char_indices() {
		let is_match = indices.contains(&offset);
		if offset > 0 && is_match != matched {
			spans.push(Span::styled(&text[start..offset], run_style(matched)));
			start = offset;
		}
		matched = is_match;
	}
	if start < text.len() {
		spans.push(Span::styled(&text[start..], run_style(matched)));
	}
	spans
}

fn to_u16(value: usize) -> u16 {
	u16::try_from(value).unwrap_or(u16::MAX)
}
