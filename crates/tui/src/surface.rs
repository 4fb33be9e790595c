//! [`PopupSurface`] implementation for a ratatui terminal.
//!
//! The surface records what the popup draws during a frame and turns it into
//! widgets in [`TuiSurface::render`]. Hover and click hit testing runs against
//! the layout of the previous render, which is what the user was looking at
//! when the input arrived.

use hoverpick_popup::{
	InputSnapshot, KeyboardTarget, Point, PopupSurface, RowReport, SearchBarSpec, WindowSpec,
};
use log::trace;
use ratatui::layout::{Position, Rect};

use crate::input::{FrameInput, SearchEdit};


#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowRecord {
	pub(crate) title: String,
	pub(crate) decorated: bool,
	pub(crate) min_width: u16,
	pub(crate) columns: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchRecord {
	pub(crate) label: String,
	pub(crate) hint: String,
	pub(crate) text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HeaderRecord {
	Blank,
	Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RowRecord {
	pub(crate) label: String,
	pub(crate) active: bool,
	pub(crate) hovered: bool,
}

/// What the popup drew during the current frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct FrameRecord {
	pub(crate) window: Option<WindowRecord>,
	pub(crate) search: Option<SearchRecord>,
	pub(crate) header: Option<HeaderRecord>,
	pub(crate) list_label: Option<String>,
	pub(crate) rows: Vec<RowRecord>,
	/// Row to centre in the list viewport.
	pub(crate) scroll_to: Option<usize>,
	pub(crate) keyboard: Option<KeyboardTarget>,
}

/// Screen areas of the last render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Layout {
	pub(crate) window: Option<Rect>,
	pub(crate) rows: Vec<(usize, Rect)>,
}

#[derive(Debug, Clone, Copy, Default)]
struct ItemState {
	focused: bool,
	active: bool,
}

#[derive(Debug, Default)]
pub struct TuiSurface {
	area: Rect,
	input: FrameInput,
	origin: Option<(u16, u16)>,
	grab_offset: Option<u16>,
	blurred: bool,
	pub(crate) frame: FrameRecord,
	pub(crate) layout: Layout,
	pub(crate) scroll: usize,
	last_item: ItemState,
	any_active: bool,
}

impl TuiSurface {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Start a frame drawn into `area` with the input gathered since the last one.
	pub fn begin_frame(&mut self, area: Rect, input: FrameInput) {
		if input.snapshot.clicked {
			let pointer = cell_of(input.snapshot.pointer);
			self.blurred = self
				.layout
				.window
				.is_some_and(|window| !window.contains(position_of(pointer)));
		}
		self.area = area;
		self.input = input;
		self.frame = FrameRecord::default();
		self.last_item = ItemState::default();
		self.any_active = false;
	}

	/// Draw a selectable row labelled `label` and report how the user
	/// interacted with it.
	pub fn selectable(&mut self, label: &str, active: bool) -> RowReport {
		let index = self.frame.rows.len();
		let hovered = self.pointer_over_row(index);
		let clicked = hovered && self.input.snapshot.clicked;

		self.frame.rows.push(RowRecord {
			label: label.to_string(),
			active,
			hovered,
		});
		self.last_item = ItemState {
			focused: hovered,
			active: clicked,
		};
		self.any_active |= clicked;

		RowReport {
			selected: clicked,
			focused: hovered,
		}
	}

	/// Draw `text` in the header line.
	pub fn header_text(&mut self, text: &str) {
		self.frame.header = Some(HeaderRecord::Text(text.to_string()));
	}

	/// Screen area of the popup window as last rendered.
	#[must_use]
	pub fn window_area(&self) -> Option<Rect> {
		self.layout.window
	}

	/// Top-left cell the window is pinned to.
	#[must_use]
	pub fn origin(&self) -> Option<(u16, u16)> {
		self.origin
	}

	pub(crate) fn area(&self) -> Rect {
		self.area
	}

	fn pointer_cell(&self) -> (u16, u16) {
		cell_of(self.input.snapshot.pointer)
	}

	fn pointer_over_row(&self, index: usize) -> bool {
		let pointer = position_of(self.pointer_cell());
		self.layout
			.rows
			.iter()
			.any(|(row, rect)| *row == index && rect.contains(pointer))
	}

	/// Move a decorated window while its top border is dragged.
	fn drag_window(&mut self) {
		let (x, y) = self.pointer_cell();
		if self.input.snapshot.clicked
			&& let Some(window) = self.layout.window
			&& y == window.y
			&& (window.x..window.right()).contains(&x)
		{
			self.grab_offset = Some(x - window.x);
		}

		if let (Some(offset), Some(to)) = (self.grab_offset, self.input.dragged_to) {
			let (to_x, to_y) = cell_of(to);
			self.origin = Some((to_x.saturating_sub(offset), to_y));
			trace!("popup window dragged to {to_x},{to_y}");
		}

		if self.input.released {
			self.grab_offset = None;
		}
	}
}

impl PopupSurface for TuiSurface {
	fn input(&self) -> InputSnapshot {
		self.input.snapshot
	}

	fn begin_window(&mut self, window: &WindowSpec<'_>) -> bool {
		if let Some(position) = window.position {
			self.origin = Some(cell_of(position));
		}
		if window.decorated {
			self.drag_window();
		}
		self.frame.window = Some(WindowRecord {
			title: visible_label(window.title).to_string(),
			decorated: window.decorated,
			min_width: cells(window.min_width),
			columns: window.columns.max(1),
		});
		self.area.width > 2 && self.area.height > 2
	}

	fn end_window(&mut self) {}

	fn window_focused(&self) -> bool {
		!self.blurred
	}

	fn search_bar(&mut self, bar: &SearchBarSpec<'_>, text: &mut String) -> bool {
		for edit in &self.input.edits {
			match edit {
				SearchEdit::Insert(ch) => {
					if text.chars().count() < bar.max_len {
						text.push(*ch);
					}
				}
				SearchEdit::Backspace => {
					text.pop();
				}
				SearchEdit::Clear => text.clear(),
			}
		}
		self.frame.search = Some(SearchRecord {
			label: visible_label(bar.label).to_string(),
			hint: bar.hint.to_string(),
			text: text.clone(),
		});
		self.last_item = ItemState::default();
		self.input.submitted
	}

	fn begin_list(&mut self, label: &str) {
		self.frame.list_label = Some(visible_label(label).to_string());
	}

	fn end_list(&mut self) {
		self.last_item = ItemState {
			focused: false,
			active: self.any_active,
		};
	}

	fn blank_header(&mut self) {
		self.frame.header = Some(HeaderRecord::Blank);
	}

	fn item_focused(&self) -> bool {
		self.last_item.focused
	}

	fn item_active(&self) -> bool {
		self.last_item.active
	}

	fn any_item_active(&self) -> bool {
		self.any_active
	}

	fn scroll_to_current_row(&mut self) {
		self.frame.scroll_to = self.frame.rows.len().checked_sub(1);
	}

	fn request_keyboard_focus(&mut self, target: KeyboardTarget) {
		self.frame.keyboard = Some(target);
	}
}

/// The part of an identifier shown to the user; text after `##` is hidden.
fn visible_label(label: &str) -> &str {
	label.split_once("##").map_or(label, |(visible, _)| visible)
}

fn cells(value: f32) -> u16 {
	// Float to int casts saturate, negatives and NaN become 0.
	value as u16
}

fn cell_of(point: Point) -> (u16, u16) {
	(cells(point.x), cells(point.y))
}

fn position_of((x, y): (u16, u16)) -> Position {
	Position::new(x, y)
}
