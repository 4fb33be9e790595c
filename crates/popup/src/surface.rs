//! Rendering primitives the popup draws through.
//!
//! A surface is the immediate-mode toolkit seen from the popup: it opens a
//! window, owns the list box and search field widgets, answers focus queries
//! about the widget drawn last, and hands out one input snapshot per frame.

use crate::input::{InputSnapshot, Point};

/// Placement and decoration of the popup window for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec<'a> {
	pub title: &'a str,
	/// Pin the window here this frame; `None` leaves it where the surface has it.
	pub position: Option<Point>,
	/// Title bar and borders; grabbable windows need them to be dragged.
	pub decorated: bool,
	pub min_width: f32,
	/// Cells per row when the rows form a grid, 1 otherwise.
	pub columns: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBarSpec<'a> {
	pub label: &'a str,
	pub hint: &'a str,
	/// Maximum number of characters the buffer may hold.
	pub max_len: usize,
}

/// Widget that should own keyboard focus while the popup is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardTarget {
	SearchBar,
	FirstRow,
}

pub trait PopupSurface {
	/// Input state for this frame. Must not change between calls in a frame.
	fn input(&self) -> InputSnapshot;

	/// Open the popup window. Returns `false` when its contents are hidden;
	/// [`end_window`](Self::end_window) is called either way.
	fn begin_window(&mut self, window: &WindowSpec<'_>) -> bool;

	fn end_window(&mut self);

	/// The window is focused or hovered.
	fn window_focused(&self) -> bool;

	/// The window or one of its children holds focus.
	fn window_tree_focused(&self) -> bool {
		self.window_focused()
	}

	/// Draw the search field editing `text`. Returns `true` on the frame the
	/// text is submitted.
	fn search_bar(&mut self, bar: &SearchBarSpec<'_>, text: &mut String) -> bool;

	fn begin_list(&mut self, label: &str);

	fn end_list(&mut self);

	/// Placeholder drawn where the header goes before anything is selected.
	fn blank_header(&mut self);

	/// The last drawn widget has focus.
	fn item_focused(&self) -> bool;

	/// The last drawn widget is being interacted with.
	fn item_active(&self) -> bool;

	fn any_item_active(&self) -> bool {
		false
	}

	/// Scroll so the row drawn last sits in the vertical centre.
	fn scroll_to_current_row(&mut self);

	fn request_keyboard_focus(&mut self, _target: KeyboardTarget) {}
}
