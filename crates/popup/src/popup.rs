//! The hover-popup entry point.

use std::num::NonZeroUsize;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::PopupError;
use crate::filter;
use crate::flags::PopupFlags;
use crate::focus::FocusTracker;
use crate::grid::Grid;
use crate::navigation::{NavigationPlan, Topology};
use crate::session::{PopupSession, SessionToken};
use crate::surface::{KeyboardTarget, PopupSurface, SearchBarSpec, WindowSpec};

#[cfg(test)]
mod tests;

/// Characters the search buffer accepts.
pub const SEARCH_BAR_LIMIT: usize = 32;
pub const DEFAULT_COLUMNS: usize = 12;
pub const DEFAULT_MIN_WIDTH: f32 = 400.0;
pub const DEFAULT_SEARCH_LABEL: &str = "##search";
pub const DEFAULT_SEARCH_HINT: &str = "Search...";

/// What the delegate saw while drawing one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowReport {
	/// The user picked this row directly (click, hover-select).
	pub selected: bool,
	pub focused: bool,
}

/// Host callbacks for one popup: filtering, header, row drawing and selection.
pub trait PopupDelegate<T, S: PopupSurface + ?Sized> {
	/// Narrow `items` down to the ones matching `query`.
	///
	/// Only called when the search bar is enabled and `query` is non-empty.
	fn filter(&mut self, items: Vec<T>, _query: &str) -> Vec<T> {
		items
	}

	fn header(&mut self, _surface: &mut S, _item: &T) {}

	/// Draw `item`; `active` marks the currently selected row.
	fn draw_row(&mut self, surface: &mut S, item: &T, active: bool) -> RowReport;

	fn on_select(&mut self, item: &T);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloseReason {
	FocusLost,
	Escape,
}

/// Outcome of one [`HoverPopup::show`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopupFrame {
	/// Token to present next frame; `None` once the popup closed.
	pub token: Option<SessionToken>,
	/// Key of the row selected this frame.
	pub selected: Option<usize>,
	pub closed: Option<CloseReason>,
}

impl PopupFrame {
	#[must_use]
	pub fn is_open(&self) -> bool {
		self.closed.is_none()
	}
}

/// Options of a hover popup. Cheap to keep around and reuse every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverPopup {
	flags: PopupFlags,
	window_label: String,
	list_label: String,
	search_label: String,
	search_hint: String,
	min_width: f32,
	columns: NonZeroUsize,
	search_limit: usize,
}

impl Default for HoverPopup {
	fn default() -> Self {
		Self::new(PopupFlags::empty())
	}
}

impl HoverPopup {
	#[must_use]
	pub fn new(flags: PopupFlags) -> Self {
		Self {
			flags,
			window_label: String::new(),
			list_label: String::new(),
			search_label: DEFAULT_SEARCH_LABEL.to_string(),
			search_hint: DEFAULT_SEARCH_HINT.to_string(),
			min_width: DEFAULT_MIN_WIDTH,
			columns: NonZeroUsize::new(DEFAULT_COLUMNS).unwrap_or(NonZeroUsize::MIN),
			search_limit: SEARCH_BAR_LIMIT,
		}
	}

	#[must_use]
	pub fn with_window_label(mut self, label: impl Into<String>) -> Self {
		self.window_label = label.into();
		self
	}

	#[must_use]
	pub fn with_list_label(mut self, label: impl Into<String>) -> Self {
		self.list_label = label.into();
		self
	}

	#[must_use]
	pub fn with_search_label(mut self, label: impl Into<String>) -> Self {
		self.search_label = label.into();
		self
	}

	#[must_use]
	pub fn with_search_hint(mut self, hint: impl Into<String>) -> Self {
		self.search_hint = hint.into();
		self
	}

	#[must_use]
	pub fn with_min_width(mut self, min_width: f32) -> Self {
		self.min_width = min_width;
		self
	}

	pub fn with_columns(mut self, columns: usize) -> Result<Self, PopupError> {
		self.columns = NonZeroUsize::new(columns).ok_or(PopupError::ZeroColumns)?;
		Ok(self)
	}

	pub fn with_search_limit(mut self, limit: usize) -> Result<Self, PopupError> {
		if limit == 0 {
			return Err(PopupError::ZeroSearchLimit);
		}
		self.search_limit = limit;
		Ok(self)
	}

	#[must_use]
	pub fn flags(&self) -> PopupFlags {
		self.flags
	}

	#[must_use]
	pub fn window_label(&self) -> &str {
		&self.window_label
	}

	#[must_use]
	pub fn min_width(&self) -> f32 {
		self.min_width
	}

	#[must_use]
	pub fn columns(&self) -> usize {
		self.columns.get()
	}

	#[must_use]
	pub fn search_limit(&self) -> usize {
		self.search_limit
	}

	fn topology(&self) -> Topology {
		if self.flags.topology_is_grid() {
			Topology::Grid(Grid::new(self.columns))
		} else {
			Topology::List
		}
	}

	/// Draw the popup for this frame.
	///
	/// `token` is the value returned in [`PopupFrame::token`] by the previous
	/// call, or `None` to start a new popup. `on_close` is kept only when this
	/// call opens the popup and runs once when that popup closes or is
	/// replaced by another invocation.
	#[allow(clippy::too_many_arguments)]
	pub fn show<T, S, D, I, F>(
		&self,
		session: &mut PopupSession<T>,
		surface: &mut S,
		token: Option<SessionToken>,
		items: I,
		search: &mut String,
		delegate: &mut D,
		on_close: F,
	) -> PopupFrame
	where
		T: Clone,
		S: PopupSurface + ?Sized,
		D: PopupDelegate<T, S> + ?Sized,
		I: IntoIterator<Item = T>,
		F: FnOnce() + 'static,
	{
		let admission = session.admit(token, on_close);
		session.set_columns(self.columns);

		let input = surface.input();
		let (anchor, is_new) = session.anchor_at(input.pointer);
		let grabbable = self.flags.contains(PopupFlags::GRABBABLE);
		let topology = self.topology();
		let window = WindowSpec {
			title: &self.window_label,
			position: (!grabbable || is_new).then_some(anchor),
			decorated: grabbable,
			min_width: self.min_width,
			columns: match topology {
				Topology::Grid(grid) => grid.columns(),
				Topology::List => 1,
			},
		};

		let mut frame = PopupFrame {
			token: Some(admission.token),
			..PopupFrame::default()
		};
		if !surface.begin_window(&window) {
			surface.end_window();
			return frame;
		}

		let mut focus = FocusTracker::new();
		focus.note(surface.window_focused());

		let has_search_bar = self.flags.contains(PopupFlags::SEARCH_BAR);
		let committed = has_search_bar
			&& surface.search_bar(
				&SearchBarSpec {
					label: &self.search_label,
					hint: &self.search_hint,
					max_len: self.search_limit,
				},
				search,
			);
		session.set_search_committed(committed);

		if surface.window_tree_focused() && !surface.any_item_active() && !input.clicked {
			surface.request_keyboard_focus(if has_search_bar {
				KeyboardTarget::SearchBar
			} else {
				KeyboardTarget::FirstRow
			});
		}

		let in_list = self.flags.contains(PopupFlags::SELECTOR_LIST);
		if in_list {
			surface.begin_list(&self.list_label);
		}

		if self.flags.contains(PopupFlags::HEADER) {
			match session.header_item() {
				Some(item) => delegate.header(surface, item),
				None => surface.blank_header(),
			}
		}

		let items = filter::apply(
			self.flags,
			items.into_iter().collect(),
			search.as_str(),
			|items, query| delegate.filter(items, query),
		);
		// Grid selections are left pointing past a shrunk result set.
		if topology == Topology::List {
			session.clamp_selection(items.len());
		}

		let previous = session.selected_key();
		let plan = NavigationPlan::new(topology, previous, input.pressed, committed);

		for (key, item) in items.iter().enumerate() {
			let report = delegate.draw_row(surface, item, key == session.selected_key());
			focus.note(surface.item_focused());
			focus.note(report.focused);

			if frame.selected.is_none() && (report.selected || plan.accepts(key)) {
				if plan.moves_to(key) {
					trace!("hover popup selection moved from {previous} to {key}");
					surface.scroll_to_current_row();
				}
				delegate.on_select(item);
				session.select(key, item.clone());
				frame.selected = Some(key);
			}
			focus.note(surface.item_focused());
		}

		if in_list {
			surface.end_list();
		}
		focus.note(surface.item_active());
		session.set_focus(focus.verdict());

		let closing = if input.escape_pressed() {
			Some(CloseReason::Escape)
		} else if !self.flags.contains(PopupFlags::STAY_ON_BLUR) && !focus.verdict() {
			Some(CloseReason::FocusLost)
		} else {
			None
		};

		surface.end_window();

		if let Some(reason) = closing {
			session.close();
			frame.token = None;
			frame.closed = Some(reason);
		}

		frame
	}
}
