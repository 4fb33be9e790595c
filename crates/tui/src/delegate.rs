use hoverpick_popup::{PopupDelegate, RowReport, fuzzy_filter};
use log::debug;

use crate::surface::TuiSurface;

/// Prefix of the header line naming the last selection.
pub const SELECTED_PREFIX: &str = "Selected: ";

/// Draws string-like items as selectable rows and remembers the last pick.
#[derive(Debug, Clone)]
pub struct LabelDelegate<T> {
	selected: Option<T>,
}

impl<T> Default for LabelDelegate<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> LabelDelegate<T> {
	#[must_use]
	pub fn new() -> Self {
		Self { selected: None }
	}

	/// The item most recently passed to `on_select`.
	#[must_use]
	pub fn selected(&self) -> Option<&T> {
		self.selected.as_ref()
	}
}

impl<T> PopupDelegate<T, TuiSurface> for LabelDelegate<T>
where
	T: AsRef<str> + Clone,
{
	fn filter(&mut self, items: Vec<T>, query: &str) -> Vec<T> {
		fuzzy_filter(items, query, |item| item.as_ref())
	}

	fn header(&mut self, surface: &mut TuiSurface, item: &T) {
		surface.header_text(&format!("{SELECTED_PREFIX}{}", item.as_ref()));
	}

	fn draw_row(&mut self, surface: &mut TuiSurface, item: &T, active: bool) -> RowReport {
		surface.selectable(item.as_ref(), active)
	}

	fn on_select(&mut self, item: &T) {
		debug!("selected {}", item.as_ref());
		self.selected = Some(item.clone());
	}
}
