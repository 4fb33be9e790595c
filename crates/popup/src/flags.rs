use bitflags::bitflags;

bitflags! {
	/// Optional behaviours of a hover popup, chosen per invocation.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct PopupFlags: u8 {
		/// Wrap the rows in a scrollable list box.
		const SELECTOR_LIST = 1;
		/// Show a search bar and run the filter over its text.
		const SEARCH_BAR = 1 << 1;
		/// Let the user move the window; only the opening frame pins it to the anchor.
		const GRABBABLE = 1 << 2;
		/// Navigate rows as a grid instead of a flat list.
		const GRID = 1 << 3;
		/// Render a header for the most recently selected item.
		const HEADER = 1 << 4;
		/// Keep the popup open when it loses focus.
		const STAY_ON_BLUR = 1 << 5;
	}
}

impl PopupFlags {
	#[must_use]
	pub fn topology_is_grid(self) -> bool {
		self.contains(Self::GRID)
	}
}
