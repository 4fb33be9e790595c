//! Keyboard navigation over list and grid topologies.
//!
//! The engine never touches rows directly. From the previous selection and
//! the frame's pressed keys it works out which flat keys a directional move
//! would land on; the row pass then accepts the first rendered row whose key
//! is one of those targets. A target nobody renders (past the end, or the
//! missing tail of a jagged grid row) is simply never matched.

use crate::grid::Grid;
use crate::input::NavKeys;

/// Rows skipped by a single page-up/page-down event.
pub const FAST_SCROLL_JUMP: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
	List,
	Grid(Grid),
}

/// Selection targets for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationPlan {
	targets: [Option<usize>; 6],
	submitted: bool,
}

impl NavigationPlan {
	#[must_use]
	pub fn new(topology: Topology, previous: usize, pressed: NavKeys, submitted: bool) -> Self {
		let pressed_key = |key: NavKeys| pressed.contains(key);
		let targets = match topology {
			Topology::List => [
				pressed_key(NavKeys::UP).then(|| previous.checked_sub(1)).flatten(),
				pressed_key(NavKeys::DOWN).then(|| previous.checked_add(1)).flatten(),
				pressed_key(NavKeys::PAGE_UP)
					.then(|| previous.checked_sub(FAST_SCROLL_JUMP))
					.flatten(),
				pressed_key(NavKeys::PAGE_DOWN)
					.then(|| previous.checked_add(FAST_SCROLL_JUMP))
					.flatten(),
				None,
				None,
			],
			Topology::Grid(grid) => {
				let row = grid.row_of(previous);
				let col = grid.col_of(previous);
				let same_col = |row: Option<usize>| row.map(|row| grid.key_of(row, col));
				let same_row = |col: Option<usize>| {
					col.filter(|col| *col < grid.columns())
						.map(|col| grid.key_of(row, col))
				};
				[
					pressed_key(NavKeys::UP).then(|| same_col(row.checked_sub(1))).flatten(),
					pressed_key(NavKeys::DOWN).then(|| same_col(row.checked_add(1))).flatten(),
					pressed_key(NavKeys::PAGE_UP)
						.then(|| same_col(row.checked_sub(FAST_SCROLL_JUMP)))
						.flatten(),
					pressed_key(NavKeys::PAGE_DOWN)
						.then(|| same_col(row.checked_add(FAST_SCROLL_JUMP)))
						.flatten(),
					pressed_key(NavKeys::LEFT).then(|| same_row(col.checked_sub(1))).flatten(),
					pressed_key(NavKeys::RIGHT).then(|| same_row(col.checked_add(1))).flatten(),
				]
			}
		};

		Self { targets, submitted }
	}

	/// `key` is where a directional move lands this frame.
	#[must_use]
	pub fn moves_to(&self, key: usize) -> bool {
		self.targets.contains(&Some(key))
	}

	/// `key` may become the selection: a directional target, or any row at
	/// all when the search text was submitted.
	#[must_use]
	pub fn accepts(&self, key: usize) -> bool {
		self.submitted || self.moves_to(key)
	}

	#[must_use]
	pub fn is_idle(&self) -> bool {
		!self.submitted && self.targets.iter().all(Option::is_none)
	}
}
