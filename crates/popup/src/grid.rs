//! Flat-key arithmetic for grid layouts.
//!
//! Keys are zero-based positions in the filtered sequence. A grid with `n`
//! columns lays them out row-major, so key `k` sits at row `k / n`, column
//! `k % n`.

use std::num::NonZeroUsize;

/// Row-major layout of flat keys over a fixed number of columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
	columns: NonZeroUsize,
}

impl Grid {
	#[must_use]
	pub const fn new(columns: NonZeroUsize) -> Self {
		Self { columns }
	}

	/// A single-column grid, which is how list topology degenerates.
	#[must_use]
	pub const fn single_column() -> Self {
		Self {
			columns: NonZeroUsize::MIN,
		}
	}

	#[must_use]
	pub const fn columns(self) -> usize {
		self.columns.get()
	}

	#[must_use]
	pub const fn row_of(self, key: usize) -> usize {
		key / self.columns.get()
	}

	#[must_use]
	pub const fn col_of(self, key: usize) -> usize {
		key % self.columns.get()
	}

	/// Inverse of [`row_of`](Self::row_of)/[`col_of`](Self::col_of).
	///
	/// `col` is not checked against the column count; callers must keep it
	/// below [`columns`](Self::columns) or the key lands on the next row.
	#[must_use]
	pub const fn key_of(self, row: usize, col: usize) -> usize {
		row * self.columns.get() + col
	}

	/// Number of rows needed to hold `count` keys.
	#[must_use]
	pub const fn rows_for(self, count: usize) -> usize {
		count.div_ceil(self.columns.get())
	}
}

impl Default for Grid {
	fn default() -> Self {
		Self::single_column()
	}
}
