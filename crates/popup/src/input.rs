//! Per-frame input snapshot consumed by the navigation engine.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
	/// Keys that transitioned to pressed during the current frame.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct NavKeys: u8 {
		const UP = 1;
		const DOWN = 1 << 1;
		const LEFT = 1 << 2;
		const RIGHT = 1 << 3;
		const PAGE_UP = 1 << 4;
		const PAGE_DOWN = 1 << 5;
		const ESCAPE = 1 << 6;
	}
}

/// A position in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
	pub x: f32,
	pub y: f32,
}

impl Point {
	#[must_use]
	pub const fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}
}

/// Device state captured once, before any row of the frame is processed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
	pub pressed: NavKeys,
	pub pointer: Point,
	/// The primary pointer button went down this frame.
	pub clicked: bool,
}

impl InputSnapshot {
	#[must_use]
	pub fn at(pointer: Point) -> Self {
		Self {
			pointer,
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_pressed(mut self, keys: NavKeys) -> Self {
		self.pressed |= keys;
		self
	}

	#[must_use]
	pub fn escape_pressed(&self) -> bool {
		self.pressed.contains(NavKeys::ESCAPE)
	}
}
