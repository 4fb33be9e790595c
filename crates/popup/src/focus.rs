/// Frame-local OR of every focus signal seen while the popup is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusTracker {
	focused: bool,
}

impl FocusTracker {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn reset(&mut self) {
		self.focused = false;
	}

	pub fn note(&mut self, signal: bool) {
		self.focused |= signal;
	}

	#[must_use]
	pub fn verdict(&self) -> bool {
		self.focused
	}
}
