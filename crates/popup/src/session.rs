//! Popup state that survives between frames.
//!
//! The host owns exactly one [`PopupSession`] and hands it to
//! [`HoverPopup::show`](crate::HoverPopup::show) every frame. Which logical
//! popup the session belongs to is tracked with a [`SessionToken`]: the token
//! is issued when a call opens the popup and must be presented on every later
//! call. Presenting anything else closes the current popup first.

use std::fmt;
use std::num::{NonZeroU64, NonZeroUsize};

use log::debug;

use crate::input::Point;

/// Opaque handle naming one logical popup invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(NonZeroU64);

impl SessionToken {
	#[must_use]
	pub fn get(self) -> u64 {
		self.0.get()
	}
}

struct ActiveInvocation {
	token: SessionToken,
	on_close: Box<dyn FnOnce()>,
}

impl fmt::Debug for ActiveInvocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ActiveInvocation")
			.field("token", &self.token)
			.finish_non_exhaustive()
	}
}

/// Result of presenting a token to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admission {
	pub token: SessionToken,
	/// The call opened a new invocation.
	pub opened: bool,
	/// A different invocation was open and got closed to make room.
	pub replaced: bool,
}

/// Selection, focus and placement of the popup across frames.
#[derive(Debug)]
pub struct PopupSession<T> {
	anchor: Option<Point>,
	columns: NonZeroUsize,
	selected_key: usize,
	has_focus: bool,
	search_committed: bool,
	header_item: Option<T>,
	active: Option<ActiveInvocation>,
	issued: u64,
}

impl<T> Default for PopupSession<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> PopupSession<T> {
	#[must_use]
	pub fn new() -> Self {
		Self {
			anchor: None,
			columns: NonZeroUsize::MIN,
			selected_key: 0,
			has_focus: false,
			search_committed: false,
			header_item: None,
			active: None,
			issued: 0,
		}
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.active.is_some()
	}

	#[must_use]
	pub fn token(&self) -> Option<SessionToken> {
		self.active.as_ref().map(|active| active.token)
	}

	/// Where the popup was opened; `None` while closed.
	#[must_use]
	pub fn anchor(&self) -> Option<Point> {
		self.anchor
	}

	#[must_use]
	pub fn columns(&self) -> NonZeroUsize {
		self.columns
	}

	#[must_use]
	pub fn selected_key(&self) -> usize {
		self.selected_key
	}

	#[must_use]
	pub fn has_focus(&self) -> bool {
		self.has_focus
	}

	#[must_use]
	pub fn search_committed(&self) -> bool {
		self.search_committed
	}

	#[must_use]
	pub fn header_item(&self) -> Option<&T> {
		self.header_item.as_ref()
	}

	/// Present `token` for this frame.
	///
	/// A matching token continues the open invocation and `on_close` is
	/// dropped unused. Anything else closes the open invocation (running its
	/// stored callback) and opens a new one that keeps `on_close`.
	pub fn admit<F>(&mut self, token: Option<SessionToken>, on_close: F) -> Admission
	where
		F: FnOnce() + 'static,
	{
		if let (Some(active), Some(token)) = (&self.active, token)
			&& active.token == token
		{
			return Admission {
				token,
				opened: false,
				replaced: false,
			};
		}

		let replaced = self.close();
		if replaced {
			debug!("hover popup replaced by a new invocation");
		}

		self.issued += 1;
		let token = SessionToken(NonZeroU64::new(self.issued).unwrap_or(NonZeroU64::MIN));
		self.active = Some(ActiveInvocation {
			token,
			on_close: Box::new(on_close),
		});
		debug!("hover popup opened with token {}", token.get());

		Admission {
			token,
			opened: true,
			replaced,
		}
	}

	/// Close the open invocation, if any, running its close callback once.
	///
	/// Returns whether a popup was open.
	pub fn close(&mut self) -> bool {
		let Some(active) = self.active.take() else {
			return false;
		};
		debug!("hover popup {} closed", active.token.get());
		self.reset();
		(active.on_close)();
		true
	}

	pub(crate) fn set_columns(&mut self, columns: NonZeroUsize) {
		self.columns = columns;
	}

	/// Anchor the popup at `pointer` unless it already has a position.
	///
	/// Returns the anchor and whether it was set by this call.
	pub(crate) fn anchor_at(&mut self, pointer: Point) -> (Point, bool) {
		match self.anchor {
			Some(anchor) => (anchor, false),
			None => {
				self.anchor = Some(pointer);
				(pointer, true)
			}
		}
	}

	/// Pull the selection back inside `0..count`.
	pub(crate) fn clamp_selection(&mut self, count: usize) {
		if self.selected_key >= count {
			self.selected_key = count.saturating_sub(1);
		}
	}

	pub(crate) fn select(&mut self, key: usize, item: T) {
		self.selected_key = key;
		self.header_item = Some(item);
	}

	pub(crate) fn set_focus(&mut self, focused: bool) {
		self.has_focus = focused;
	}

	pub(crate) fn set_search_committed(&mut self, committed: bool) {
		self.search_committed = committed;
	}

	fn reset(&mut self) {
		self.anchor = None;
		self.selected_key = 0;
		self.has_focus = false;
		self.search_committed = false;
		self.header_item = None;
	}
}
