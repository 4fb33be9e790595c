//! Stateful hover-popup selector for immediate-mode interfaces.
//!
//! A [`HoverPopup`] is drawn once per frame through a [`PopupSurface`]. Its
//! selection, anchor and focus live in a host-owned [`PopupSession`], and the
//! host's [`PopupDelegate`] filters, draws and receives the chosen items.
//! Rows can be browsed as a list or a grid with the arrow and page keys,
//! narrowed with a search bar, and the popup closes itself when it loses
//! focus or escape is pressed.

mod error;
pub mod filter;
mod flags;
mod focus;
pub mod grid;
mod input;
pub mod navigation;
mod popup;
mod session;
pub mod surface;

pub use error::PopupError;
pub use filter::fuzzy_filter;
pub use flags::PopupFlags;
pub use focus::FocusTracker;
pub use grid::Grid;
pub use input::{InputSnapshot, NavKeys, Point};
pub use navigation::{FAST_SCROLL_JUMP, NavigationPlan, Topology};
pub use popup::{
	CloseReason, DEFAULT_COLUMNS, DEFAULT_MIN_WIDTH, DEFAULT_SEARCH_HINT, DEFAULT_SEARCH_LABEL,
	HoverPopup, PopupDelegate, PopupFrame, RowReport, SEARCH_BAR_LIMIT,
};
pub use session::{Admission, PopupSession, SessionToken};
pub use surface::{KeyboardTarget, PopupSurface, SearchBarSpec, WindowSpec};
