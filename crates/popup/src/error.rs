use thiserror::Error;

/// Errors raised while configuring a [`HoverPopup`](crate::HoverPopup).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PopupError {
	/// Grid arithmetic needs at least one column.
	#[error("a hover popup needs at least one column")]
	ZeroColumns,

	/// The search buffer limit must leave room for a character.
	#[error("search bar limit must be at least one character")]
	ZeroSearchLimit,
}
