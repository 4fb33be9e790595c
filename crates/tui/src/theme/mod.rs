//! Colours of the popup overlay.

mod builtins;

use ratatui::style::{Color, Style};

pub use builtins::{DEFAULT, LIGHT, SOLARIZED};

/// A theme containing styles for the popup elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for the header line.
	pub header: Style,
	/// Style for the selected row.
	pub row_highlight: Style,
	/// Style for the search prompt.
	pub prompt: Style,
	/// Style for the search hint and empty states.
	pub empty: Style,
	/// Style for matched characters.
	pub highlight: Style,
	pub border: Style,
}

impl Theme {
	/// Style for the title of a grabbable window.
	#[must_use]
	pub fn title_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.bg(self.header.bg.unwrap_or(Color::Reset))
	}
}

impl Default for Theme {
	fn default() -> Self {
		DEFAULT
	}
}

const REGISTRY: &[(&str, Theme)] = &[
	(builtins::DEFAULT_NAME, DEFAULT),
	(builtins::LIGHT_NAME, LIGHT),
	(builtins::SOLARIZED_NAME, SOLARIZED),
];

/// Look up a built-in theme, ignoring case and surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = normalize_name(name);
	REGISTRY
		.iter()
		.find(|(candidate, _)| *candidate == normalized)
		.map(|(_, theme)| *theme)
}

/// Names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	REGISTRY.iter().map(|(name, _)| *name).collect()
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}
