use ratatui::style::{Color, Modifier, Style};

use super::Theme;

pub(super) const DEFAULT_NAME: &str = "default";
pub(super) const LIGHT_NAME: &str = "light";
pub(super) const SOLARIZED_NAME: &str = "solarized";

pub const DEFAULT: Theme = Theme {
	header: Style::new().fg(Color::Rgb(226, 232, 240)).bg(Color::Rgb(30, 41, 59)),
	row_highlight: Style::new()
		.bg(Color::Rgb(51, 65, 85))
		.fg(Color::Rgb(125, 211, 252)),
	prompt: Style::new().fg(Color::Rgb(56, 189, 248)),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
	highlight: Style::new()
		.fg(Color::Rgb(250, 204, 21))
		.add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Rgb(71, 85, 105)),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Rgb(148, 163, 184)),
};

pub const SOLARIZED: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(7, 54, 66)),
	row_highlight: Style::new()
		.bg(Color::Rgb(0, 43, 54))
		.fg(Color::Rgb(181, 137, 0)),
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	empty: Style::new().fg(Color::Rgb(88, 110, 117)),
	highlight: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Rgb(88, 110, 117)),
};
