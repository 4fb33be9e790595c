use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail, ensure};
use config::{Config, ConfigError, File};
use hoverpick::app_dirs;
use hoverpick::popup::{
	DEFAULT_SEARCH_HINT, DEFAULT_SEARCH_LABEL, HoverPopup, PopupFlags,
};
use hoverpick::tui::theme::{self, Theme};
use log::LevelFilter;
use serde::Deserialize;

use crate::cli::CliArgs;

const DEFAULT_WINDOW_LABEL: &str = "hoverpick";
const DEFAULT_THEME: &str = "default";
const DEFAULT_GRID_COLUMNS: usize = 4;
const DEFAULT_MIN_WIDTH: f32 = 32.0;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	popup: PopupSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PopupSection {
	selector_list: Option<bool>,
	search_bar: Option<bool>,
	grabbable: Option<bool>,
	grid: Option<bool>,
	header: Option<bool>,
	stay_on_blur: Option<bool>,
	columns: Option<usize>,
	min_width: Option<f32>,
	window_label: Option<String>,
	list_label: Option<String>,
	search_label: Option<String>,
	search_hint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	initial_query: Option<String>,
	show_log: Option<bool>,
	log_level: Option<String>,
}

pub struct ResolvedConfig {
	pub popup: HoverPopup,
	pub theme_name: String,
	pub theme: Theme,
	pub initial_query: String,
	pub show_log: bool,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		let flags = self.popup.flags();
		println!("Effective configuration:");
		println!("  Window title: {}", self.popup.window_label());
		println!(
			"  Selector list: {}",
			bool_to_word(flags.contains(PopupFlags::SELECTOR_LIST))
		);
		println!(
			"  Search bar: {}",
			bool_to_word(flags.contains(PopupFlags::SEARCH_BAR))
		);
		println!("  Header: {}", bool_to_word(flags.contains(PopupFlags::HEADER)));
		if flags.contains(PopupFlags::GRID) {
			println!("  Layout: grid ({} columns)", self.popup.columns());
		} else {
			println!("  Layout: list");
		}
		println!(
			"  Grabbable: {}",
			bool_to_word(flags.contains(PopupFlags::GRABBABLE))
		);
		println!(
			"  Stay on blur: {}",
			bool_to_word(flags.contains(PopupFlags::STAY_ON_BLUR))
		);
		println!("  Minimum width: {}", self.popup.min_width());
		println!("  UI theme: {}", self.theme_name);
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
		println!("  Log pane: {}", bool_to_word(self.show_log));
		println!("  Log level: {}", self.log_level);
	}
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("hoverpick")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".hoverpick.toml"));
		files.push(current_dir.join("hoverpick.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.popup.window_label = Some(title);
		}
		if let Some(hint) = cli.hint.clone() {
			self.popup.search_hint = Some(hint);
		}
		if let Some(value) = cli.search_bar {
			self.popup.search_bar = Some(value);
		}
		if let Some(value) = cli.header {
			self.popup.header = Some(value);
		}
		if let Some(value) = cli.grid {
			self.popup.grid = Some(value);
		}
		if let Some(value) = cli.columns {
			self.popup.columns = Some(value);
		}
		if let Some(value) = cli.grabbable {
			self.popup.grabbable = Some(value);
		}
		if let Some(value) = cli.stay_on_blur {
			self.popup.stay_on_blur = Some(value);
		}
		if let Some(value) = cli.min_width {
			self.popup.min_width = Some(value);
		}

		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if cli.show_log {
			self.ui.show_log = Some(true);
		}
		if let Some(level) = cli.log_level {
			self.ui.log_level = Some(level.as_str().to_string());
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let popup = self.popup.build()?;

		let theme_name = self
			.ui
			.theme
			.map(|name| name.trim().to_string())
			.filter(|name| !name.is_empty())
			.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let Some(theme) = theme::by_name(&theme_name) else {
			bail!("unknown theme '{theme_name}'");
		};

		let log_level = match self.ui.log_level {
			Some(level) => parse_level(&level)?,
			None => LevelFilter::Info,
		};

		Ok(ResolvedConfig {
			popup,
			theme_name,
			theme,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			show_log: self.ui.show_log.unwrap_or(false),
			log_level,
		})
	}
}

impl PopupSection {
	fn build(self) -> Result<HoverPopup> {
		let mut flags = PopupFlags::empty();
		flags.set(PopupFlags::SELECTOR_LIST, self.selector_list.unwrap_or(true));
		flags.set(PopupFlags::SEARCH_BAR, self.search_bar.unwrap_or(true));
		flags.set(PopupFlags::HEADER, self.header.unwrap_or(true));
		flags.set(PopupFlags::GRID, self.grid.unwrap_or(false));
		flags.set(PopupFlags::GRABBABLE, self.grabbable.unwrap_or(false));
		flags.set(PopupFlags::STAY_ON_BLUR, self.stay_on_blur.unwrap_or(false));

		let min_width = self.min_width.unwrap_or(DEFAULT_MIN_WIDTH);
		ensure!(
			min_width.is_finite() && min_width >= 0.0,
			"popup min_width must be a non-negative number"
		);

		let popup = HoverPopup::new(flags)
			.with_window_label(
				self.window_label
					.unwrap_or_else(|| DEFAULT_WINDOW_LABEL.to_string()),
			)
			.with_list_label(self.list_label.unwrap_or_default())
			.with_search_label(
				self.search_label
					.unwrap_or_else(|| DEFAULT_SEARCH_LABEL.to_string()),
			)
			.with_search_hint(
				self.search_hint
					.unwrap_or_else(|| DEFAULT_SEARCH_HINT.to_string()),
			)
			.with_min_width(min_width)
			.with_columns(self.columns.unwrap_or(DEFAULT_GRID_COLUMNS))
			.context("invalid popup columns")?;

		Ok(popup)
	}
}

fn parse_level(value: &str) -> Result<LevelFilter> {
	value
		.trim()
		.parse()
		.map_err(|_| anyhow!("unknown log level '{value}'"))
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
