use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, ensure};
use hoverpick::popup::HoverPopup;
use hoverpick::tui::{self, PickOutcome, RunOptions};
use log::info;

use crate::settings::ResolvedConfig;

/// Coordinates loading the items and running the picker.
pub(crate) struct PickWorkflow {
	items: Vec<String>,
	popup: HoverPopup,
	options: RunOptions,
}

impl PickWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig, source: Option<&Path>) -> Result<Self> {
		let items = read_items(source)?;
		ensure!(!items.is_empty(), "no items to pick from");

		let ResolvedConfig {
			popup,
			theme,
			initial_query,
			show_log,
			..
		} = config;

		Ok(Self {
			items,
			popup,
			options: RunOptions {
				theme,
				show_log,
				initial_query,
			},
		})
	}

	pub(crate) fn run(self) -> Result<PickOutcome<String>> {
		info!("picking from {} items", self.items.len());
		tui::run(self.items, &self.popup, self.options)
	}
}

/// Read newline-separated items from `source`, or standard input when absent.
fn read_items(source: Option<&Path>) -> Result<Vec<String>> {
	let text = match source {
		Some(path) => fs::read_to_string(path)
			.with_context(|| format!("failed to read items from {}", path.display()))?,
		None => {
			let mut text = String::new();
			io::stdin()
				.read_to_string(&mut text)
				.context("failed to read items from standard input")?;
			text
		}
	};
	Ok(parse_items(&text))
}

fn parse_items(text: &str) -> Vec<String> {
	text.lines()
		.map(|line| line.trim_end_matches('\r'))
		.filter(|line| !line.trim().is_empty())
		.map(str::to_string)
		.collect()
}
