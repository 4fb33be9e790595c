mod cli;
mod settings;
mod workflow;

use std::path::Path;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use hoverpick::{logging, tui};
use settings::ResolvedConfig;
use workflow::PickWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in tui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if resolved.show_log {
		logging::initialize(resolved.log_level)?;
	}

	run_picker(cli.output, cli.items.as_deref(), resolved)
}

/// Run the picker over the items and print the outcome in the chosen format.
fn run_picker(format: OutputFormat, source: Option<&Path>, settings: ResolvedConfig) -> Result<()> {
	let workflow = PickWorkflow::from_config(settings, source)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
