use anyhow::Result;
use hoverpick::tui::PickOutcome;

/// Print a plain-text representation of the pick outcome.
pub(crate) fn print_plain(outcome: &PickOutcome<String>) {
	if !outcome.accepted {
		println!("Selection cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(item) => println!("{item}"),
		None => println!("No selection"),
	}
}

/// Format the pick outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickOutcome<String>) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the pick outcome.
pub(crate) fn print_json(outcome: &PickOutcome<String>) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
