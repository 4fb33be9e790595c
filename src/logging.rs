//! Log capture for the in-terminal log pane.

use anyhow::{Result, anyhow};
use log::LevelFilter;

/// Route `log` records into `tui-logger`, keeping those at or above `level`.
///
/// The picker's log pane drains and shows them while it runs.
pub fn initialize(level: LevelFilter) -> Result<()> {
	tui_logger::init_logger(LevelFilter::Trace)
		.map_err(|err| anyhow!("failed to install the log collector: {err}"))?;
	tui_logger::set_default_level(level);
	log::debug!("logging initialised at {level}");
	Ok(())
}
