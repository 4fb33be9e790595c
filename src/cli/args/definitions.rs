use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogLevelArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `hoverpick` binary.
#[derive(Parser, Debug)]
#[command(
	name = "hoverpick",
	version,
	long_version = long_version(),
	about = "Pick one line from a list in a hover popup",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "FILE",
		help = "Newline-separated items to pick from (default: standard input)"
	)]
	pub(crate) items: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "HOVERPICK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the popup window title (default: hoverpick)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Hint shown in the empty search bar (default: Search...)"
	)]
	pub(crate) hint: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: default)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "search-bar",
		value_parser = BoolishValueParser::new(),
		help = "Show the search bar (default: enabled)"
	)]
	pub(crate) search_bar: Option<bool>,
	#[arg(
		long = "header",
		value_parser = BoolishValueParser::new(),
		help = "Show the last selection above the list (default: enabled)"
	)]
	pub(crate) header: Option<bool>,
	#[arg(
		short = 'g',
		long = "grid",
		value_parser = BoolishValueParser::new(),
		help = "Lay items out in a grid (default: disabled)"
	)]
	pub(crate) grid: Option<bool>,
	#[arg(
		long,
		value_name = "NUM",
		help = "Number of grid columns (default: 4)"
	)]
	pub(crate) columns: Option<usize>,
	#[arg(
		long = "grabbable",
		value_parser = BoolishValueParser::new(),
		help = "Let the popup be dragged by its top border (default: disabled)"
	)]
	pub(crate) grabbable: Option<bool>,
	#[arg(
		long = "stay-on-blur",
		value_parser = BoolishValueParser::new(),
		help = "Keep the popup open when clicking outside it (default: disabled)"
	)]
	pub(crate) stay_on_blur: Option<bool>,
	#[arg(
		long = "min-width",
		value_name = "CELLS",
		help = "Minimum popup width in terminal cells (default: 32)"
	)]
	pub(crate) min_width: Option<f32>,
	#[arg(
		long = "show-log",
		help = "Show the log pane below the popup (default: disabled)"
	)]
	pub(crate) show_log: bool,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Lowest log level shown in the log pane (default: info)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the outcome (default: plain)"
	)]
	pub(crate) output: OutputFormat,
}
