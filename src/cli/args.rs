use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Command-line arguments accepted by the `limn` binary.
#[derive(Parser, Debug)]
#[command(
	name = "limn",
	version,
	about = "Interactive line picker for newline-delimited stdin"
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long,
		help = "Match items case insensitively (default: case sensitive)"
	)]
	pub(crate) ignorecase: bool,
	#[arg(
		short,
		long,
		help = "Wrap cursor motion past either end of the list (default: disabled)"
	)]
	pub(crate) wrap: bool,
	#[arg(
		short,
		long,
		value_name = "LINES",
		help = "List items vertically with the given number of lines (default: 0, horizontal)"
	)]
	pub(crate) list: Option<u16>,
	#[arg(
		short,
		long,
		value_name = "TEXT",
		help = "Prompt text shown before the filter (default: limn)"
	)]
	pub(crate) prompt: Option<String>,
	#[arg(
		short = 'I',
		long,
		value_name = "INDEX",
		help = "Highlight the item at this index on startup (default: 0)"
	)]
	pub(crate) index: Option<usize>,
	#[arg(
		short = 'q',
		long,
		value_name = "TEXT",
		help = "Seed the filter with an initial query (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "LIMN_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(long, hide = true)]
	pub(crate) disco: bool,
}
