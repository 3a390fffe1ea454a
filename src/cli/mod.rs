mod args;
mod output;

use clap::Parser;
pub(crate) use args::CliArgs;
pub(crate) use output::print_outcome;

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}
