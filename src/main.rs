mod cli;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use cli::parse_cli;
use workflow::PickWorkflow;

fn main() -> ExitCode {
	env_logger::init();

	match run() {
		Ok(true) => ExitCode::SUCCESS,
		Ok(false) => ExitCode::FAILURE,
		Err(err) => {
			eprintln!("limn: {err:#}");
			ExitCode::FAILURE
		}
	}
}

/// Returns whether the session ended with a completed selection; anything
/// else maps to a failure exit status.
fn run() -> Result<bool> {
	let cli = parse_cli();

	if cli.disco {
		limn_tui::disco()?;
		return Ok(false);
	}

	let resolved = settings::load(&cli)?;
	let outcome = PickWorkflow::from_config(resolved).run()?;
	cli::print_outcome(&outcome)?;

	Ok(outcome.accepted)
}
