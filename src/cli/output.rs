use std::io::{self, Write};

use crate::workflow::PickOutcome;

/// Write the accepted lines to stdout, one per line, in selection order.
/// A cancelled session writes nothing.
pub(crate) fn print_outcome(outcome: &PickOutcome) -> io::Result<()> {
	let stdout = io::stdout();
	let mut out = stdout.lock();
	write_lines(&mut out, outcome)?;
	out.flush()
}

fn write_lines<W: Write>(out: &mut W, outcome: &PickOutcome) -> io::Result<()> {
	if !outcome.accepted {
		return Ok(());
	}
	for line in &outcome.lines {
		writeln!(out, "{line}")?;
	}
	Ok(())
}
