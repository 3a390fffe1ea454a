//! The hidden `--disco` easter egg.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::cursor::{Hide, Show};
use ratatui::crossterm::event::{self, Event};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{disable_raw_mode, enable_raw_mode};

const FLOOR_WIDTH: usize = 80;
const FRAME_DELAY: Duration = Duration::from_millis(140);

/// Restores the cursor and cooked mode however the dance ends.
struct DanceGuard;

impl DanceGuard {
	fn acquire() -> Result<Self> {
		enable_raw_mode()?;
		execute!(io::stdout(), Hide)?;
		Ok(Self)
	}
}

impl Drop for DanceGuard {
	fn drop(&mut self) {
		let _ = execute!(io::stdout(), Show);
		let _ = disable_raw_mode();
		println!();
	}
}

/// Dance across the terminal until any key interrupts.
pub fn disco() -> Result<()> {
	let _guard = DanceGuard::acquire()?;
	let mut out = io::stdout();

	loop {
		for step in 1..FLOOR_WIDTH - 1 {
			let pad = if step > FLOOR_WIDTH / 2 {
				FLOOR_WIDTH - step
			} else {
				step
			};
			let (lead, trail) = if step % 2 == 0 {
				("\\o>", "<o/")
			} else {
				("<o/", "\\o>")
			};
			let banner = if step % 4 == 0 { "     " } else { "DISCO" };
			let floor = if step % 2 == 0 { "'" } else { "^" };
			let shimmy = floor.repeat(step.abs_diff(FLOOR_WIDTH / 2));
			write!(out, "\r\x1b[2K    {:pad$}{lead} {banner} {trail} {shimmy}", "")?;
			out.flush()?;

			if event::poll(FRAME_DELAY)? && matches!(event::read()?, Event::Key(_)) {
				return Ok(());
			}
		}
	}
}
