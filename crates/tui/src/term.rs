//! Terminal acquisition and the blocking render/poll surface.

use std::io::{self, Stderr};

use limn_menu::{Frontend, KeyClass, KeyPress, Menu, MenuError};
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, TerminalOptions, Viewport};

use crate::keys::classify;
use crate::render::draw;

/// Terminal frontend drawing an inline viewport on stderr.
///
/// Raw mode is acquired on construction and released on drop, so every exit
/// path (including errors unwinding through the workflow) restores the
/// terminal before stdout is written.
pub struct TermFrontend {
	terminal: Terminal<CrosstermBackend<Stderr>>,
}

impl TermFrontend {
	/// Acquire the terminal with an inline viewport of `lines + 1` rows:
	/// one row for the prompt and filter, the rest for the vertical list.
	pub fn new(lines: u16) -> Result<Self, MenuError> {
		enable_raw_mode().map_err(|err| MenuError::BackendInit(err.to_string()))?;

		let backend = CrosstermBackend::new(io::stderr());
		let viewport = Viewport::Inline(lines.saturating_add(1));
		let terminal = Terminal::with_options(backend, TerminalOptions { viewport })
			.map_err(|err| {
				let _ = disable_raw_mode();
				MenuError::BackendInit(err.to_string())
			})?;

		Ok(Self { terminal })
	}
}

impl Frontend for TermFrontend {
	fn render(&mut self, menu: &Menu) -> Result<(), MenuError> {
		self.terminal.draw(|frame| draw(frame, menu))?;
		Ok(())
	}

	fn poll_key(&mut self) -> Result<KeyPress, MenuError> {
		loop {
			match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					return Ok(classify(key));
				}
				// A resize is still one input unit; reported as unbound so
				// the loop re-renders without mutating the menu.
				Event::Resize(_, _) => return Ok(KeyPress::of(KeyClass::Other)),
				_ => {}
			}
		}
	}
}

impl Drop for TermFrontend {
	fn drop(&mut self) {
		let _ = self.terminal.clear();
		let _ = self.terminal.show_cursor();
		let _ = disable_raw_mode();
	}
}
